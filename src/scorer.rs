use std::collections::HashMap;

use crate::frequency::DocumentCounts;
use crate::profile::Profile;
use crate::space::VectorSpace;
use crate::terms;
use crate::vocabulary::Vocabulary;

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MULTIPLIER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreMode {
    // the score is the cosine between profile and document
    CosineOnly,
    // the cosine scaled by the share of the document's tokens matching
    // the profile's interests, amplified by a fixed multiplier
    CoverageWeighted { multiplier: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreConfig {
    pub threshold: f64,
    pub mode: ScoreMode,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            mode: ScoreMode::CoverageWeighted {
                multiplier: DEFAULT_MULTIPLIER,
            },
        }
    }
}

/* Scores every (profile, document) pair and records the scores that clear
 * the threshold on the profile. Pure in everything but the profiles' own
 * score maps: rerunning over freshly built profiles reproduces the same
 * scores exactly.
 */
pub fn recommend(
    profiles: &mut [Profile],
    documents: &[DocumentCounts],
    vocabulary: &Vocabulary,
    config: &ScoreConfig,
) {
    let space = VectorSpace::new(vocabulary);

    let document_vectors: Vec<Vec<f64>> = documents
        .iter()
        .map(|document| {
            let head = document.counts.counts().iter().map(|&c| c as f64).collect();
            space.normalized(head)
        })
        .collect();

    for profile in profiles.iter_mut() {
        let interest_stems: Vec<String> =
            profile.interests().iter().map(|i| terms::stem(i)).collect();
        let point: HashMap<String, f64> = interest_stems
            .iter()
            .map(|stem| (stem.clone(), 1.0))
            .collect();
        let query = space.normalized(space.project(&point));

        for (document, vector) in documents.iter().zip(&document_vectors) {
            let mut score = space.cosine(&query, vector);

            if let ScoreMode::CoverageWeighted { multiplier } = config.mode {
                // relevant over total token count, not over the
                // in-vocabulary count; interests whose stem is outside
                // the vocabulary contribute nothing
                let relevant: u64 = interest_stems
                    .iter()
                    .filter_map(|stem| vocabulary.index_of(stem))
                    .map(|axis| document.counts.count(axis))
                    .sum();
                let ratio = if document.counts.length == 0 {
                    0.0
                } else {
                    relevant as f64 / document.counts.length as f64
                };
                score *= ratio * multiplier;
            }

            if score > config.threshold {
                tracing::debug!(
                    "accepted {} for {} at {:.4}",
                    document.id,
                    profile.name,
                    score
                );
                profile.record(&document.id, score);
            }
        }
    }
}
