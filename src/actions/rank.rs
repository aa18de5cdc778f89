use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::corpus;
use crate::frequency;
use crate::profile::Profile;
use crate::scorer::{self, ScoreConfig};
use crate::vocabulary::Vocabulary;

/* One profile's share of the report: its interests and the documents
 * that cleared the score threshold, best first.
 */
#[derive(Serialize)]
pub struct ProfileReport {
    pub name: String,
    pub interests: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Serialize)]
pub struct Recommendation {
    pub document: String,
    pub score: f64,
}

pub fn execute(
    corpus_dir: &Path,
    profiles_path: &Path,
    dictionary_path: &Path,
    delimiter: char,
    dictionary_vocabulary: bool,
    config: &ScoreConfig,
) -> Result<Vec<ProfileReport>> {
    let (mut profiles, interest_vocabulary) = corpus::load_profiles(profiles_path, delimiter)?;
    let dictionary = corpus::load_dictionary(dictionary_path, delimiter)?;
    let vocabulary = if dictionary_vocabulary {
        Vocabulary::from_terms(dictionary.canonical_terms().map(str::to_string))
    } else {
        interest_vocabulary
    };
    let documents = corpus::documents_in_dir(corpus_dir)?;

    tracing::info!(
        "scoring {} documents against {} profiles over {} terms",
        documents.len(),
        profiles.len(),
        vocabulary.len()
    );

    let counted = frequency::count_corpus(&documents, &vocabulary, &dictionary);
    scorer::recommend(&mut profiles, &counted, &vocabulary, config);

    Ok(profiles.iter().map(report).collect())
}

pub fn rank(
    corpus_dir: &Path,
    profiles_path: &Path,
    dictionary_path: &Path,
    delimiter: char,
    dictionary_vocabulary: bool,
    config: &ScoreConfig,
    json: bool,
) -> Result<()> {
    let reports = execute(
        corpus_dir,
        profiles_path,
        dictionary_path,
        delimiter,
        dictionary_vocabulary,
        config,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }
    println!(
        "Documents with score less than {} are hidden",
        config.threshold
    );
    Ok(())
}

fn report(profile: &Profile) -> ProfileReport {
    let mut interests: Vec<String> = profile.interests().iter().cloned().collect();
    interests.sort();
    let recommendations = profile
        .ranked()
        .into_iter()
        .map(|(document, score)| Recommendation {
            document: document.to_string(),
            score,
        })
        .collect();
    ProfileReport {
        name: profile.name.clone(),
        interests,
        recommendations,
    }
}

fn print_report(report: &ProfileReport) {
    let banner = "=".repeat(42);
    println!("{}", banner);
    println!("{:^42}", report.name);
    println!("{}", banner);
    println!("{:^42}", format!("Interests: {}", report.interests.join(" & ")));
    println!("{}", banner);
    println!("{:^20}||{:^20}", "Recommendation", "Score");
    println!("{}", banner);
    for recommendation in &report.recommendations {
        // document ids longer than the column are cut to fit
        let id: String = recommendation.document.chars().take(16).collect();
        println!("{:^20}||{:^20}", id, recommendation.score.to_string());
        println!("{}", banner);
    }
}
