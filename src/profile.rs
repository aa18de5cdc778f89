use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/* A user: a name, the raw interest strings from the profiles file, and
 * the recommendations accepted for them in the current run.
 */
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    interests: HashSet<String>,
    recommendations: HashMap<String, f64>,
}

impl Profile {
    pub fn new<I>(name: &str, interests: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            name: name.to_string(),
            interests: interests.into_iter().collect(),
            recommendations: HashMap::new(),
        }
    }

    pub fn interests(&self) -> &HashSet<String> {
        &self.interests
    }

    // last write wins; the scorer visits each document once per run
    pub fn record(&mut self, document_id: &str, score: f64) {
        self.recommendations.insert(document_id.to_string(), score);
    }

    pub fn recommendations(&self) -> &HashMap<String, f64> {
        &self.recommendations
    }

    // entries by descending score, ties broken on the document id so the
    // report order is reproducible
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .recommendations
            .iter()
            .map(|(id, score)| (id.as_str(), *score))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}
