use std::collections::HashMap;

use crate::terms;

/* Maps a stemmed token to the canonical term of its synonym cluster.
 * Many tokens fold into one term; lookups for unknown tokens return None
 * and the token simply goes uncounted.
 */
#[derive(Debug, Default)]
pub struct TermDictionary {
    entries: HashMap<String, String>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // the first entry of the cluster, after stemming, becomes the
    // canonical term for every stemmed entry including itself; duplicate
    // keys across clusters are last write wins
    pub fn insert_cluster(&mut self, cluster: &[String]) {
        let Some(first) = cluster.first() else {
            return;
        };
        let canonical = terms::stem(first);
        for synonym in cluster {
            self.entries.insert(terms::stem(synonym), canonical.clone());
        }
    }

    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn canonical_terms(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
