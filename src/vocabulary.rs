use std::collections::HashMap;

/* The fixed set of canonical terms spanning the vector space. Axis order
 * is sorted at construction and never changes afterwards, so every vector
 * built in one run lines up with every other and reports are reproducible
 * run to run.
 */
#[derive(Debug, Clone)]
pub struct Vocabulary {
    axes: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut axes: Vec<String> = terms.into_iter().collect();
        axes.sort();
        axes.dedup();
        let index = axes
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { axes, index }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}
