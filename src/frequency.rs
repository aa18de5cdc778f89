use crate::corpus::Document;
use crate::dictionary::TermDictionary;
use crate::terms;
use crate::vocabulary::Vocabulary;

/* Per-document term counts, dense over the vocabulary's axis order.
 * `length` is the total token count, including tokens that matched no
 * vocabulary term; the coverage ratio divides by it.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct TermCounts {
    counts: Vec<u64>,
    pub length: u64,
}

impl TermCounts {
    pub fn count(&self, axis: usize) -> u64 {
        self.counts[axis]
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

/* A corpus document's id together with its term counts. */
#[derive(Debug, Clone)]
pub struct DocumentCounts {
    pub id: String,
    pub counts: TermCounts,
}

pub fn count(text: &str, vocabulary: &Vocabulary, dictionary: &TermDictionary) -> TermCounts {
    let mut counts = vec![0u64; vocabulary.len()];
    let tokens = terms::tokenize(text);
    let length = tokens.len() as u64;

    for token in tokens {
        // only tokens whose canonical term is a vocabulary axis count;
        // everything else still counts toward length
        if let Some(term) = dictionary.canonical(&token) {
            if let Some(axis) = vocabulary.index_of(term) {
                counts[axis] += 1;
            }
        }
    }

    TermCounts { counts, length }
}

pub fn count_corpus(
    documents: &[Document],
    vocabulary: &Vocabulary,
    dictionary: &TermDictionary,
) -> Vec<DocumentCounts> {
    documents
        .iter()
        .map(|document| DocumentCounts {
            id: document.id.clone(),
            counts: count(&document.text, vocabulary, dictionary),
        })
        .collect()
}
