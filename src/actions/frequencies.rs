use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::corpus;
use crate::frequency;
use crate::vocabulary::Vocabulary;

/* Diagnostic view of the counting stage: document id to term to count,
 * zero-filled over the whole vocabulary so the full vector is visible.
 */
pub fn execute(
    corpus_dir: &Path,
    profiles_path: &Path,
    dictionary_path: &Path,
    delimiter: char,
    dictionary_vocabulary: bool,
) -> Result<BTreeMap<String, BTreeMap<String, u64>>> {
    let (_, interest_vocabulary) = corpus::load_profiles(profiles_path, delimiter)?;
    let dictionary = corpus::load_dictionary(dictionary_path, delimiter)?;
    let vocabulary = if dictionary_vocabulary {
        Vocabulary::from_terms(dictionary.canonical_terms().map(str::to_string))
    } else {
        interest_vocabulary
    };
    let documents = corpus::documents_in_dir(corpus_dir)?;
    let counted = frequency::count_corpus(&documents, &vocabulary, &dictionary);

    let mut table = BTreeMap::new();
    for document in counted {
        let terms: BTreeMap<String, u64> = vocabulary
            .axes()
            .iter()
            .enumerate()
            .map(|(axis, term)| (term.clone(), document.counts.count(axis)))
            .collect();
        table.insert(document.id, terms);
    }
    Ok(table)
}

pub fn frequencies(
    corpus_dir: &Path,
    profiles_path: &Path,
    dictionary_path: &Path,
    delimiter: char,
    dictionary_vocabulary: bool,
    json: bool,
) -> Result<()> {
    let table = execute(
        corpus_dir,
        profiles_path,
        dictionary_path,
        delimiter,
        dictionary_vocabulary,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let banner = "*".repeat(42);
    println!("{}", banner);
    println!("{:^42}", "Terms frequencies (similar grouped)");
    println!("{}", banner);
    for (document, terms) in &table {
        println!("{}", document);
        for (term, count) in terms {
            println!("    {}: {}", term, count);
        }
    }
    println!("{}", banner);
    Ok(())
}
