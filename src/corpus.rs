use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};

use crate::dictionary::TermDictionary;
use crate::profile::Profile;
use crate::terms;
use crate::vocabulary::Vocabulary;

static VALID_EXTENSIONS: &[&str] = &["txt"];

/* A corpus document: the filename stem as its id, plus the full text. */
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub text: String,
}

pub fn is_text_document(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => VALID_EXTENSIONS.iter().any(|e| extension == *e),
        None => false,
    }
}

pub fn documents_in_dir(dir: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_text_document(&path) {
            continue;
        }
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| anyhow!("invalid file name: {}", path.display()))?
            .to_string();
        let text = fs::read_to_string(&path)?;
        documents.push(Document { id, text });
    }

    // directory order is platform dependent; sort so counting and scoring
    // always see the corpus in the same order
    documents.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!("loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}

/* One profile per line: name, then interests, delimiter separated. The
 * vocabulary is the union of the stemmed interests of every profile.
 */
pub fn load_profiles(path: &Path, delimiter: char) -> Result<(Vec<Profile>, Vocabulary)> {
    let contents = fs::read_to_string(path)?;
    let mut profiles = Vec::new();
    let mut vocabulary_terms = Vec::new();

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() < 2 {
            return Err(anyhow!(
                "{}:{}: expected name{}interest..., got {:?}",
                path.display(),
                number + 1,
                delimiter,
                line
            ));
        }
        let interests: Vec<String> = fields[1..].iter().map(|f| f.to_string()).collect();
        vocabulary_terms.extend(interests.iter().map(|i| terms::stem(i)));
        profiles.push(Profile::new(fields[0], interests));
    }

    Ok((profiles, Vocabulary::from_terms(vocabulary_terms)))
}

/* One synonym cluster per line: the canonical term first, then its
 * synonyms, delimiter separated. Every field is stemmed on insert.
 */
pub fn load_dictionary(path: &Path, delimiter: char) -> Result<TermDictionary> {
    let contents = fs::read_to_string(path)?;
    let mut dictionary = TermDictionary::new();

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split(delimiter).map(|f| f.to_string()).collect();
        if fields.len() < 2 {
            return Err(anyhow!(
                "{}:{}: expected term{}synonym..., got {:?}",
                path.display(),
                number + 1,
                delimiter,
                line
            ));
        }
        dictionary.insert_cluster(&fields);
    }

    Ok(dictionary)
}
