/* Word normalization: alphabetic tokenization followed by a crude
 * suffix-stripping stemmer. Rules are precedence ordered and the first
 * match wins, so "caresses" reduces by the sses rule and never reaches
 * the bare s rule.
 */

pub fn stem(word: &str) -> String {
    if let Some(prefix) = word.strip_suffix("sses") {
        format!("{}ss", prefix)
    } else if let Some(prefix) = word.strip_suffix("ies") {
        format!("{}i", prefix)
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(prefix) = word.strip_suffix('s') {
        prefix.to_string()
    } else {
        word.to_string()
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| stem(&fragment.to_lowercase()))
        .collect()
}
