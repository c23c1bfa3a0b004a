use super::stop_words::is_stop_word;

/// Splits `text` into lower-cased word tokens of two or more characters, dropping stop words.
///
/// A word character is alphanumeric or `_`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().nth(1).is_some())
        .filter(|token| !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}

/// Expands tokens into all n-grams of length `1..=max_n`, space-joined.
///
/// Unigrams come first, then bigrams, and so on, each in text order.
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut terms = Vec::with_capacity(tokens.len() * max_n.max(1));
    for n in 1..=max_n {
        if n > tokens.len() {
            break;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}

/// Tokenizes and expands into terms in one step.
#[inline]
pub fn analyze(text: &str, max_n: usize) -> Vec<String> {
    ngrams(&tokenize(text), max_n)
}
