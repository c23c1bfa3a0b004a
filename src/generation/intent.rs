use super::types::INTENT_LABELS;

const GREETING_WORDS: [&str; 5] = ["hello", "hi", "hey", "good morning", "good afternoon"];
const QUESTION_WORDS: [&str; 8] = ["what", "how", "when", "where", "why", "can", "could", "would"];
const COMPLAINT_WORDS: [&str; 6] = [
    "problem",
    "issue",
    "wrong",
    "broken",
    "not working",
    "error",
];
const ORDER_WORDS: [&str; 6] = ["order", "purchase", "buy", "track", "delivery", "shipping"];

/// Keyword classifier used when the model cannot classify a message.
///
/// Substring matching, checked in priority order: greeting, complaint, order,
/// then a leading question word.
pub fn rule_based_intent(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contains_any(&GREETING_WORDS) {
        "greeting"
    } else if contains_any(&COMPLAINT_WORDS) {
        "complaint"
    } else if contains_any(&ORDER_WORDS) {
        "order_inquiry"
    } else if QUESTION_WORDS.iter().any(|w| lower.starts_with(w)) {
        "question"
    } else {
        "general"
    }
}

/// Maps raw model output onto a known intent label.
pub fn parse_intent_label(raw: &str) -> Option<&'static str> {
    let label = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c == '`')
        .to_lowercase();
    INTENT_LABELS.iter().copied().find(|known| *known == label)
}
