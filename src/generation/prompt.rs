use std::fmt::Write;

use crate::constants::{PROMPT_HISTORY_CHARS, PROMPT_HISTORY_WINDOW};

use super::types::{GenerationRequest, INTENT_LABELS};

const TECHNICAL_KEYWORDS: [&str; 7] = [
    "code",
    "program",
    "write",
    "script",
    "function",
    "algorithm",
    "example",
];

const TECHNICAL_MAX_CHARS: usize = 2000;
const TECHNICAL_MAX_SENTENCES: usize = 10;
const GENERAL_MAX_CHARS: usize = 500;
const GENERAL_MAX_SENTENCES: usize = 3;

const BASE_CONFIDENCE: f32 = 0.8;
const CONFIDENCE_STEP: f32 = 0.05;
const MAX_CONFIDENCE: f32 = 0.95;

const TECHNICAL_SYSTEM_PROMPT: &str = "You are a helpful customer support assistant with technical expertise. \
Provide detailed, complete, and helpful responses to customer inquiries. \
For code requests, provide complete working examples with explanations. \
For complex questions, provide thorough step-by-step guidance. \
Maintain a professional, friendly tone.";

const GENERAL_SYSTEM_PROMPT: &str = "You are a helpful customer support assistant. \
Provide clear, helpful responses to customer inquiries. \
Keep responses appropriate to the question complexity. \
Maintain a professional, friendly tone.";

/// Whether the message asks for code or other long-form technical help.
pub fn is_technical(message: &str) -> bool {
    let lower = message.to_lowercase();
    TECHNICAL_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub fn system_prompt(message: &str) -> &'static str {
    if is_technical(message) {
        TECHNICAL_SYSTEM_PROMPT
    } else {
        GENERAL_SYSTEM_PROMPT
    }
}

pub fn intent_prompt(message: &str) -> String {
    format!(
        "Classify the following customer support message into one of these intents:\n{}\n\n\
         Message: \"{message}\"\n\n\
         Respond with only the intent name (no explanation):",
        INTENT_LABELS.join(", ")
    )
}

/// User prompt carrying the intent, related FAQ, and recent history.
pub fn response_prompt(request: &GenerationRequest, intent: &str) -> String {
    let mut prompt = format!("Customer Intent: {intent}\n");

    if let Some(faq) = &request.context {
        let _ = writeln!(prompt, "Related FAQ: {} - {}", faq.question, faq.response);
    }

    if !request.history.is_empty() {
        prompt.push_str("\nRecent conversation:\n");
        let skip = request.history.len().saturating_sub(PROMPT_HISTORY_WINDOW);
        for turn in &request.history[skip..] {
            let content: String = turn.content.chars().take(PROMPT_HISTORY_CHARS).collect();
            let _ = writeln!(prompt, "{}: {content}", turn.role.speaker());
        }
    }

    let _ = write!(
        prompt,
        "\nCurrent Customer Message: \"{}\"\n\nAssistant Response:",
        request.message
    );
    prompt
}

/// Strips echoed prompt labels and trims overly long replies to whole sentences.
pub fn clean_response(response: &str, message: &str) -> String {
    let cleaned = response
        .replace("Assistant Response:", "")
        .replace("Response:", "")
        .trim()
        .to_string();

    let technical = is_technical(message) || message.to_lowercase().contains("how to");
    let (max_chars, max_sentences) = if technical {
        (TECHNICAL_MAX_CHARS, TECHNICAL_MAX_SENTENCES)
    } else {
        (GENERAL_MAX_CHARS, GENERAL_MAX_SENTENCES)
    };

    if cleaned.chars().count() <= max_chars {
        return cleaned;
    }

    let sentences: Vec<&str> = cleaned.split('.').collect();
    if sentences.len() <= max_sentences {
        return cleaned;
    }

    let kept: Vec<&str> = sentences[..max_sentences].iter().map(|s| s.trim()).collect();
    format!("{}.", kept.join(". "))
}

/// Heuristic confidence for a model reply, in `[0.8, 0.95]`.
pub fn estimate_confidence(message: &str, intent: &str, response: &str) -> f32 {
    let mut confidence = BASE_CONFIDENCE;

    if message.split_whitespace().count() > 3 {
        confidence += CONFIDENCE_STEP;
    }
    if (10..=50).contains(&response.split_whitespace().count()) {
        confidence += CONFIDENCE_STEP;
    }
    if matches!(intent, "greeting" | "compliment") {
        confidence += CONFIDENCE_STEP;
    }

    confidence.min(MAX_CONFIDENCE)
}
