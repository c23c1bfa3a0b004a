use crate::constants::FALLBACK_CONFIDENCE;

use super::intent::rule_based_intent;
use super::types::{Generation, GenerationMethod};

const PREVIEW_CHARS: usize = 50;

const TECHNICAL_TERMS: [&str; 11] = [
    "python", "code", "program", "function", "algorithm", "machine learning", "script",
    "data", "variable", "loop", "import",
];

const MACHINE_LEARNING_REPLY: &str = r#"Machine learning is a subset of artificial intelligence that lets computers learn patterns from data instead of following hand-written rules. A minimal supervised example in Python:

```python
from sklearn.linear_model import LinearRegression
import numpy as np

X = np.array([[1], [2], [3], [4], [5]])
y = np.array([2, 4, 6, 8, 10])

model = LinearRegression().fit(X, y)
print(model.predict([[6]]))
```

The model learns from input/output pairs and predicts values for new inputs."#;

const PYTHON_REPLY: &str = r#"Python is a high-level, interpreted language known for readable syntax. A small example:

```python
def greet(name):
    return f"Hello, {name}!"

squares = [x**2 for x in range(1, 6)]
print(greet("World"), squares)
```

It is widely used for web development, data science, machine learning, and automation."#;

const CODE_REPLY: &str = r#"I'd be happy to help with programming! Most problems follow the same shape:

```python
def solve_problem(input_data):
    return process_data(input_data)

def process_data(data):
    return data * 2

print(solve_problem(5))
```

Could you share more specific details about what you'd like to build?"#;

const TECHNICAL_REPLY: &str = "I can help with technical questions! Could you be more specific about what programming concept, language feature, or technical topic you'd like to learn about?";

const HOW_TO_REPLY: &str = "I can help with step-by-step instructions! A general approach:\n\n\
1. Understand the requirements\n\
2. Break the task into smaller steps\n\
3. Work through each step methodically\n\
4. Test and verify the result\n\n\
Could you share more details about what you're trying to accomplish?";

/// Canned reply for `intent`, specialised by keywords in `message`.
pub fn template_response(message: &str, intent: &str) -> String {
    let lower = message.to_lowercase();
    let has_word = |word: &str| lower.split(|c: char| !c.is_alphanumeric()).any(|w| w == word);

    if TECHNICAL_TERMS.iter().any(|t| lower.contains(t)) || has_word("ai") || has_word("ml") {
        let reply = if lower.contains("machine learning") || has_word("ml") {
            MACHINE_LEARNING_REPLY
        } else if lower.contains("python") {
            PYTHON_REPLY
        } else if lower.contains("code") || lower.contains("program") {
            CODE_REPLY
        } else {
            TECHNICAL_REPLY
        };
        return reply.to_string();
    }

    if lower.contains("what is") || lower.contains("what are") {
        let topic = lower.replace("what is", "").replace("what are", "");
        return format!(
            "Great question! I can't give a detailed explanation right now. Could you rephrase \
             or tell me which aspect of '{}' you'd like to know about?",
            topic.trim()
        );
    }

    if lower.contains("how to") || lower.contains("how do") {
        return HOW_TO_REPLY.to_string();
    }

    let preview = preview(message);
    match intent {
        "greeting" => "Hello! I'm here to help with questions, orders, technical problems, and more. What can I assist you with today?".to_string(),
        "question" => format!("I'd be happy to help answer your question about: {preview}. Could you provide more specific details or context?"),
        "complaint" => "I apologize for any inconvenience you're experiencing. I'm here to help resolve this. Could you describe the specific problem you're encountering?".to_string(),
        "compliment" => "Thank you for your kind words! I'm glad I could help. Is there anything else you'd like to know?".to_string(),
        "order_inquiry" => "I can help you with order-related questions. Could you please provide more details about what you need assistance with?".to_string(),
        "technical_support" => format!("I'll help you troubleshoot this issue: {preview}. Let's work through it step by step. What specific problem are you seeing?"),
        "billing" => "I can assist with billing questions. What specific information do you need help with?".to_string(),
        "account" => "I'm here to help with your account. What would you like to know, or what issue can I help resolve?".to_string(),
        "product_info" => format!("I'd be happy to provide information about that. Based on your question '{preview}', what specific details would you like to know?"),
        _ => format!("Thank you for contacting us! I see you're asking about: '{preview}'. How can I best assist you with this?"),
    }
}

/// Deterministic reply used when generation fails or times out.
pub fn fallback_generation(message: &str) -> Generation {
    let intent = rule_based_intent(message);
    Generation {
        intent: intent.to_string(),
        response: template_response(message, intent),
        confidence: FALLBACK_CONFIDENCE,
        method: GenerationMethod::Fallback,
    }
}

fn preview(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
