//! Canned study assistant.
//!
//! Replies are picked by the first rule whose keywords appear in the
//! lowercased message. Keywords match as substrings except `hi`, which must
//! be a whole word so that "history" and "this" do not read as greetings.

use crate::error::ServiceError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    Greeting,
    Assignment,
    Mathematics,
    Science,
    English,
    History,
    Thanks,
    Goodbye,
    General,
}

struct Rule {
    topic: Topic,
    substrings: &'static [&'static str],
    words: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        substrings: &["hello", "namaste"],
        words: &["hi"],
        reply: "Namaste! How can I assist you with your studies today?",
    },
    Rule {
        topic: Topic::Assignment,
        substrings: &["assignment", "homework"],
        words: &[],
        reply: "I can help you understand your assignments. You can ask me specific questions about the topics you're working on, and I'll try to explain them.",
    },
    Rule {
        topic: Topic::Mathematics,
        substrings: &["math", "mathematics"],
        words: &[],
        reply: "For mathematics, I can help explain concepts, solve problems, or guide you through the steps. What specific math topic are you working on?",
    },
    Rule {
        topic: Topic::Science,
        substrings: &["science", "physics", "chemistry", "biology"],
        words: &[],
        reply: "Science is fascinating! I can help explain scientific concepts, formulas, or experiments. What specific area are you studying?",
    },
    Rule {
        topic: Topic::English,
        substrings: &["english", "literature"],
        words: &[],
        reply: "For English and literature, I can help with analyzing texts, understanding themes, or improving your writing. What specific aspect are you working on?",
    },
    Rule {
        topic: Topic::History,
        substrings: &["history"],
        words: &[],
        reply: "History is all about understanding our past. I can help with historical events, timelines, or explaining the significance of historical developments. What period or event are you studying?",
    },
    Rule {
        topic: Topic::Thanks,
        substrings: &["thank"],
        words: &[],
        reply: "You're welcome! Feel free to ask if you need any more help.",
    },
    Rule {
        topic: Topic::Goodbye,
        substrings: &["bye", "goodbye"],
        words: &[],
        reply: "Goodbye! Feel free to come back whenever you need help with your studies.",
    },
];

const DEFAULT_REPLY: &str = "That's an interesting question! I'd be happy to help you with that. Could you provide more details so I can give you a more specific answer?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub topic: Topic,
    pub reply: &'static str,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.substrings.iter().any(|k| lowered.contains(k))
            || lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| self.words.contains(&word))
    }
}

/// Reply to one user message. Blank messages are rejected.
pub fn reply(message: &str) -> Result<AssistantReply, ServiceError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::EmptyMessage);
    }

    let lowered = trimmed.to_lowercase();
    let reply = RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(
            AssistantReply {
                topic: Topic::General,
                reply: DEFAULT_REPLY,
            },
            |rule| AssistantReply {
                topic: rule.topic,
                reply: rule.reply,
            },
        );

    tracing::debug!(topic = ?reply.topic, "Assistant reply selected");
    Ok(reply)
}

/// Opening line of a conversation with `name`.
pub fn greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Namaste! I'm your AI assistant. How can I help you with your studies today?".to_string()
    } else {
        format!("Namaste {name}! I'm your AI assistant. How can I help you with your studies today?")
    }
}
