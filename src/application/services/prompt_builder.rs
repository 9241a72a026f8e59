use std::fmt::Write;

use crate::domain::KnowledgeBase;

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 2000;

/// Renders the knowledge base and one visitor message into a provider prompt.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    knowledge_base: KnowledgeBase,
    max_message_chars: usize,
}

impl PromptBuilder {
    pub fn new(knowledge_base: KnowledgeBase, max_message_chars: usize) -> Self {
        Self {
            knowledge_base,
            max_message_chars,
        }
    }

    pub fn build(&self, user_message: &str) -> String {
        let kb = &self.knowledge_base;
        let mut prompt = String::new();

        for line in &kb.persona {
            let _ = writeln!(prompt, "{line}");
        }

        let _ = writeln!(prompt, "\n--- {} ---\n", kb.facts_heading);
        for (index, section) in kb.facts.iter().enumerate() {
            let _ = writeln!(prompt, "{}. {}", index + 1, section.title);
            for item in &section.items {
                let _ = writeln!(prompt, "   - {item}");
            }
            prompt.push('\n');
        }

        let _ = writeln!(prompt, "--- GUIDELINES FOR ANSWERING ---\n");
        for (index, guideline) in kb.guidelines.iter().enumerate() {
            let _ = writeln!(prompt, "{}. {}", index + 1, guideline);
        }

        let _ = writeln!(prompt, "\n--- CONVERSATION ---");
        let _ = writeln!(prompt, "User: {}", self.bounded(user_message));
        prompt.push_str("AI:");

        prompt
    }

    fn bounded<'a>(&self, message: &'a str) -> &'a str {
        match message.char_indices().nth(self.max_message_chars) {
            Some((byte_index, _)) => &message[..byte_index],
            None => message,
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(KnowledgeBase::default(), DEFAULT_MAX_MESSAGE_CHARS)
    }
}
