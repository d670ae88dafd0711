//! Chat transcript entities

use serde::{Deserialize, Serialize};

use crate::constants::CHAT_GREETING;

/// Author of a transcript message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Typed by the person chatting
    User,
    /// Produced by the assistant
    Assistant,
}

impl Role {
    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcript entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// User message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Entity: Chat Transcript
///
/// Linear and append-only. The only other mutation is [`Transcript::reset`],
/// which replaces everything with the greeting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript holding only the greeting
    pub fn greeting() -> Self {
        Self {
            messages: vec![Message::assistant(CHAT_GREETING)],
        }
    }

    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace everything with the greeting
    pub fn reset(&mut self) {
        *self = Self::greeting();
    }

    /// Messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Last message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
