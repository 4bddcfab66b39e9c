use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ChatRole {
    #[strum(to_string = "You")]
    Student,
    Assistant,
    Error,
}

/// One line of the assistant transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

impl ChatEntry {
    pub fn student(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Student,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(ChatRole::Student.to_string(), "You");
        assert_eq!(ChatRole::Assistant.to_string(), "Assistant");
        assert_eq!(ChatRole::Error.to_string(), "Error");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(ChatEntry::student("hi").role, ChatRole::Student);
        assert_eq!(ChatEntry::assistant("hello").text, "hello");
        assert_eq!(ChatEntry::error("oops").role, ChatRole::Error);
    }
}
