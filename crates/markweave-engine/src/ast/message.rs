use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a runtime message attached to the document tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Debug,
    Info,
    Warning,
    #[default]
    Error,
    Fatal,
}

impl MessageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageLevel::Debug => "debug",
            MessageLevel::Info => "info",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
            MessageLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message level: {0}")]
pub struct UnknownMessageLevel(String);

impl FromStr for MessageLevel {
    type Err = UnknownMessageLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(MessageLevel::Debug),
            "info" => Ok(MessageLevel::Info),
            "warning" | "warn" => Ok(MessageLevel::Warning),
            "error" => Ok(MessageLevel::Error),
            "fatal" => Ok(MessageLevel::Fatal),
            _ => Err(UnknownMessageLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl RuntimeMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

impl fmt::Display for RuntimeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.content)
    }
}

/// Stands in for a construct whose start was recognized but whose body
/// could not be parsed. Carries the original source so nothing is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invalid {
    pub message: RuntimeMessage,
    pub source: String,
}

impl Invalid {
    pub fn new(message: RuntimeMessage, source: impl Into<String>) -> Self {
        Self {
            message,
            source: source.into(),
        }
    }

    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(RuntimeMessage::error(message), source)
    }
}
