//! Event shapes shared by all commands

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Final event of a successful command, carrying its result
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub data: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "complete",
            command,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(key: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            key,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}
