use std::fmt;

use serde::{Deserialize, Serialize};

/// Result type reported by the backend when a close succeeds.
pub const SUCCESS_TYPE: &str = "success";

/// Reply of the close mutation: `{ "type": "...", "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseOutcome {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

impl CloseOutcome {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(SUCCESS_TYPE, message)
    }

    pub fn is_success(&self) -> bool {
        self.kind == SUCCESS_TYPE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure reported by a backend call.
///
/// Arrives either as `{ "body": { "message": ... } }` or `{ "message": ... }`;
/// the body message wins when both are present. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RemoteErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RemoteError {
    /// `{ "body": { "message": msg } }`
    pub fn with_body_message(msg: impl Into<String>) -> Self {
        Self {
            body: Some(RemoteErrorBody {
                message: Some(msg.into()),
            }),
            message: None,
        }
    }

    /// `{ "message": msg }`
    pub fn with_message(msg: impl Into<String>) -> Self {
        Self {
            body: None,
            message: Some(msg.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.message.as_deref())
            .filter(|m| !m.is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("remote call failed"))
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_takes_precedence() {
        let err: RemoteError =
            serde_json::from_str(r#"{"body": {"message": "Falha ao fechar"}, "message": "outer"}"#)
                .unwrap();
        assert_eq!(err.message(), Some("Falha ao fechar"));
    }

    #[test]
    fn top_level_message_used_without_body() {
        let err: RemoteError = serde_json::from_str(r#"{"message": "timeout"}"#).unwrap();
        assert_eq!(err.message(), Some("timeout"));
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn empty_messages_count_as_absent() {
        let err: RemoteError =
            serde_json::from_str(r#"{"body": {"message": ""}, "message": ""}"#).unwrap();
        assert_eq!(err.message(), None);
        assert_eq!(RemoteError::default().message(), None);
    }

    #[test]
    fn close_outcome_reads_type_field() {
        let outcome: CloseOutcome =
            serde_json::from_str(r#"{"type": "success", "message": "Fechada com sucesso"}"#)
                .unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Fechada com sucesso");
        assert!(!CloseOutcome::new("warning", "já fechada").is_success());
    }
}
