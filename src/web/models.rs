use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    // Stamps a fresh identifier and the current UTC instant.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Greeting,
    #[default]
    Chat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
    Pl,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub language: Language,
    pub model: Option<String>,
    pub summary: Option<Map<String, Value>>,
    pub messages: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_check_stamps_id_and_timestamp() {
        let before = Utc::now();
        let check = StatusCheck::new("test_client".to_string());
        assert!(!check.id.is_empty());
        assert_eq!(check.client_name, "test_client");
        assert!(check.timestamp >= before);
        assert!(check.timestamp <= Utc::now());
    }

    #[test]
    fn status_checks_get_distinct_ids() {
        let a = StatusCheck::new("a".to_string());
        let b = StatusCheck::new("b".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn chat_request_defaults() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.mode, Mode::Chat);
        assert_eq!(req.language, Language::De);
        assert!(req.model.is_none());
        assert!(req.summary.is_none());
        assert!(req.messages.is_none());
    }

    #[test]
    fn chat_request_rejects_unknown_language() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"language":"fr"}"#).is_err());
    }

    #[test]
    fn chat_request_rejects_unknown_mode() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"mode":"monologue"}"#).is_err());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let message = ChatMessage {
            role: Role::Assistant,
            content: "ok".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
    }

    #[test]
    fn chat_message_deserializes() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"hello"}"#).unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "hello");
    }
}
