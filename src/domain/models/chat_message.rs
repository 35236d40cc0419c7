use serde::{Deserialize, Serialize};

/// Author of a chat message.
///
/// Serializes to the role names shared by the Ollama and OpenAI-compatible
/// chat APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    #[serde(rename = "user")]
    Human,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_role_uses_wire_name_user() {
        let json = serde_json::to_value(ChatMessage::human("Paris")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Paris");
    }

    #[test]
    fn roles_deserialize_from_wire_names() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"- Louvre"}"#).unwrap();
        assert_eq!(msg.role(), Role::Assistant);
        assert_eq!(msg.content(), "- Louvre");
    }
}
