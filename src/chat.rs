use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be addressed as the `chat_id` of a request
pub trait Recipient {
    /// The `chat_id` value as sent on the wire
    fn recipient(&self) -> String;
}

impl<R: Recipient + ?Sized> Recipient for &R {
    fn recipient(&self) -> String {
        (**self).recipient()
    }
}

impl Recipient for i64 {
    fn recipient(&self) -> String {
        self.to_string()
    }
}

/// Public usernames, e.g. `@mychannel`
impl Recipient for str {
    fn recipient(&self) -> String {
        self.to_string()
    }
}

impl Recipient for String {
    fn recipient(&self) -> String {
        self.clone()
    }
}

/// Type of a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
    #[serde(other)]
    Unknown,
}

/// A Telegram chat as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Whether the supergroup has topics enabled
    #[serde(default)]
    pub is_forum: bool,
}

impl Recipient for Chat {
    fn recipient(&self) -> String {
        self.id.to_string()
    }
}

/// Chat identifier: numeric id or the public username of a supergroup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl Recipient for ChatId {
    fn recipient(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) if name.starts_with('@') => f.write_str(name),
            ChatId::Username(name) => write!(f, "@{}", name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<&Chat> for ChatId {
    fn from(chat: &Chat) -> Self {
        ChatId::Id(chat.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_recipients_are_decimal() {
        assert_eq!((-1001234567890_i64).recipient(), "-1001234567890");
        assert_eq!(ChatId::Id(42).recipient(), "42");
    }

    #[test]
    fn usernames_get_at_prefix() {
        assert_eq!(ChatId::from("rustaceans").recipient(), "@rustaceans");
        assert_eq!(ChatId::from("@rustaceans").recipient(), "@rustaceans");
    }

    #[test]
    fn decodes_forum_chat() {
        let chat: Chat = serde_json::from_str(
            r#"{"id":-1009876,"type":"supergroup","title":"Crabs","is_forum":true}"#,
        )
        .unwrap();

        assert_eq!(chat.kind, ChatType::Supergroup);
        assert!(chat.is_forum);
        assert_eq!(chat.recipient(), "-1009876");
    }
}
