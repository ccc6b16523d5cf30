use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a forum topic, assigned by Telegram on creation
pub type MessageThreadId = i64;

/// Color of a topic icon in RGB format.
///
/// Telegram currently accepts only the six values exposed as associated
/// constants. Other values are passed through unchecked and rejected by
/// the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconColor(pub i64);

impl IconColor {
    /// 0x6FB9F0
    pub const BLUE: IconColor = IconColor(7322096);
    /// 0xFFD67E
    pub const YELLOW: IconColor = IconColor(16766590);
    /// 0xCB86DB
    pub const VIOLET: IconColor = IconColor(13338331);
    /// 0x8EEE98
    pub const GREEN: IconColor = IconColor(9367192);
    /// 0xFF93B2
    pub const ROSE: IconColor = IconColor(16749490);
    /// 0xFB6F5F
    pub const RED: IconColor = IconColor(16478047);

    pub const ALL: [IconColor; 6] = [
        Self::BLUE,
        Self::YELLOW,
        Self::VIOLET,
        Self::GREEN,
        Self::ROSE,
        Self::RED,
    ];

    pub fn value(self) -> i64 {
        self.0
    }

    /// Whether this is one of the colors Telegram currently accepts
    pub fn is_known(self) -> bool {
        Self::ALL.contains(&self)
    }
}

impl From<i64> for IconColor {
    fn from(value: i64) -> Self {
        IconColor(value)
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// A forum topic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub name: String,
    #[serde(default)]
    pub message_thread_id: MessageThreadId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<IconColor>,
    /// Unique identifier of the custom emoji shown as the topic icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

impl ForumTopic {
    /// Describe a topic to be created
    pub fn new<S: Into<String>>(name: S) -> Self {
        ForumTopic {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_icon_color(mut self, color: IconColor) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn with_icon_custom_emoji_id<S: Into<String>>(mut self, id: S) -> Self {
        self.icon_custom_emoji_id = Some(id.into());
        self
    }
}

/// Service message: a new forum topic was created in the chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicCreated {
    pub name: String,
    pub icon_color: IconColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

/// Service message: a forum topic was edited.
///
/// An empty `icon_custom_emoji_id` means the icon was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicEdited {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

/// Service message: a forum topic was closed. Holds no information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicClosed {}

/// Service message: a forum topic was reopened. Holds no information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicReopened {}

/// Service message: the General topic was hidden. Holds no information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralForumTopicHidden {}

/// Service message: the General topic was unhidden. Holds no information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralForumTopicUnhidden {}
