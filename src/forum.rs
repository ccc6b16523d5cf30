//! Forum topic methods of the Bot API.
//!
//! Most of these require the bot to be an administrator in the chat with the
//! `can_manage_topics` right, unless it created the topic itself. Telegram
//! enforces this, the client does not.

use log::debug;
use serde::Serialize;

use crate::chat::Recipient;
use crate::client::Bot;
use crate::error::{Error, Result};
use crate::sticker::Sticker;
use crate::topic::{ForumTopic, IconColor, MessageThreadId};
use crate::transport::{Params, Transport};

#[derive(Debug, Serialize)]
struct ChatParams {
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct TopicParams {
    chat_id: String,
    message_thread_id: MessageThreadId,
}

#[derive(Debug, Serialize)]
struct CreateForumTopicParams<'a> {
    chat_id: String,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_color: Option<IconColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_custom_emoji_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct EditForumTopicParams<'a> {
    chat_id: String,
    message_thread_id: MessageThreadId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_custom_emoji_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct EditGeneralForumTopicParams<'a> {
    chat_id: String,
    name: &'a str,
}

/// Empty strings mean "leave unchanged"
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl<T: Transport> Bot<T> {
    fn chat_call<C: Recipient + ?Sized>(&self, method: &str, chat: &C) -> Result<()> {
        let params = Params::from_serialize(&ChatParams {
            chat_id: chat.recipient(),
        })?;
        self.exec(method, &params)
    }

    fn topic_call<C: Recipient + ?Sized>(
        &self,
        method: &str,
        chat: &C,
        message_thread_id: MessageThreadId,
    ) -> Result<()> {
        let params = Params::from_serialize(&TopicParams {
            chat_id: chat.recipient(),
            message_thread_id,
        })?;
        self.exec(method, &params)
    }

    /// Create a topic in a forum supergroup chat.
    ///
    /// Only the name, icon color and custom emoji of `topic` are sent; its
    /// `message_thread_id` is ignored. Returns the created topic.
    pub fn create_forum_topic<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        topic: &ForumTopic,
    ) -> Result<ForumTopic> {
        if topic.name.is_empty() {
            return Err(Error::validation("Forum topic name is empty"));
        }

        let params = Params::from_serialize(&CreateForumTopicParams {
            chat_id: chat.recipient(),
            name: &topic.name,
            icon_color: topic.icon_color.filter(|c| c.value() != 0),
            icon_custom_emoji_id: non_empty(topic.icon_custom_emoji_id.as_deref()),
        })?;

        debug!("Creating forum topic '{}'", topic.name);
        self.call("createForumTopic", &params)
    }

    /// Edit name and icon of a topic.
    ///
    /// `name` and `icon_custom_emoji_id` are optional; `None` or an empty
    /// string keeps the current value.
    pub fn edit_forum_topic<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        message_thread_id: MessageThreadId,
        name: Option<&str>,
        icon_custom_emoji_id: Option<&str>,
    ) -> Result<()> {
        let params = Params::from_serialize(&EditForumTopicParams {
            chat_id: chat.recipient(),
            message_thread_id,
            name: non_empty(name),
            icon_custom_emoji_id: non_empty(icon_custom_emoji_id),
        })?;
        self.exec("editForumTopic", &params)
    }

    /// Close an open topic
    pub fn close_forum_topic<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        message_thread_id: MessageThreadId,
    ) -> Result<()> {
        self.topic_call("closeForumTopic", chat, message_thread_id)
    }

    /// Reopen a closed topic
    pub fn reopen_forum_topic<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        message_thread_id: MessageThreadId,
    ) -> Result<()> {
        self.topic_call("reopenForumTopic", chat, message_thread_id)
    }

    /// Delete a topic along with all its messages
    pub fn delete_forum_topic<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        message_thread_id: MessageThreadId,
    ) -> Result<()> {
        self.topic_call("deleteForumTopic", chat, message_thread_id)
    }

    /// Clear the list of pinned messages in a topic.
    /// Requires the `can_pin_messages` right instead of `can_manage_topics`.
    pub fn unpin_all_forum_topic_messages<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        message_thread_id: MessageThreadId,
    ) -> Result<()> {
        self.topic_call("unpinAllForumTopicMessages", chat, message_thread_id)
    }

    /// Custom emoji stickers any user can use as a topic icon
    pub fn forum_topic_icon_stickers(&self) -> Result<Vec<Sticker>> {
        self.call("getForumTopicIconStickers", &Params::new())
    }

    /// Rename the General topic
    pub fn edit_general_forum_topic<C: Recipient + ?Sized>(
        &self,
        chat: &C,
        name: &str,
    ) -> Result<()> {
        let params = Params::from_serialize(&EditGeneralForumTopicParams {
            chat_id: chat.recipient(),
            name,
        })?;
        self.exec("editGeneralForumTopic", &params)
    }

    /// Close the General topic
    pub fn close_general_forum_topic<C: Recipient + ?Sized>(&self, chat: &C) -> Result<()> {
        self.chat_call("closeGeneralForumTopic", chat)
    }

    /// Reopen the General topic. Telegram also unhides it if it was hidden.
    pub fn reopen_general_forum_topic<C: Recipient + ?Sized>(&self, chat: &C) -> Result<()> {
        self.chat_call("reopenGeneralForumTopic", chat)
    }

    /// Hide the General topic. Telegram also closes it if it was open.
    pub fn hide_general_forum_topic<C: Recipient + ?Sized>(&self, chat: &C) -> Result<()> {
        self.chat_call("hideGeneralForumTopic", chat)
    }

    /// Unhide the General topic
    pub fn unhide_general_forum_topic<C: Recipient + ?Sized>(&self, chat: &C) -> Result<()> {
        self.chat_call("unhideGeneralForumTopic", chat)
    }

    /// Clear the list of pinned messages in the General topic.
    /// Requires the `can_pin_messages` right.
    pub fn unpin_all_general_forum_topic_messages<C: Recipient + ?Sized>(
        &self,
        chat: &C,
    ) -> Result<()> {
        self.chat_call("unpinAllGeneralForumTopicMessages", chat)
    }
}
