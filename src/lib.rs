/*!
 * Telegrama-forum - a small Rust binding for the Telegram Bot API forum topic methods
 *
 * Every operation builds the request parameters, performs a single blocking call
 * through a [`Transport`] and decodes the response. Nothing is retried or cached.
 *
 * ```no_run
 * use telegrama_forum::{Bot, Configuration, ForumTopic, IconColor};
 *
 * let mut config = Configuration::default();
 * config.set_bot_token("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11");
 *
 * let bot = Bot::new(config)?;
 * let chat = -1001234567890_i64;
 *
 * let topic = bot.create_forum_topic(&chat, &ForumTopic::new("Bugs").with_icon_color(IconColor::BLUE))?;
 * bot.edit_forum_topic(&chat, topic.message_thread_id, Some("Known bugs"), None)?;
 * bot.close_forum_topic(&chat, topic.message_thread_id)?;
 * # Ok::<(), telegrama_forum::Error>(())
 * ```
 */

pub mod chat;
pub mod client;
pub mod configuration;
pub mod error;
pub mod forum;
pub mod sticker;
pub mod topic;
pub mod transport;

// Re-export main components for easy access
pub use chat::{Chat, ChatId, ChatType, Recipient};
pub use client::Bot;
pub use configuration::{ClientOptions, Configuration};
pub use error::{Error, Result};
pub use sticker::{PhotoSize, Sticker, StickerType};
pub use topic::{
    ForumTopic, ForumTopicClosed, ForumTopicCreated, ForumTopicEdited, ForumTopicReopened,
    GeneralForumTopicHidden, GeneralForumTopicUnhidden, IconColor, MessageThreadId,
};
pub use transport::{HttpTransport, Params, ResponseParameters, Transport};
