use serde::{Deserialize, Serialize};

/// Kind of a sticker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerType {
    Regular,
    Mask,
    CustomEmoji,
    #[serde(other)]
    Unknown,
}

/// One size of a photo or a file/sticker thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// A sticker, e.g. one of the custom emoji usable as a forum topic icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(rename = "type")]
    pub kind: StickerType,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub is_animated: bool,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Set for custom emoji stickers; this is the value to pass as
    /// `icon_custom_emoji_id` when creating or editing a topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
    #[serde(default)]
    pub needs_repainting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_custom_emoji_sticker() {
        let sticker: Sticker = serde_json::from_str(
            r#"{
                "file_id": "CAACAgIAAxUAAWQ",
                "file_unique_id": "AgADxUA",
                "type": "custom_emoji",
                "width": 100,
                "height": 100,
                "is_animated": true,
                "is_video": false,
                "thumbnail": {"file_id": "AAMC", "file_unique_id": "AQAD", "width": 100, "height": 100, "file_size": 2880},
                "emoji": "📰",
                "set_name": "Topics",
                "custom_emoji_id": "5434144690511290129",
                "file_size": 7823
            }"#,
        )
        .unwrap();

        assert_eq!(sticker.kind, StickerType::CustomEmoji);
        assert_eq!(sticker.custom_emoji_id.as_deref(), Some("5434144690511290129"));
        assert_eq!(sticker.thumbnail.unwrap().file_size, Some(2880));
        assert!(!sticker.needs_repainting);
    }

    #[test]
    fn unknown_sticker_type_is_tolerated() {
        let sticker: Sticker = serde_json::from_str(
            r#"{"file_id":"a","file_unique_id":"b","type":"hologram","width":1,"height":1}"#,
        )
        .unwrap();
        assert_eq!(sticker.kind, StickerType::Unknown);
    }
}
