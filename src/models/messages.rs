use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

/// A stored message. The text is persisted and served under the `message` key.
///
/// `chat_id` and `sender_login` are free-form; they are not checked against
/// the chat or user collections. The id is a BSON object id and the
/// timestamp a BSON date; clients see [`MessageResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: ObjectId,
    pub chat_id: String,
    pub sender_login: String,
    #[serde(rename = "message")]
    pub text: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

/// JSON view of a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub chat_id: String,
    pub sender_login: String,
    #[serde(rename = "message")]
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_hex(),
            chat_id: message.chat_id,
            sender_login: message.sender_login,
            text: message.text,
            timestamp: message.timestamp,
        }
    }
}

/// Payload for creating a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMessage {
    pub chat_id: String,
    pub sender_login: String,
    #[serde(rename = "message")]
    pub text: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Replacement text for an existing message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMessage {
    #[serde(rename = "message")]
    pub text: String,
}

impl Message {
    /// Builds a stored message from a creation payload, defaulting the timestamp to now.
    /// The timestamp is cut to the millisecond precision of a BSON date.
    pub fn from_new(id: ObjectId, new_message: NewMessage) -> Self {
        Self {
            id,
            chat_id: new_message.chat_id,
            sender_login: new_message.sender_login,
            text: new_message.text,
            timestamp: new_message
                .timestamp
                .unwrap_or_else(Utc::now)
                .trunc_subsecs(3),
        }
    }
}
