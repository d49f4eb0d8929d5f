use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// A stored chat.
///
/// The id is derived from the participant logins when the chat is created
/// (see [`generate_chat_id`]). Participants keep the order they were
/// submitted in. `created_at` is stored as a BSON date, so it carries
/// millisecond precision; clients see [`ChatResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub participants: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// JSON view of a chat, with `createdAt` as RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: String,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            participants: chat.participants,
            created_at: chat.created_at,
        }
    }
}

/// Payload for creating a chat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewChat {
    pub participants: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Replacement participant list for an existing chat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateChat {
    pub participants: Vec<String>,
}

impl Chat {
    /// Builds a chat, deriving its id and defaulting `created_at` to now.
    pub fn new(participants: Vec<String>, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: generate_chat_id(&participants),
            participants,
            created_at: created_at.unwrap_or_else(Utc::now).trunc_subsecs(3),
        }
    }
}

/// Derives a chat id: participant logins sorted in byte order and joined with `_`.
///
/// # Example
/// ```
/// use chatstore::models::chats::generate_chat_id;
///
/// let a = generate_chat_id(&["userB".to_string(), "userA".to_string()]);
/// let b = generate_chat_id(&["userA".to_string(), "userB".to_string()]);
/// assert_eq!(a, "userA_userB");
/// assert_eq!(a, b);
/// ```
pub fn generate_chat_id(participants: &[String]) -> String {
    let mut sorted: Vec<&str> = participants.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join("_")
}
