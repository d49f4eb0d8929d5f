use std::sync::Arc;

use mongodb::bson::doc;

use crate::{
    error::{Error, Result, ValidationErrors},
    models::chats::{Chat, NewChat},
    store::{Collection, Filter, Page},
};

pub use crate::models::chats::generate_chat_id;

/// Chat operations over an injected `Chats` collection.
#[derive(Clone)]
pub struct ChatService {
    chats: Arc<dyn Collection<Chat>>,
}

fn chat_not_found(id: &str) -> Error {
    Error::NotFound(format!("Chat with ID '{}' not found.", id))
}

impl ChatService {
    pub fn new(chats: Arc<dyn Collection<Chat>>) -> Self {
        Self { chats }
    }

    /// Creates a chat whose id is derived from its participants.
    ///
    /// # Errors
    /// * `Validation` if there are no participants
    /// * `Conflict` if a chat with the same participant set exists
    pub async fn add_chat(&self, new_chat: NewChat) -> Result<Chat> {
        if new_chat.participants.is_empty() {
            return Err(Error::Validation(ValidationErrors::single(
                "participants",
                "Chat must have at least one participant.",
            )));
        }

        let chat = Chat::new(new_chat.participants, new_chat.created_at);
        let already_exists = || Error::Conflict(format!("Chat with ID '{}' already exists.", chat.id));

        if self.chats.find_one(Filter::by_id(chat.id.as_str())).await?.is_some() {
            return Err(already_exists());
        }

        // A concurrent create can slip past the lookup; the store rejects the duplicate id
        match self.chats.insert_one(&chat).await {
            Ok(()) => {}
            Err(Error::Conflict(_)) => return Err(already_exists()),
            Err(e) => return Err(e),
        }

        tracing::info!(chat_id = %chat.id, participants = chat.participants.len(), "Chat created");
        Ok(chat)
    }

    pub async fn get_chat_by_id(&self, id: &str) -> Result<Chat> {
        let chat = self
            .chats
            .find_one(Filter::by_id(id))
            .await?
            .ok_or_else(|| chat_not_found(id))?;

        tracing::debug!(chat_id = %id, "Chat fetched");
        Ok(chat)
    }

    pub async fn get_all_chats(&self, page: Page) -> Result<Vec<Chat>> {
        self.chats.find_many(Filter::All, page).await
    }

    /// Replaces the participant list. The chat keeps its original id even when
    /// the new participants would derive a different one.
    pub async fn update_chat(&self, id: &str, participants: Vec<String>) -> Result<()> {
        if self.chats.find_one(Filter::by_id(id)).await?.is_none() {
            return Err(chat_not_found(id));
        }

        let matched = self
            .chats
            .update_one(Filter::by_id(id), doc! { "participants": participants })
            .await?;
        if matched == 0 {
            return Err(chat_not_found(id));
        }

        tracing::info!(chat_id = %id, "Chat participants replaced");
        Ok(())
    }

    pub async fn delete_chat(&self, id: &str) -> Result<()> {
        let deleted = self.chats.delete_one(Filter::by_id(id)).await?;
        if deleted == 0 {
            return Err(chat_not_found(id));
        }

        tracing::info!(chat_id = %id, "Chat deleted");
        Ok(())
    }
}
