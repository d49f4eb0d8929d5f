use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId};

use crate::{
    error::{Error, Result},
    models::messages::{Message, NewMessage},
    store::{Collection, Filter, Page},
    validation::{RequiredFields, new_object_id, validate_object_id},
};

/// Message operations over an injected `Messages` collection.
#[derive(Clone)]
pub struct MessageService {
    messages: Arc<dyn Collection<Message>>,
}

fn check_message_id(id: &str) -> Result<ObjectId> {
    validate_object_id(id, || format!("'{}' is not a valid 24 digit hex string.", id))
}

fn message_not_found(id: &str) -> Error {
    Error::NotFound(format!("Message with ID '{}' not found.", id))
}

impl MessageService {
    pub fn new(messages: Arc<dyn Collection<Message>>) -> Self {
        Self { messages }
    }

    /// Stores a message. Chat id and sender are not checked against other collections.
    pub async fn add_message(&self, new_message: NewMessage) -> Result<Message> {
        RequiredFields::new()
            .require("chatId", &new_message.chat_id, "ChatId cannot be empty.")
            .require("senderLogin", &new_message.sender_login, "SenderLogin cannot be empty.")
            .require("message", &new_message.text, "Message text cannot be empty.")
            .finish()?;

        let message = Message::from_new(new_object_id(), new_message);
        self.messages.insert_one(&message).await?;

        tracing::info!(
            message_id = %message.id,
            chat_id = %message.chat_id,
            sender = %message.sender_login,
            "Message stored",
        );
        Ok(message)
    }

    pub async fn get_message_by_id(&self, id: &str) -> Result<Message> {
        let oid = check_message_id(id)?;

        self.messages
            .find_one(Filter::by_id(oid))
            .await?
            .ok_or_else(|| message_not_found(id))
    }

    /// Messages of one chat in storage order. Empty if the chat has none.
    pub async fn get_messages_by_chat_id(&self, chat_id: &str, page: Page) -> Result<Vec<Message>> {
        let messages = self
            .messages
            .find_many(Filter::eq("chatId", chat_id), page)
            .await?;

        tracing::debug!(chat_id = %chat_id, count = messages.len(), "Messages listed");
        Ok(messages)
    }

    /// Replaces the text of a message; other fields are untouched.
    pub async fn update_message(&self, id: &str, text: String) -> Result<()> {
        let oid = check_message_id(id)?;

        if self.messages.find_one(Filter::by_id(oid)).await?.is_none() {
            return Err(message_not_found(id));
        }

        let matched = self
            .messages
            .update_one(Filter::by_id(oid), doc! { "message": text })
            .await?;
        if matched == 0 {
            return Err(message_not_found(id));
        }

        tracing::info!(message_id = %id, "Message text updated");
        Ok(())
    }

    pub async fn delete_message(&self, id: &str) -> Result<()> {
        let oid = check_message_id(id)?;

        let deleted = self.messages.delete_one(Filter::by_id(oid)).await?;
        if deleted == 0 {
            return Err(message_not_found(id));
        }

        tracing::info!(message_id = %id, "Message deleted");
        Ok(())
    }
}
