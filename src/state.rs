use std::sync::Arc;

use crate::{
    models::{chats::Chat, messages::Message, users::User},
    services::{ChatService, MessageService, UserService},
    store::{CHATS, Collection, MESSAGES, USERS, memory::MemoryCollection, mongo::MongoCollection},
};

/// Application state shared across all HTTP handlers
///
/// Each service owns the collection handle it was built with; the slices
/// share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// User slice
    pub users: UserService,
    /// Chat slice
    pub chats: ChatService,
    /// Message slice
    pub messages: MessageService,
}

impl AppState {
    /// Create a new AppState from one collection handle per resource type
    ///
    /// # Arguments
    /// * `users` - Collection backing the user service
    /// * `chats` - Collection backing the chat service
    /// * `messages` - Collection backing the message service
    pub fn new(
        users: Arc<dyn Collection<User>>,
        chats: Arc<dyn Collection<Chat>>,
        messages: Arc<dyn Collection<Message>>,
    ) -> Self {
        Self {
            users: UserService::new(users),
            chats: ChatService::new(chats),
            messages: MessageService::new(messages),
        }
    }

    /// State backed by collections of a MongoDB database.
    pub fn with_mongo(database: &mongodb::Database) -> Self {
        Self::new(
            Arc::new(MongoCollection::<User>::new(database, USERS)),
            Arc::new(MongoCollection::<Chat>::new(database, CHATS)),
            Arc::new(MongoCollection::<Message>::new(database, MESSAGES)),
        )
    }

    /// State backed by empty in-process collections.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryCollection::<User>::new(USERS)),
            Arc::new(MemoryCollection::<Chat>::new(CHATS)),
            Arc::new(MemoryCollection::<Message>::new(MESSAGES)),
        )
    }
}
