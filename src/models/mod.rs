pub mod chats;
pub mod messages;
pub mod requests;
pub mod users;
