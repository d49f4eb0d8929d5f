pub mod chats;
pub mod messages;
pub mod users;

pub use chats::ChatService;
pub use messages::MessageService;
pub use users::UserService;
