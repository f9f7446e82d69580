pub mod message;
pub mod message_type;

pub use message::Message;
pub use message_type::MessageType;
