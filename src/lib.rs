pub mod config;
pub mod error;
pub mod message;
pub mod messenger;

pub use message::{Message, MessageType};
pub use messenger::Messenger;
