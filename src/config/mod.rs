pub mod config;
pub mod messenger_config;
pub mod defines;

pub use config::Config;
pub use messenger_config::MessengerConfig;
