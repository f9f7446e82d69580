use serde::{Deserialize, Serialize};

use super::defines;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessengerConfig
{
    /// Maximum number of retained messages, older ones are dropped first
    #[serde(default = "MessengerConfig::default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub welcome: Option<String>,
}

impl MessengerConfig
{
    fn default_capacity() -> usize { defines::DEFAULT_CAPACITY }
}

impl Default for MessengerConfig
{
    fn default() -> Self {
        Self {
            capacity: MessengerConfig::default_capacity(),
            welcome: None,
        }
    }
}
