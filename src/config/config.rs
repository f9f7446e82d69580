use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::MessengerConfig;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config
{
    #[serde(default)]
    pub messenger: MessengerConfig,
}

impl Config
{
    pub fn from_file(path: &str) -> Result<Config,Error>
    {
        let file = std::fs::read_to_string(path)?;
        //read toml config
        let config: Config = toml::from_str(&file)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> Result<(),Error>
    {
        let config = toml::to_string_pretty(self)?;
        std::fs::write(path, config)?;
        Ok(())
    }
}
