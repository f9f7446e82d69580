pub const CONFIG_PATH: &str = "studio.toml";

pub const DEFAULT_CAPACITY: usize = 1000;

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const UNKNOWN_SOURCE: &str = "Unknown";
