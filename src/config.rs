use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Either a `sqlite:` URL or a plain path to the database file.
    #[config(env = "DAOGEN_DB_PATH", default = "sqlite::memory:")]
    pub db_path: String,
    /// Keep at 1 for in-memory databases, every connection opens its own.
    #[config(env = "DAOGEN_MAX_CONNECTIONS", default = 1)]
    pub max_connections: u32,
    #[cfg(test)]
    #[config(env = "DAOGEN_TEST_LOGS", default = false)]
    pub test_logs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use confique::Config as _;

    #[test]
    fn defaults_point_at_in_memory_sqlite() {
        let config = Config::builder().load().expect("defaults should load");
        assert_eq!(config.db_path, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
    }
}
