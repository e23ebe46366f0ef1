use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".";
const CUSTOMERS_FILE: &str = "customers.json";
const EVENTS_FILE: &str = "events.json";
const SYSTEM_DATA_FILE: &str = "system_data.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var("BOOKING_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            admin_username: env::var("BOOKING_ADMIN_USERNAME")
                .unwrap_or(defaults.admin_username),
            admin_password: env::var("BOOKING_ADMIN_PASSWORD")
                .unwrap_or(defaults.admin_password),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(CUSTOMERS_FILE)
    }

    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join(EVENTS_FILE)
    }

    pub fn system_data_path(&self) -> PathBuf {
        self.data_dir.join(SYSTEM_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_under_data_dir() {
        let config = Config::default().with_data_dir("/var/lib/booking");
        assert_eq!(
            config.customers_path(),
            PathBuf::from("/var/lib/booking/customers.json")
        );
        assert_eq!(
            config.events_path(),
            PathBuf::from("/var/lib/booking/events.json")
        );
        assert_eq!(
            config.system_data_path(),
            PathBuf::from("/var/lib/booking/system_data.json")
        );
    }

    #[test]
    fn test_default_admin_credentials() {
        let config = Config::default();
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "admin");
    }
}
