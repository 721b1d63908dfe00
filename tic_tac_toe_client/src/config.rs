use std::env;
use std::path::PathBuf;

const DEFAULT_NAME_CACHE: &str = "tictactoe_names.json";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub name_cache_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        let name_cache_path = env::var("TTT_NAME_CACHE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_NAME_CACHE));
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self {
            name_cache_path,
            log_filter,
        }
    }
}
