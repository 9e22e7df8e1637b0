use std::fs;
use super::config::Config;

/// Loads the simulation parameters, falling back to the defaults when
/// the file is absent.
pub fn load_config(path: &str) -> Config {
    match fs::read_to_string(path) {
        Ok(text) => serde_yaml::from_str(&text)
            .expect("Failed to parse config yaml file"),
        Err(_) => Config::default(),
    }
}
