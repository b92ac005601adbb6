//! Configuration loading
//!
//! Reads `~/.config/todui/config.toml`. Loading is tolerant: a missing or
//! unparseable file yields the default configuration. The API key may also
//! come from the `OPENAI_API_KEY` environment variable; the config file
//! takes precedence.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub mod types;

pub use types::{AiConfig, Config};

const CONFIG_DIR: &str = "todui";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return apply_env_fallback(Config::default());
    };

    apply_env_fallback(load_config_from_path(&path))
}

pub fn load_config_from_path(path: &PathBuf) -> Config {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Config::default(),
    };

    let mut contents = String::new();
    if file.read_to_string(&mut contents).is_err() {
        return Config::default();
    }

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("Ignoring unparseable config: {}", e);
            Config::default()
        }
    }
}

fn apply_env_fallback(mut config: Config) -> Config {
    if config.ai.api_key.is_none() {
        config.ai.api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
    }
    config
}
