use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub answer_cooldown: Duration,
    pub public_rps: u32,
}

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            data_file: PathBuf::from(get_env_or("DATA_FILE", "data.json")),
            static_dir: PathBuf::from(get_env_or("STATIC_DIR", "static")),
            answer_cooldown: Duration::from_secs(get_env_parse_or(
                "ANSWER_COOLDOWN_SECONDS",
                30u64,
            )?),
            public_rps: get_env_parse_or("PUBLIC_RPS", 50u32)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            data_file: PathBuf::from("data.json"),
            static_dir: PathBuf::from("static"),
            answer_cooldown: Duration::from_secs(30),
            public_rps: 50,
        }
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
