use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: Option<String>,
    pub automation_webhook_url: Option<String>,
    pub external_api_url: Option<String>,
    pub external_api_key: Option<String>,
    pub api_rps: u32,
    pub webhook_rps: u32,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let automation_webhook_url = env::var("AUTOMATION_WEBHOOK_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        if let Some(ref raw) = automation_webhook_url {
            url::Url::parse(raw).map_err(|e| {
                Error::Config(format!("Invalid AUTOMATION_WEBHOOK_URL '{}': {}", raw, e))
            })?;
        }

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty()),
            automation_webhook_url,
            external_api_url: env::var("EXTERNAL_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            external_api_key: env::var("EXTERNAL_API_KEY").ok(),
            api_rps: get_env_parse("API_RPS")?,
            webhook_rps: get_env_parse("WEBHOOK_RPS")?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
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
