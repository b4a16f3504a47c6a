use thiserror::Error;

use crate::LANGUAGES;

const SUPERJOB_TOKEN_VAR: &str = "SJOB_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable '{0}' not set")]
    MissingVariable(&'static str),
}

/// Run settings. No `Debug`, it holds the api key
pub struct Config {
    pub superjob_api_key: String,
    pub languages: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let superjob_api_key = lookup(SUPERJOB_TOKEN_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable(SUPERJOB_TOKEN_VAR))?;
        Ok(Self {
            superjob_api_key,
            languages: LANGUAGES.iter().map(ToString::to_string).collect(),
        })
    }
}
