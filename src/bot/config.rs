use std::env;

/* Config holds everything the bot reads from its environment.
 * Loaded once in main, after dotenv has had a chance to populate the environment.
 */

pub const TOKEN_VAR: &str = "PAYOUTS_TOKEN";
pub const API_URL_VAR: &str = "PAYOUTS_API_URL";
pub const DEFAULT_API_URL: &str = "https://twitchpayouts.com/api/payouts";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub token: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(env::var(TOKEN_VAR).ok(), env::var(API_URL_VAR).ok())
    }

    // Blank values are treated as unset.
    fn from_vars(token: Option<String>, api_url: Option<String>) -> Result<Config, ConfigError> {
        let token = match token {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => return Err(ConfigError::MissingVar(TOKEN_VAR)),
        };

        let api_url = match api_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => DEFAULT_API_URL.to_string(),
        };

        Ok(Config { token, api_url })
    }
}
