use crate::error::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Default Bot API endpoint
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Shape of a bot token as issued by BotFather: `<bot id>:<secret>`
static BOT_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+:[A-Za-z0-9_-]{30,}$").unwrap());

/// HTTP client options for API requests
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions { timeout: 30 }
    }
}

/// Configuration for a [`Bot`](crate::Bot) talking to the Telegram API
#[derive(Clone)]
pub struct Configuration {
    /// Telegram Bot API token
    bot_token: Option<String>,
    /// Base URL of the Bot API server
    api_url: String,
    /// HTTP client options
    client_options: ClientOptions,
}

// Keeps the token out of debug output
impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("client_options", &self.client_options)
            .finish()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            bot_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            client_options: ClientOptions::default(),
        }
    }
}

/// Raw values read from `TELEGRAMA_*` environment variables
#[derive(Debug, Default, Deserialize)]
struct EnvConfiguration {
    bot_token: Option<String>,
    api_url: Option<String>,
    timeout: Option<u64>,
}

impl Configuration {
    /// Build a configuration from `TELEGRAMA_BOT_TOKEN`, `TELEGRAMA_API_URL`
    /// and `TELEGRAMA_TIMEOUT`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        let env = config::Config::builder()
            .add_source(config::Environment::with_prefix("TELEGRAMA").try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize::<EnvConfiguration>())
            .map_err(|e| Error::configuration(format!("Cannot read environment: {}", e)))?;

        let mut config = Configuration::default();
        if let Some(token) = env.bot_token {
            config.set_bot_token(token);
        }
        if let Some(url) = env.api_url {
            config.set_api_url(url);
        }
        if let Some(timeout) = env.timeout {
            config.set_client_options(ClientOptions { timeout });
        }
        Ok(config)
    }

    /// Set the Telegram Bot API token
    pub fn set_bot_token<S: AsRef<str>>(&mut self, token: S) {
        self.bot_token = Some(token.as_ref().to_string());
    }

    /// Get the Telegram Bot API token
    pub fn bot_token(&self) -> Result<&str, Error> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| Error::configuration("Bot token not configured"))
    }

    /// Set the Bot API base URL, e.g. for a self-hosted Bot API server
    pub fn set_api_url<S: AsRef<str>>(&mut self, url: S) {
        self.api_url = url.as_ref().trim_end_matches('/').to_string();
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Set client options
    pub fn set_client_options(&mut self, options: ClientOptions) {
        self.client_options = options;
    }

    /// Get client options
    pub fn client_options(&self) -> &ClientOptions {
        &self.client_options
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        let token = self.bot_token()?;
        if !BOT_TOKEN_REGEX.is_match(token) {
            return Err(Error::configuration("Invalid bot token: expected '<bot id>:<secret>'"));
        }

        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(Error::configuration(format!(
                "Invalid API URL: '{}'. Must start with http:// or https://",
                self.api_url
            )));
        }

        if self.client_options.timeout == 0 {
            return Err(Error::configuration("Timeout must be greater than zero"));
        }

        Ok(())
    }
}
