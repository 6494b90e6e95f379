use crate::error::ReviewError;

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default pause between polls, in seconds.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives status notifications
    pub telegram_chat_id: String,

    /// Homework status endpoint
    pub endpoint: String,

    /// Pause between polls in seconds (default: 600)
    pub retry_period_secs: u64,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Fails with [`ReviewError::TokenValidation`] when any of the three
    /// secrets is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = lookup("PRACTICUM_TOKEN");
        let telegram_token = lookup("TELEGRAM_TOKEN");
        let telegram_chat_id = lookup("TELEGRAM_CHAT_ID");

        check_tokens(
            practicum_token.as_deref(),
            telegram_token.as_deref(),
            telegram_chat_id.as_deref(),
        )?;

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id: telegram_chat_id.unwrap_or_default(),
            endpoint: lookup("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            retry_period_secs: lookup("RETRY_PERIOD_SECS")
                .unwrap_or_else(|| DEFAULT_RETRY_PERIOD_SECS.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RETRY_PERIOD_SECS must be a valid u64"))?,
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
        })
    }
}

/// Verify that every required secret is present and non-empty.
pub fn check_tokens(
    practicum_token: Option<&str>,
    telegram_token: Option<&str>,
    telegram_chat_id: Option<&str>,
) -> Result<(), ReviewError> {
    let tokens = [
        ("PRACTICUM_TOKEN", practicum_token),
        ("TELEGRAM_TOKEN", telegram_token),
        ("TELEGRAM_CHAT_ID", telegram_chat_id),
    ];

    let missing: Vec<&str> = tokens
        .iter()
        .filter(|(_, value)| value.is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        tracing::error!(?missing, "Required environment variables are missing");
        return Err(ReviewError::TokenValidation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const SECRETS: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "practicum"),
        ("TELEGRAM_TOKEN", "123:abc"),
        ("TELEGRAM_CHAT_ID", "42"),
    ];

    #[test]
    fn test_check_tokens_all_present() {
        assert_eq!(check_tokens(Some("a"), Some("b"), Some("c")), Ok(()));
    }

    #[test]
    fn test_check_tokens_missing_or_empty() {
        let cases = [
            (None, Some("b"), Some("c")),
            (Some("a"), None, Some("c")),
            (Some("a"), Some("b"), None),
            (Some(""), Some("b"), Some("c")),
            (Some("a"), Some(""), Some("c")),
            (Some("a"), Some("b"), Some("")),
            (None, None, None),
        ];
        for (practicum, telegram, chat) in cases {
            assert_eq!(
                check_tokens(practicum, telegram, chat),
                Err(ReviewError::TokenValidation)
            );
        }
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&SECRETS)).unwrap();
        assert_eq!(config.practicum_token, "practicum");
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.retry_period_secs, 600);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let mut pairs = SECRETS.to_vec();
        pairs.push(("PRACTICUM_ENDPOINT", "http://localhost:8080/statuses/"));
        pairs.push(("RETRY_PERIOD_SECS", "5"));
        pairs.push(("TELEGRAM_API_URL", "http://localhost:8081"));

        let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/statuses/");
        assert_eq!(config.retry_period_secs, 5);
        assert_eq!(config.telegram_api_url, "http://localhost:8081");
    }

    #[test]
    fn test_from_lookup_missing_secret_is_token_error() {
        let err = AppConfig::from_lookup(lookup_from(&SECRETS[..2])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ReviewError>(),
            Some(&ReviewError::TokenValidation)
        );
    }

    #[test]
    fn test_from_lookup_bad_retry_period() {
        let mut pairs = SECRETS.to_vec();
        pairs.push(("RETRY_PERIOD_SECS", "ten minutes"));
        let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().contains("RETRY_PERIOD_SECS"));
    }
}
