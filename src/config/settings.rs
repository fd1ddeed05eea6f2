use crate::errors::{ReportError, ReportResult};

#[derive(Debug, Clone)]
pub struct LichessSettings {
    pub api_base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for LichessSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://lichess.org".to_string(),
            user_agent: "LichessDailyReport/0.1",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub speed: String,
    pub recent_games: usize,
    pub historical_games: usize,
    pub min_played: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            speed: "blitz".to_string(),
            recent_games: 100,
            historical_games: 200,
            min_played: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay_ms: 2000,
        }
    }
}

/// Mail API endpoint and addresses
#[derive(Debug, Clone)]
pub struct MailCredentials {
    pub api_url: String,
    pub key: String,
    pub sender: String,
    pub recipient: String,
}

impl MailCredentials {
    pub fn from_env() -> ReportResult<Self> {
        Ok(Self {
            api_url: required_var("MAIL_API_URL")?,
            key: required_var("MAIL_API_KEY")?,
            sender: required_var("MAIL_SENDER")?,
            recipient: required_var("MAIL_RECIPIENT")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub username: String,
    pub lichess: LichessSettings,
    pub report: ReportSettings,
    pub mail: MailSettings,
}

impl AppConfig {
    pub fn new(username: String) -> Self {
        Self {
            username,
            lichess: LichessSettings::default(),
            report: ReportSettings::default(),
            mail: MailSettings::default(),
        }
    }

    /// Username from `LICHESS_USERNAME`, optional `LICHESS_API_URL` override
    pub fn from_env() -> ReportResult<Self> {
        let mut config = Self::new(required_var("LICHESS_USERNAME")?);
        if let Ok(url) = std::env::var("LICHESS_API_URL") {
            config.lichess.api_base_url = url;
        }
        Ok(config)
    }
}

fn required_var(name: &str) -> ReportResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ReportError::Config(format!("{} is not set", name))),
    }
}
