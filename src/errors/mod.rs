use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Fetch failed or returned malformed data
    #[error("Data source error: {context}")]
    DataSource {
        context: String,
        #[source]
        source: BoxError,
    },

    /// A single game cannot be analysed; callers skip it
    #[error("Invalid game record {game_id}: {reason}")]
    InvalidGameRecord { game_id: String, reason: String },

    #[error("Failed to send mail after {attempts} attempt(s): {reason}")]
    MailSend { attempts: u32, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReportError {
    pub fn data_source(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::DataSource {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn invalid_game(game_id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidGameRecord {
            game_id: game_id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Context string for fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Context string for parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
