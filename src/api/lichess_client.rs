use log::info;

use crate::api::parsers;
use crate::api::query::GameQuery;
use crate::config::LichessSettings;
use crate::domain::{Game, User};
use crate::errors::{fetch_context, parse_context, ReportError, ReportResult};
use crate::http::HttpClient;

const JSON: &str = "application/json";
const NDJSON: &str = "application/x-ndjson";

/// Lichess public API client
pub struct LichessClient {
    client: HttpClient,
    base_url: String,
}

impl LichessClient {
    pub fn new(settings: &LichessSettings) -> ReportResult<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)
            .map_err(|e| ReportError::data_source("Failed to create Lichess client", e))?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a user's public profile
    pub async fn fetch_user(&self, username: &str) -> ReportResult<User> {
        let url = self.build_user_url(username);
        info!("Fetching profile of {}", username);

        let body = self.fetch_text(&url, JSON).await?;
        serde_json::from_str(&body)
            .map_err(|e| ReportError::data_source(parse_context("user profile"), e))
    }

    /// Fetch a user's games, most recent first
    pub async fn fetch_user_games(
        &self,
        username: &str,
        query: &GameQuery,
    ) -> ReportResult<Vec<Game>> {
        let url = self.build_games_url(username, query);
        info!("Fetching up to {} games of {}", query.max, username);

        let body = self.fetch_text(&url, NDJSON).await?;
        let games = parsers::parse_games(&body)?;

        info!("Fetched {} games of {}", games.len(), username);
        Ok(games)
    }

    async fn fetch_text(&self, url: &str, accept: &str) -> ReportResult<String> {
        let response = self
            .client
            .get(url, accept)
            .await
            .map_err(|e| ReportError::data_source(fetch_context(url), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::data_source(
                fetch_context(url),
                format!("API returned status: {}", status),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ReportError::data_source(fetch_context(url), e))
    }

    // --- Helper Methods ---

    fn build_user_url(&self, username: &str) -> String {
        format!("{}/api/user/{}", self.base_url, urlencoding::encode(username))
    }

    fn build_games_url(&self, username: &str, query: &GameQuery) -> String {
        format!(
            "{}/api/games/user/{}?{}",
            self.base_url,
            urlencoding::encode(username),
            query.to_query_string()
        )
    }
}
