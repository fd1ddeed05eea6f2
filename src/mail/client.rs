use anyhow::{bail, Result};
use log::info;

use crate::config::{MailCredentials, MailSettings};
use crate::errors::{ReportError, ReportResult};
use crate::http::HttpClient;
use crate::reporting::Email;
use crate::retry::RetryPolicy;

const AUTH_USER: &str = "api";
const USER_AGENT: &str = "LichessDailyReport/0.1";
const TIMEOUT_SECS: u64 = 30;

/// Client for a form-post mail API (Mailgun style)
pub struct MailClient {
    client: HttpClient,
    credentials: MailCredentials,
    retry: RetryPolicy,
}

impl MailClient {
    pub fn new(credentials: MailCredentials, settings: &MailSettings) -> ReportResult<Self> {
        let client = HttpClient::new(USER_AGENT, TIMEOUT_SECS).map_err(|e| ReportError::MailSend {
            attempts: 0,
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            credentials,
            retry: RetryPolicy::new(settings.max_attempts, settings.retry_delay_ms),
        })
    }

    /// Submit the email. Delivery is not verified beyond the API status.
    pub async fn send(&self, email: &Email) -> ReportResult<()> {
        info!(
            "Sending '{}' to {} (up to {} attempts)",
            email.subject,
            self.credentials.recipient,
            self.retry.max_attempts()
        );

        self.retry
            .run("Mail submission", || self.submit(email))
            .await
            .map_err(|(attempts, e)| ReportError::MailSend {
                attempts,
                reason: format!("{:#}", e),
            })
    }

    async fn submit(&self, email: &Email) -> Result<()> {
        let form = self.build_form(email);
        let response = self
            .client
            .post_form(&self.credentials.api_url, AUTH_USER, &self.credentials.key, &form)
            .await?;

        if !response.status().is_success() {
            bail!("Mail API returned status: {}", response.status());
        }
        Ok(())
    }

    fn build_form<'a>(&'a self, email: &'a Email) -> [(&'static str, &'a str); 4] {
        [
            ("from", self.credentials.sender.as_str()),
            ("to", self.credentials.recipient.as_str()),
            ("subject", email.subject.as_str()),
            ("text", email.text.as_str()),
        ]
    }
}
