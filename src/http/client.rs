use anyhow::{Context, Result};
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// HTTP client shared by the Lichess and mail clients
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str, accept: &str) -> Result<Response> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .context("Failed to send GET request")
    }

    /// Form-encoded POST with basic auth
    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        user: &str,
        password: &str,
        form: &T,
    ) -> Result<Response> {
        debug!("POST {}", url);
        self.client
            .post(url)
            .basic_auth(user, Some(password))
            .form(form)
            .send()
            .await
            .context("Failed to send POST request")
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
