use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::TokenFilterError;

const USER_AGENT: &str = concat!("tokenfilter/", env!("CARGO_PKG_VERSION"));

/// HTTP client that only talks to allowlisted hosts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl HttpClient {
    /// Creates a client with a timeout and the default allowlist
    /// (CryptoCompare plus loopback).
    pub fn new(timeout: Duration) -> Result<Self, TokenFilterError> {
        let allowlist = ["min-api.cryptocompare.com", "localhost", "127.0.0.1"]
            .into_iter()
            .map(String::from)
            .collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TokenFilterError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Whether `url` points at an allowlisted host or one of its subdomains.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// GET request builder, refused for hosts outside the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, TokenFilterError> {
        if !self.is_allowed(url) {
            return Err(TokenFilterError::SecurityError(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
