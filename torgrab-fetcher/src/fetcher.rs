use crate::error::{GrabError, Result};
use crate::result::FetchedPage;
use reqwest::{Client, Proxy};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Address of a SOCKS5 listener, as `host:port`.
///
/// Nothing is probed at construction time; whether the listener is actually
/// running is only discovered when the first connection is dialed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub host: String,
    pub port: u16,
}

impl ProxyEndpoint {
    /// The Tor Browser SOCKS listener on localhost.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 9150;

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Proxy URL handed to reqwest. The `socks5h` scheme makes the proxy
    /// resolve hostnames, which is what lets `.onion` addresses work at all.
    pub fn socks_url(&self) -> String {
        format!("socks5h://{}:{}", self.host, self.port)
    }

    /// Proxy URL in the form Chrome's `--proxy-server` flag expects.
    pub fn browser_url(&self) -> String {
        format!("socks5://{}:{}", self.host, self.port)
    }
}

impl Default for ProxyEndpoint {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_PORT)
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for ProxyEndpoint {
    type Err = GrabError;

    fn from_str(s: &str) -> Result<Self> {
        let (host, port) = s.rsplit_once(':').ok_or_else(|| {
            GrabError::ProxySetup(format!("expected host:port, got '{}'", s))
        })?;
        let port = port
            .parse()
            .map_err(|_| GrabError::ProxySetup(format!("invalid proxy port in '{}'", s)))?;
        Ok(Self::new(host, port))
    }
}

/// HTTP fetcher whose every outbound connection is tunneled through a SOCKS5
/// proxy.
///
/// The proxy is applied at the transport level, so the target traffic itself
/// goes through the tunnel rather than just an HTTP CONNECT to it.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher routed through `proxy`, with no request deadline.
    ///
    /// Fails with [`GrabError::ProxySetup`] when the endpoint is malformed
    /// (for example an empty host) or the client cannot be assembled. This is
    /// a construction-time failure; no network traffic is generated here.
    pub fn new(proxy: ProxyEndpoint) -> Result<Self> {
        Self::build(proxy, None)
    }

    /// Like [`PageFetcher::new`], but abandons any request that takes longer
    /// than `timeout_secs`. [`PageFetcher::new`] imposes no deadline at all.
    pub fn with_timeout(proxy: ProxyEndpoint, timeout_secs: u64) -> Result<Self> {
        Self::build(proxy, Some(Duration::from_secs(timeout_secs)))
    }

    fn build(proxy: ProxyEndpoint, timeout: Option<Duration>) -> Result<Self> {
        if proxy.host.trim().is_empty() {
            return Err(GrabError::ProxySetup(format!(
                "proxy address '{}' has an empty host",
                proxy
            )));
        }

        let socks = Proxy::all(proxy.socks_url()).map_err(|e| {
            GrabError::ProxySetup(format!("invalid proxy address '{}': {}", proxy, e))
        })?;

        let mut builder = Client::builder().proxy(socks);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| GrabError::ProxySetup(format!("failed to build HTTP client: {}", e)))?;

        debug!("Built HTTP client tunneled through {}", proxy);
        Ok(Self { client })
    }

    #[cfg(test)]
    fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Issue a single GET and drain the whole response body as text.
    ///
    /// Fails with [`GrabError::Network`] if the connection, TLS handshake, or
    /// proxy negotiation fails, and with [`GrabError::Read`] if the body
    /// cannot be fully read. The HTTP status code is recorded on the result
    /// but not inspected. No retry, no partial result.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GrabError::Network)?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let content_length = response.content_length();

        let body = response.text().await.map_err(GrabError::Read)?;
        debug!("Fetched {} bytes from {} (status {})", body.len(), url, status_code);

        Ok(FetchedPage {
            url: url.to_string(),
            status_code,
            content_type,
            content_length,
            body,
        })
    }
}
