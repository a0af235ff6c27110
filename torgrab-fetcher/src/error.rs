use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrabError {
    #[error("SOCKS5 proxy setup failed: {0}")]
    ProxySetup(String),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("browser session failed: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GrabError>;
