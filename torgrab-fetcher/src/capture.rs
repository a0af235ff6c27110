use thirtyfour::error::WebDriverResult;
use thirtyfour::prelude::*;
use tracing::{debug, warn};

use crate::error::Result;
use crate::fetcher::ProxyEndpoint;

/// Default address of the WebDriver server (chromedriver) the capture talks to.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Render `url` in a headless browser and return the screenshot as PNG bytes.
///
/// The browser is pointed at the same SOCKS5 endpoint as the HTTP client, so
/// the rendered traffic is anonymized too. The WebDriver session is quit on
/// every exit path, including navigation failures.
pub async fn capture_screenshot(
    url: &str,
    proxy: &ProxyEndpoint,
    webdriver_url: &str,
) -> Result<Vec<u8>> {
    let mut caps = DesiredCapabilities::chrome();
    caps.set_headless()?;
    caps.add_chrome_arg(&format!("--proxy-server={}", proxy.browser_url()))?;
    caps.add_chrome_arg("--ignore-certificate-errors")?;

    let driver = WebDriver::new(webdriver_url, caps).await?;
    debug!("Browser session started via {}", webdriver_url);

    let shot = navigate_and_capture(&driver, url).await;

    if let Err(e) = driver.quit().await {
        warn!("Error closing browser session: {}", e);
    }

    Ok(shot?)
}

async fn navigate_and_capture(driver: &WebDriver, url: &str) -> WebDriverResult<Vec<u8>> {
    driver.goto(url).await?;
    let png = driver.screenshot_as_png().await?;
    debug!("Captured screenshot ({} bytes)", png.len());
    Ok(png)
}
