use crate::compliance::domain::ItemId;
use crate::ports::outbound::{ScanExecutor, ScanOutcome};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// HttpScanExecutor adapter for triggering scans through a remote scan API
///
/// This adapter implements the ScanExecutor port. Each scan is a
/// `POST {base_url}/scans/{id}` whose JSON body is `{"score": .., "status": ..}`.
///
/// # Security
/// - Item ids are checked for path separators and URL-unsafe characters,
///   then URL-encoded
/// - Every request carries a timeout
/// - Failed requests are not retried; the orchestrator reports them as-is
pub struct HttpScanExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScanExecutor {
    /// Default per-request timeout
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates an executor for the scan API at `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Root of the scan API, e.g. `https://scanner.internal/api`
    /// * `request_timeout` - Upper bound for one HTTP round trip
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the client cannot be built
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "Invalid scan API URL '{}': only http:// and https:// are supported",
                base_url
            );
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("compliance-scan/{}", version);
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Validates an item id before it becomes a URL path segment
    fn validate_url_component(component: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Security: item id contains path separators which are not allowed");
        }

        if component.contains("..") {
            anyhow::bail!("Security: item id contains '..' which is not allowed");
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: item id contains URL-unsafe characters");
        }

        Ok(())
    }

    fn scan_url(&self, item_id: &ItemId) -> Result<String> {
        Self::validate_url_component(item_id.as_str())?;
        Ok(format!(
            "{}/scans/{}",
            self.base_url,
            urlencoding::encode(item_id.as_str())
        ))
    }
}

#[async_trait]
impl ScanExecutor for HttpScanExecutor {
    async fn execute(&self, item_id: &ItemId) -> Result<ScanOutcome> {
        let url = self.scan_url(item_id)?;
        tracing::debug!(%url, "requesting remote scan");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("Scan API request to {} failed", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Scan API returned status code {}", response.status());
        }

        let outcome: ScanOutcome = response
            .json()
            .await
            .context("Scan API returned a body that is not a scan result")?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serves exactly one HTTP response and hands back the request line
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, std::thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buffer = [0u8; 4096];
            let read = stream.read(&mut buffer).unwrap();
            let request = String::from_utf8_lossy(&buffer[..read]).to_string();
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request.lines().next().unwrap_or_default().to_string()
        });
        (address, handle)
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        let result = HttpScanExecutor::new("ftp://scanner", Duration::from_secs(1));
        assert!(result.is_err());
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("only http:// and https://"));
    }

    #[test]
    fn test_scan_url_encodes_and_trims_base() {
        let executor =
            HttpScanExecutor::new("https://scanner.example/api/", Duration::from_secs(1)).unwrap();
        let url = executor.scan_url(&ItemId::new("iso:27001").unwrap()).unwrap();
        assert_eq!(url, "https://scanner.example/api/scans/iso%3A27001");
    }

    #[test]
    fn test_validate_url_component_rejects_injection() {
        assert!(HttpScanExecutor::validate_url_component("cis-1").is_ok());
        assert!(HttpScanExecutor::validate_url_component("a/b").is_err());
        assert!(HttpScanExecutor::validate_url_component("a\\b").is_err());
        assert!(HttpScanExecutor::validate_url_component("..").is_err());
        assert!(HttpScanExecutor::validate_url_component("a?x=1").is_err());
        assert!(HttpScanExecutor::validate_url_component("a#frag").is_err());
        assert!(HttpScanExecutor::validate_url_component("user@host").is_err());
    }

    #[tokio::test]
    async fn test_execute_parses_scan_result() {
        let (address, server) = serve_once("HTTP/1.1 200 OK", r#"{"score":60,"status":"Failing"}"#);
        let executor = HttpScanExecutor::new(&address, Duration::from_secs(5)).unwrap();

        let outcome = executor.execute(&ItemId::new("cis-1").unwrap()).await.unwrap();

        assert_eq!(outcome, ScanOutcome::new(60.0, "Failing"));
        assert_eq!(server.join().unwrap(), "POST /scans/cis-1 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_execute_fails_on_error_status() {
        let (address, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}");
        let executor = HttpScanExecutor::new(&address, Duration::from_secs(5)).unwrap();

        let err = executor
            .execute(&ItemId::new("cis-1").unwrap())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_execute_fails_on_malformed_body() {
        let (address, server) = serve_once("HTTP/1.1 200 OK", r#"{"grade":"A"}"#);
        let executor = HttpScanExecutor::new(&address, Duration::from_secs(5)).unwrap();

        let err = executor
            .execute(&ItemId::new("cis-1").unwrap())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not a scan result"));
        server.join().unwrap();
    }
}
