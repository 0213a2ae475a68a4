//! Amana backend client
//!
//! Thin wrapper over `reqwest` that knows the resolved backend base URL.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Url, header};
use tracing::{debug, info};

use super::model::{FlowerRecord, parse_flowers};
use crate::features::settings::ApiConfig;

const USER_AGENT: &str = concat!("amana/", env!("CARGO_PKG_VERSION"));

/// Path of the flower collection, relative to the backend base URL
const FLOWERS_PATH: &str = "/api/flowers";

/// Upper bound for a single image download. The collection request itself
/// is deliberately left without a timeout.
const IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only client for the flower collection endpoint
#[derive(Clone)]
pub struct FlowersClient {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for FlowersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowersClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl FlowersClient {
    /// Build a client from the resolved API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT).gzip(true);
        if let Some(proxy) = config.proxy.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            let proxy = reqwest::Proxy::all(proxy)
                .with_context(|| format!("invalid proxy url '{}'", proxy))?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().context("failed to initialise HTTP client")?;

        info!("Flowers client targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Full URL of the collection endpoint
    pub fn flowers_url(&self) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), FLOWERS_PATH)
    }

    /// Resolve a record's image reference against the backend base URL
    ///
    /// Absolute URLs are returned unchanged; relative ones (e.g. `/uploads/x.webp`)
    /// are joined onto the backend origin.
    pub fn resolve_image_url(&self, image: &str) -> Result<String> {
        if let Ok(url) = Url::parse(image) {
            return Ok(url.to_string());
        }
        self.base_url
            .join(image)
            .map(|url| url.to_string())
            .with_context(|| format!("cannot resolve image reference '{}'", image))
    }

    /// Fetch the whole flower collection
    ///
    /// Network failures, non-success statuses and malformed payloads all
    /// surface as errors; the caller decides how to present them.
    pub async fn fetch_flowers(&self) -> Result<Vec<FlowerRecord>> {
        let url = self.flowers_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned HTTP {}", url, status));
        }

        let body = response
            .text()
            .await
            .context("failed to read response body")?;
        let flowers = parse_flowers(&body)?;

        info!("Fetched {} flowers from {}", flowers.len(), url);
        Ok(flowers)
    }

    /// Download an image into memory
    ///
    /// Bodies that are not a recognised image format are rejected so the
    /// caller can fall back to the placeholder.
    pub async fn fetch_image(&self, image: &str) -> Result<Vec<u8>> {
        let url = self.resolve_image_url(image)?;

        let response = self
            .client
            .get(&url)
            .timeout(IMAGE_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned HTTP {}", url, status));
        }

        let bytes = response.bytes().await.context("failed to read image body")?;
        image::guess_format(&bytes)
            .with_context(|| format!("{} did not return a supported image", url))?;

        Ok(bytes.to_vec())
    }
}

/// Validate and normalise the configured backend base URL
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("backend base URL is empty"));
    }

    // A trailing slash makes `Url::join` keep any path prefix of the base
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash)
        .with_context(|| format!("backend base URL '{}' is not a valid URL", trimmed))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("unsupported backend URL scheme '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, returning its base URL
    async fn serve_once(
        status: &'static str,
        content_type: &'static str,
        body: &'static [u8],
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                content_type,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    fn client(base_url: &str) -> FlowersClient {
        FlowersClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            proxy: None,
        })
        .unwrap()
    }

    #[test]
    fn flowers_url_appends_api_path() {
        assert_eq!(
            client("http://localhost:5000").flowers_url(),
            "http://localhost:5000/api/flowers"
        );
    }

    #[test]
    fn flowers_url_tolerates_trailing_slash() {
        assert_eq!(
            client("https://amana.example/").flowers_url(),
            "https://amana.example/api/flowers"
        );
    }

    #[test]
    fn flowers_url_keeps_path_prefix() {
        assert_eq!(
            client("https://amana.example/backend").flowers_url(),
            "https://amana.example/backend/api/flowers"
        );
    }

    #[test]
    fn rejects_empty_base_url() {
        let result = FlowersClient::new(&ApiConfig {
            base_url: "  ".to_string(),
            proxy: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = FlowersClient::new(&ApiConfig {
            base_url: "ftp://amana.example".to_string(),
            proxy: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn absolute_image_urls_are_untouched() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.resolve_image_url("https://cdn.example/rose.webp").unwrap(),
            "https://cdn.example/rose.webp"
        );
    }

    #[test]
    fn relative_image_urls_resolve_against_backend() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.resolve_image_url("/uploads/rose.webp").unwrap(),
            "http://localhost:5000/uploads/rose.webp"
        );
        assert_eq!(
            c.resolve_image_url("uploads/tulip.png").unwrap(),
            "http://localhost:5000/uploads/tulip.png"
        );
    }

    mod property_http {
        use super::*;

        const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0x0d];

        #[tokio::test]
        async fn server_error_status_fails_the_fetch() {
            let base = serve_once("500 Internal Server Error", "text/plain", b"boom").await;
            let err = client(&base).fetch_flowers().await.unwrap_err();
            assert!(format!("{:#}", err).contains("HTTP 500"));
        }

        #[tokio::test]
        async fn valid_array_is_parsed() {
            let base = serve_once(
                "200 OK",
                "application/json",
                br#"[{"_id": "a1", "name": "Rose", "image": null, "available": true}]"#,
            )
            .await;
            let flowers = client(&base).fetch_flowers().await.unwrap();
            assert_eq!(flowers.len(), 1);
            assert_eq!(flowers[0].id, "a1");
            assert_eq!(flowers[0].name, "Rose");
            assert!(flowers[0].available);
        }

        #[tokio::test]
        async fn malformed_payload_fails_the_fetch() {
            let base = serve_once("200 OK", "application/json", br#"{"flowers": []}"#).await;
            assert!(client(&base).fetch_flowers().await.is_err());
        }

        #[tokio::test]
        async fn non_image_body_is_rejected() {
            let base = serve_once("200 OK", "text/html", b"<html>not found</html>").await;
            let err = client(&base).fetch_image("/uploads/rose.webp").await.unwrap_err();
            assert!(format!("{:#}", err).contains("did not return a supported image"));
        }

        #[tokio::test]
        async fn image_bytes_are_returned() {
            let base = serve_once("200 OK", "image/png", PNG_SIGNATURE).await;
            let bytes = client(&base).fetch_image("/uploads/rose.png").await.unwrap();
            assert_eq!(bytes, PNG_SIGNATURE);
        }

        #[tokio::test]
        async fn missing_image_status_is_an_error() {
            let base = serve_once("404 Not Found", "text/plain", b"").await;
            let err = client(&base).fetch_image("/uploads/gone.webp").await.unwrap_err();
            assert!(format!("{:#}", err).contains("HTTP 404"));
        }
    }
}
