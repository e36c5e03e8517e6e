use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, LOCATION, ORIGIN, REFERER, USER_AGENT};
use reqwest::{redirect, Client, Method, StatusCode, Url};

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::providers::SearchTransport;

/// reqwest-backed transport with explicit redirect handling.
///
/// Automatic redirects are disabled on the client. 307/308 are re-sent to
/// `Location` with the same method and body; 301/302/303 continue as a
/// bodiless GET.
pub struct ReqwestTransport {
    client: Client,
    max_redirects: usize,
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| LookupError::Config(format!("Invalid {} header '{}': {}", name, value, e)))
}

impl ReqwestTransport {
    /// Create transport with browser-like headers for the configured origin
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let origin = config.origin();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(REFERER, header_value("Referer", &format!("{}/", origin))?);
        headers.insert(ORIGIN, header_value("Origin", origin)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            max_redirects: config.max_redirects,
        })
    }
}

#[async_trait]
impl SearchTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &[u8]) -> Result<Vec<u8>> {
        let mut target = Url::parse(url).map_err(|e| LookupError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let mut method = Method::POST;
        let mut payload = Some(body.to_vec());

        for _ in 0..=self.max_redirects {
            let mut request = self.client.request(method.clone(), target.clone());
            if let Some(ref bytes) = payload {
                request = request.body(bytes.clone());
            }

            let response = request.send().await?;
            let status = response.status();

            match status {
                StatusCode::MOVED_PERMANENTLY
                | StatusCode::FOUND
                | StatusCode::SEE_OTHER
                | StatusCode::TEMPORARY_REDIRECT
                | StatusCode::PERMANENT_REDIRECT => {
                    let location = response
                        .headers()
                        .get(LOCATION)
                        .and_then(|v| v.to_str().ok())
                        .ok_or_else(|| LookupError::Redirect {
                            url: target.to_string(),
                            message: format!("HTTP {} without Location header", status.as_u16()),
                        })?;

                    let next = target.join(location).map_err(|e| LookupError::InvalidUrl {
                        url: location.to_string(),
                        message: e.to_string(),
                    })?;

                    if status != StatusCode::TEMPORARY_REDIRECT && status != StatusCode::PERMANENT_REDIRECT {
                        method = Method::GET;
                        payload = None;
                    }

                    tracing::debug!("↪️ HTTP {} from {}, following to {} ({})", status.as_u16(), target, next, method);
                    target = next;
                }
                s if s.is_success() => {
                    let bytes = response.bytes().await?;
                    return Ok(bytes.to_vec());
                }
                s => {
                    return Err(LookupError::Status {
                        url: target.to_string(),
                        status: s.as_u16(),
                    });
                }
            }
        }

        Err(LookupError::Redirect {
            url: url.to_string(),
            message: format!("more than {} redirects", self.max_redirects),
        })
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new(&LookupConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_user_agent() {
        let mut config = LookupConfig::default();
        config.user_agent = "bad\nagent".to_string();
        assert!(matches!(ReqwestTransport::new(&config), Err(LookupError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let transport = ReqwestTransport::new(&LookupConfig::default()).unwrap();
        let result = transport.post_json("not a url", b"{}").await;
        assert!(matches!(result, Err(LookupError::InvalidUrl { .. })));
    }
}
