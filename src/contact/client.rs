//! HTTP client for the contact endpoint

use super::error::{classify_response, SubmitError};
use super::payload::{ApiReply, ContactPayload};
use super::traits::ContactApi;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Default contact endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.yourdomain.com/contact";

/// Client posting contact submissions as JSON
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Create a client for `endpoint`. No request timeout is set.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactApi for ContactClient {
    async fn submit(&self, payload: &ContactPayload) -> Result<ApiReply, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        tracing::debug!(status, endpoint = %self.endpoint, "contact endpoint responded");
        classify_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Jo-Anne".to_string(),
            email: "a@b.c".to_string(),
            message: "Hello".to_string(),
            source: "website_contact_form".to_string(),
        }
    }

    /// A raw HTTP request as seen by the server
    struct Captured {
        head: String,
        body: String,
    }

    /// Accept one connection, answer with `status` and `body`, and hand back the request
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/contact", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];

            let head_end = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                raw.extend_from_slice(&buf[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&raw[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while raw.len() < head_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            let request_body = String::from_utf8_lossy(&raw[head_end..]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            Captured {
                head,
                body: request_body,
            }
        });

        (url, handle)
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let client = ContactClient::new("http://127.0.0.1:9/contact").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/contact");
    }

    #[tokio::test]
    async fn test_posts_json_with_form_headers() {
        let (url, server) = serve_once("200 OK", r#"{"message":"Thanks"}"#).await;
        let client = ContactClient::new(url).unwrap();

        let reply = client.submit(&payload()).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.head.starts_with("post /contact http/1.1"));
        assert!(request.head.contains("content-type: application/json"));
        assert!(request.head.contains("x-requested-with: xmlhttprequest"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Jo-Anne",
                "email": "a@b.c",
                "message": "Hello",
                "source": "website_contact_form",
            })
        );
        assert_eq!(
            reply,
            ApiReply {
                status: 200,
                message: Some("Thanks".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_bad_request_carries_server_message() {
        let (url, server) =
            serve_once("400 Bad Request", r#"{"message":"Email rejected"}"#).await;
        let client = ContactClient::new(url).unwrap();

        let err = client.submit(&payload()).await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err, SubmitError::Validation("Email rejected".to_string()));
    }

    #[tokio::test]
    async fn test_too_many_requests_is_rate_limited() {
        let (url, server) = serve_once("429 Too Many Requests", "{}").await;
        let client = ContactClient::new(url).unwrap();

        let err = client.submit(&payload()).await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err, SubmitError::RateLimited);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Bind then drop to get a local port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/contact", listener.local_addr().unwrap());
        drop(listener);

        let client = ContactClient::new(url).unwrap();
        let err = client.submit(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }
}
