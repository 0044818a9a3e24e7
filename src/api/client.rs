//! HTTP client for the rental catalog REST API.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the `/cars` collection endpoint.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::Session;
use crate::models::{Car, CarUpdate, Category, CreateCar};

use super::{ApiError, CarsApi};

/// HTTP request timeout in seconds.
/// 10s matches the backend's expectations; fallback to the local cache
/// kicks in quickly when the server is down.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// API client for the catalog backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new API client against `base_url`. The session handle is
    /// shared: its token is attached to every request, and cleared when
    /// the server answers 401.
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.session.token() {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if a response is successful, returning an error with body if
    /// not. A 401 clears the session token before the error propagates.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            debug!(status = %status, url = %response.url(), "Response received");
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, url = %url, "Request failed");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Session invalidation side effect: the token is stale.
            if let Err(e) = self.session.clear() {
                warn!(error = %e, "Failed to clear session after 401");
            }
        }

        Err(ApiError::from_status(status, &body).into())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(method = "GET", url = %url, "Sending request");

        let mut request = self.client.get(&url).headers(self.auth_headers()?);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!(method = "POST", url = %url, "Sending request");

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!(method = "PUT", url = %url, "Sending request");

        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!(method = "DELETE", url = %url, "Sending request");

        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", url))?;
        self.check_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CarsApi for ApiClient {
    async fn fetch_cars(&self) -> Result<Vec<Car>> {
        self.get("/cars", None).await
    }

    async fn fetch_car(&self, id: &str) -> Result<Car> {
        self.get(&format!("/cars/{}", id), None).await
    }

    async fn fetch_cars_by_category(&self, category: Category) -> Result<Vec<Car>> {
        self.get("/cars", Some(&[("category", category.as_str())]))
            .await
    }

    async fn fetch_available_cars(&self) -> Result<Vec<Car>> {
        self.get("/cars", Some(&[("available", "true")])).await
    }

    async fn create_car(&self, data: &CreateCar) -> Result<Car> {
        self.post("/cars", data).await
    }

    async fn update_car(&self, update: &CarUpdate) -> Result<Car> {
        self.put(&format!("/cars/{}", update.id), update).await
    }

    async fn delete_car(&self, id: &str) -> Result<()> {
        self.delete(&format!("/cars/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = Session::new(dir.path().to_path_buf());
        let client = ApiClient::new("http://localhost:3001/", session).expect("client");
        assert_eq!(client.url("/cars"), "http://localhost:3001/cars");
        assert_eq!(client.url("/cars/42"), "http://localhost:3001/cars/42");
    }

    /// Serve one canned HTTP response, then close the connection.
    async fn one_shot_server(response: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        addr
    }

    #[tokio::test]
    async fn test_unauthorized_response_clears_session() {
        let addr =
            one_shot_server("HTTP/1.1 401 Unauthorized\r\ncontent-length: 0\r\n\r\n").await;

        let dir = tempfile::tempdir().expect("tempdir");
        let session = Session::new(dir.path().to_path_buf());
        session.set_token("stale".to_string()).expect("set token");

        let client =
            ApiClient::new(format!("http://{}", addr), session.clone()).expect("client");
        let err = client.fetch_cars().await.expect_err("401 must fail");

        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::Unauthorized)
        ));
        // Session invalidation side effect: token gone from memory and disk
        assert!(!session.is_authenticated());
        assert!(!dir.path().join("session.json").exists());
    }

    #[test]
    fn test_auth_headers_with_and_without_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = Session::new(dir.path().to_path_buf());
        let client = ApiClient::new("http://localhost:3001", session.clone()).expect("client");

        let headers = client.auth_headers().expect("headers");
        assert!(headers.get(header::AUTHORIZATION).is_none());

        session.set_token("tok".to_string()).expect("set token");
        let headers = client.auth_headers().expect("headers");
        assert_eq!(
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer tok")
        );
    }
}
