//! Thin JSON client for the external users API.
//!
//! Every call goes through [`ApiClient::request`]: JSON in, JSON out, an optional
//! bearer token, and a generic status error for anything outside 2xx. There is no
//! retry and the body of a failed response is never read.

use actix_web::HttpRequest;
use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};

use crate::{api::error, constants::ACCESS_TOKEN_COOKIE};

/// Bearer token for outbound calls, read from the caller's `access_token` cookie.
pub fn access_token(req: &HttpRequest) -> Option<String> {
    req.cookie(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `token` is the caller's access token; `None` or an empty string sends no
    /// `Authorization` header.
    pub async fn request<T, B>(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, error::SystemError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request =
            self.http.request(method.clone(), &url).header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        if let Some(body) = data {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} {} answered {}", method, url, status);
            return Err(error::SystemError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get<T>(&self, endpoint: &str, token: Option<&str>) -> Result<T, error::SystemError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(endpoint, Method::GET, None, token).await
    }

    pub async fn post<T, B>(
        &self,
        endpoint: &str,
        data: &B,
        token: Option<&str>,
    ) -> Result<T, error::SystemError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B>(endpoint, Method::POST, Some(data), token).await
    }

    pub async fn get_without_auth<T>(&self, endpoint: &str) -> Result<T, error::SystemError>
    where
        T: DeserializeOwned,
    {
        self.get(endpoint, None).await
    }

    pub async fn post_without_auth<T, B>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<T, error::SystemError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post(endpoint, data, None).await
    }
}
