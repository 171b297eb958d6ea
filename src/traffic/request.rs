//! Request descriptors.

use std::fmt;

use serde_json::Value;
use url::Url;

/// HTTP methods the driver issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// One scheduled call: what to send, where, and how to label it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: Url,
    /// JSON body; when present the request carries `Content-Type: application/json`.
    pub body: Option<Value>,
    pub description: String,
}

impl RequestDescriptor {
    pub fn get(url: Url, description: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            body: None,
            description: description.into(),
        }
    }

    pub fn post_json(url: Url, body: Value, description: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            body: Some(body),
            description: description.into(),
        }
    }
}
