//! Error definitions for the client and the two commands.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    /// 服务端非成功响应：只显示服务端消息，HTTP 状态保留在字段中。
    #[error("{message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Empty response from model {model}")]
    EmptyResponse { model: String },

    /// 服务端重复返回已使用过的 `nextPageToken`。
    #[error("Repeated page token from service: {token}")]
    RepeatedPageToken { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Error {
    /// 根据 HTTP 状态与响应体构造 `ApiError`。
    ///
    /// 响应体为 `{"error": {"code", "message", "status"}}` 时取内层 `message`，
    /// 否则使用原始响应体。
    pub(crate) fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP status {status}")
                } else {
                    body.to_string()
                }
            });
        Self::ApiError { status, message }
    }

    /// `ApiError` 的 HTTP 状态码。
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
