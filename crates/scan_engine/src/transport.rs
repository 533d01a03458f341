use futures_util::StreamExt;
use serde::de::DeserializeOwned;

use crate::types::CallError;
use crate::wire;

/// Sends `request`, buffers at most `max_bytes` of the body and decodes it.
///
/// Non-success statuses become [`CallError::Rejected`] carrying the service's
/// `error` field when the body has one.
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    max_bytes: u64,
) -> Result<T, CallError> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    let body = read_body(response, max_bytes).await?;

    if !status.is_success() {
        return Err(CallError::Rejected {
            status: status.as_u16(),
            message: wire::error_message(&body),
        });
    }

    wire::decode(&body)
}

async fn read_body(response: reqwest::Response, max_bytes: u64) -> Result<Vec<u8>, CallError> {
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, content_len));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, next_len));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn too_large(max_bytes: u64, actual: u64) -> CallError {
    CallError::Transport(format!(
        "response too large (max {max_bytes}, actual {actual})"
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> CallError {
    if err.is_timeout() {
        return CallError::Transport(format!("timeout: {err}"));
    }
    if err.is_connect() {
        return CallError::Transport(format!("connection failed: {err}"));
    }
    CallError::Transport(err.to_string())
}
