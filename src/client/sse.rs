//! Server-Sent Events (SSE) decoding for streaming exchanges.
//!
//! Parses SSE `data:` lines from the HTTP response into [`StreamResponse`]
//! chunks, in emission order. Chunks may arrive raw or wrapped in a JSON-RPC
//! response envelope; both forms are handled. A decode or transport failure
//! surfaces as one terminal `Err` item, after which the stream ends.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;
use tokio::sync::mpsc;

use crate::error::{ClientError, ClientResult};
use crate::types::StreamResponse;

/// An ordered stream of chunks from one `message/stream` request.
///
/// The sequence is finite or open-ended, consumed one chunk at a time with
/// [`next()`](SseStream::next). It is not seekable; restarting means issuing
/// a new request. Dropping the stream abandons consumption without signaling
/// the agent.
pub struct SseStream {
    receiver: mpsc::Receiver<ClientResult<StreamResponse>>,
    /// Background task handle — kept alive so the parsing task runs to completion.
    _task: tokio::task::JoinHandle<()>,
}

impl std::fmt::Debug for SseStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SseStream").finish_non_exhaustive()
    }
}

impl SseStream {
    /// Create an `SseStream` from a raw `reqwest::Response`.
    ///
    /// Spawns a background task that reads the response body as SSE lines
    /// and sends parsed chunks through a bounded channel, preserving order.
    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        let (tx, rx) = mpsc::channel(64);

        let task = tokio::spawn(async move {
            if let Err(e) = decode_sse_body(response, &tx).await {
                // Terminal error: forward it and stop. Send failures mean
                // the receiver was dropped.
                let _ = tx.send(Err(e)).await;
            }
        });

        Self {
            receiver: rx,
            _task: task,
        }
    }

    /// Get the next chunk from the stream.
    ///
    /// Returns `None` when the stream is exhausted (the agent closed the
    /// connection). Returns `Some(Err(...))` on a terminal decode or
    /// transport error.
    pub async fn next(&mut self) -> Option<ClientResult<StreamResponse>> {
        self.receiver.recv().await
    }

    /// Convert into a `futures::Stream` of chunks.
    pub fn into_stream(self) -> SseStreamAdapter {
        SseStreamAdapter {
            receiver: self.receiver,
            _task: self._task,
        }
    }
}

/// `futures::Stream` adapter created by [`SseStream::into_stream()`].
pub struct SseStreamAdapter {
    receiver: mpsc::Receiver<ClientResult<StreamResponse>>,
    _task: tokio::task::JoinHandle<()>,
}

impl Stream for SseStreamAdapter {
    type Item = ClientResult<StreamResponse>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

/// Read the response body incrementally and decode complete SSE lines.
async fn decode_sse_body(
    response: reqwest::Response,
    tx: &mpsc::Sender<ClientResult<StreamResponse>>,
) -> ClientResult<()> {
    use futures::StreamExt;

    let mut body = response.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk_result) = body.next().await {
        let chunk = chunk_result
            .map_err(|e| ClientError::Transport(format!("error reading SSE stream: {e}")))?;

        let text = std::str::from_utf8(&chunk)
            .map_err(|e| ClientError::Transport(format!("invalid UTF-8 in SSE stream: {e}")))?;

        buffer.push_str(text);

        while let Some(newline_pos) = buffer.find('\n') {
            let line = buffer[..newline_pos].trim_end_matches('\r').to_string();
            buffer = buffer[newline_pos + 1..].to_string();

            if let Some(event) = decode_sse_line(&line)? {
                if tx.send(Ok(event)).await.is_err() {
                    // Receiver dropped — the client stopped consuming.
                    return Ok(());
                }
            }
        }
    }

    // Trailing data without a final newline.
    if !buffer.trim().is_empty() {
        if let Some(event) = decode_sse_line(buffer.trim())? {
            let _ = tx.send(Ok(event)).await;
        }
    }

    Ok(())
}

/// Decode a single SSE line. Returns `Some(chunk)` for `data:` lines with
/// valid JSON, `None` for comments, empty lines, keep-alives, and the
/// `[DONE]` completion sentinel.
///
/// Two payload forms are accepted:
/// 1. **Raw** — the data is a `StreamResponse` directly.
/// 2. **JSON-RPC wrapped** — the data is a full JSON-RPC response whose
///    `result` field holds the `StreamResponse`; an `error` field becomes a
///    terminal stream error.
fn decode_sse_line(line: &str) -> ClientResult<Option<StreamResponse>> {
    // Empty line = event boundary (data lines are processed individually).
    if line.is_empty() {
        return Ok(None);
    }

    // SSE comments (lines starting with ':') are keep-alive signals.
    if line.starts_with(':') {
        return Ok(None);
    }

    if let Some(data) = line.strip_prefix("data:") {
        let data = data.trim();

        if data.is_empty() {
            return Ok(None);
        }

        if data == "[DONE]" {
            return Ok(None);
        }

        let value: serde_json::Value = serde_json::from_str(data).map_err(|e| {
            ClientError::InvalidJson(format!("failed to parse SSE event data: {e} (data: {data})"))
        })?;

        // Detect the JSON-RPC wrapper by its "jsonrpc" field.
        let chunk_value = if value.get("jsonrpc").is_some() {
            if let Some(error) = value.get("error") {
                let code = error.get("code").and_then(|c| c.as_i64()).unwrap_or(-1);
                let message = error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown error")
                    .to_string();
                let data = error.get("data").cloned();
                return Err(ClientError::JsonRpc {
                    code,
                    message,
                    data,
                });
            }
            value.get("result").cloned().ok_or_else(|| {
                ClientError::InvalidJson(format!(
                    "JSON-RPC SSE response has neither 'result' nor 'error': {data}"
                ))
            })?
        } else {
            value
        };

        let chunk: StreamResponse = serde_json::from_value(chunk_value).map_err(|e| {
            ClientError::InvalidJson(format!(
                "failed to parse SSE event as stream chunk: {e} (data: {data})"
            ))
        })?;

        return Ok(Some(chunk));
    }

    // Other SSE fields (event:, id:, retry:) carry no payload for us.
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_skipped() {
        assert!(decode_sse_line("").unwrap().is_none());
    }

    #[test]
    fn comment_is_skipped() {
        assert!(decode_sse_line(": keepalive").unwrap().is_none());
    }

    #[test]
    fn done_sentinel_is_skipped() {
        assert!(decode_sse_line("data: [DONE]").unwrap().is_none());
    }

    #[test]
    fn empty_data_is_skipped() {
        assert!(decode_sse_line("data:").unwrap().is_none());
        assert!(decode_sse_line("data:  ").unwrap().is_none());
    }

    #[test]
    fn non_data_fields_are_skipped() {
        assert!(decode_sse_line("event: update").unwrap().is_none());
        assert!(decode_sse_line("id: 123").unwrap().is_none());
        assert!(decode_sse_line("retry: 5000").unwrap().is_none());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(decode_sse_line("data: {not valid json}").is_err());
    }

    #[test]
    fn raw_chunk_is_decoded() {
        let line = r#"data: {"kind":"message","messageId":"m1","role":"agent","parts":[{"kind":"text","text":"hi"}]}"#;
        let chunk = decode_sse_line(line).unwrap().unwrap();
        assert!(matches!(chunk, StreamResponse::Message(_)));
    }

    #[test]
    fn json_rpc_wrapped_chunk_is_unwrapped() {
        let line = r#"data: {"jsonrpc":"2.0","id":"r1","result":{"kind":"status-update","taskId":"t1","contextId":"c1","status":{"state":"working"},"final":false}}"#;
        let chunk = decode_sse_line(line).unwrap().unwrap();
        assert!(matches!(chunk, StreamResponse::StatusUpdate(_)));
    }

    #[test]
    fn json_rpc_error_becomes_stream_error() {
        let line = r#"data: {"jsonrpc":"2.0","id":"r1","error":{"code":-32004,"message":"nope"}}"#;
        match decode_sse_line(line) {
            Err(ClientError::JsonRpc { code, message, .. }) => {
                assert_eq!(code, -32004);
                assert_eq!(message, "nope");
            }
            other => panic!("expected JSON-RPC error, got {:?}", other),
        }
    }
}
