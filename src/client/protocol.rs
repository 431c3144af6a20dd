//! Message-exchange request shapes and identifier discipline.
//!
//! Every outbound message carries a freshly generated UUIDv4 message id, and
//! every request envelope a freshly generated, independent UUIDv4 correlation
//! id. Generation is pure per call (no shared counter); collisions are
//! negligible, so identifiers are never reused within a run — reuse would let
//! the agent conflate unrelated exchanges.

use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::types::{JsonRpcId, JsonRpcRequest, JsonRpcResponse, Message, Part, Role};

/// JSON-RPC method for a single request/response exchange.
pub const METHOD_SEND: &str = "message/send";

/// JSON-RPC method for a streaming exchange.
pub const METHOD_STREAM: &str = "message/stream";

/// Create a user message containing a single text part, with a fresh
/// message identifier.
pub fn new_user_text_message(text: impl Into<String>) -> Message {
    Message {
        message_id: uuid::Uuid::new_v4().to_string(),
        role: Role::User,
        kind: "message".to_string(),
        parts: vec![Part::text(text)],
        context_id: None,
        task_id: None,
        metadata: None,
        extensions: None,
        reference_task_ids: None,
    }
}

/// Build a JSON-RPC request with a fresh correlation identifier.
pub fn new_request(method: &str, params: &impl Serialize) -> ClientResult<JsonRpcRequest> {
    let params_value = serde_json::to_value(params)
        .map_err(|e| ClientError::Transport(format!("failed to serialize request params: {e}")))?;

    Ok(JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(JsonRpcId::String(uuid::Uuid::new_v4().to_string())),
        method: method.to_string(),
        params: Some(params_value),
    })
}

/// Extract the `result` field from a JSON-RPC response into the expected
/// type.
///
/// A JSON-RPC `error` object becomes [`ClientError::JsonRpc`]; a response
/// with neither field is malformed.
pub fn parse_result<T: serde::de::DeserializeOwned>(response: JsonRpcResponse) -> ClientResult<T> {
    if let Some(error) = response.error {
        return Err(ClientError::JsonRpc {
            code: error.code,
            message: error.message,
            data: error.data,
        });
    }

    let result = response.result.ok_or_else(|| {
        ClientError::InvalidJson("JSON-RPC response has neither 'result' nor 'error'".to_string())
    })?;

    serde_json::from_value(result)
        .map_err(|e| ClientError::InvalidJson(format!("failed to deserialize response result: {e}")))
}
