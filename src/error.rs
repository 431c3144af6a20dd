//! Client error taxonomy.
//!
//! Two layers, one enum:
//! - low-level variants describe what went wrong on the wire (connection,
//!   timeout, HTTP status, malformed JSON, JSON-RPC error object);
//! - operation-kind wrappers say which client operation failed and carry the
//!   low-level cause as their source: [`ClientError::Discovery`] (fatal —
//!   no public card, no session), [`ClientError::ExtendedDiscovery`]
//!   (non-fatal — callers fall back to the public card), and
//!   [`ClientError::Exchange`] (per send/stream call).

// ---------------------------------------------------------------------------
// Standard JSON-RPC 2.0 error codes
// ---------------------------------------------------------------------------

/// Invalid JSON was received by the server.
pub const PARSE_ERROR: i64 = -32700;

/// The JSON sent is not a valid Request object.
pub const INVALID_REQUEST: i64 = -32600;

/// The method does not exist / is not available.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Invalid method parameter(s).
pub const INVALID_PARAMS: i64 = -32602;

/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;

// ---------------------------------------------------------------------------
// A2A-specific error codes
// ---------------------------------------------------------------------------

/// The requested task was not found.
pub const TASK_NOT_FOUND: i64 = -32001;

/// The task cannot be canceled in its current state.
pub const TASK_NOT_CANCELABLE: i64 = -32002;

/// Push notifications are not supported by this agent.
pub const PUSH_NOTIFICATION_NOT_SUPPORTED: i64 = -32003;

/// The requested operation is not supported.
pub const UNSUPPORTED_OPERATION: i64 = -32004;

/// The content type is not supported.
pub const CONTENT_TYPE_NOT_SUPPORTED: i64 = -32005;

/// The agent returned an invalid response.
pub const INVALID_AGENT_RESPONSE: i64 = -32006;

/// Authenticated extended card is not configured on the agent.
pub const AUTHENTICATED_EXTENDED_CARD_NOT_CONFIGURED: i64 = -32007;

/// Unified error type for all client operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    // -- Low-level wire errors --
    /// Transport-level error (connection failed, request failed, etc.).
    #[error("transport error: {0}")]
    Transport(String),

    /// Request or stream timed out.
    #[error("timeout: {0}")]
    Timeout(String),

    /// HTTP error with status code and response body.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Invalid JSON received from the agent (parse or deserialization
    /// failure).
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A JSON-RPC error response was received from the agent.
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message.
        message: String,
        /// Optional structured error data.
        data: Option<serde_json::Value>,
    },

    // -- Operation-kind wrappers --
    /// The public agent card could not be fetched or parsed. Fatal: without
    /// a card no session can be built.
    #[error("agent card discovery failed: {source}")]
    Discovery {
        /// The underlying wire error.
        #[source]
        source: Box<ClientError>,
    },

    /// The authenticated extended card could not be fetched or parsed.
    /// Non-fatal: callers log it and keep using the public card.
    #[error("extended agent card discovery failed: {source}")]
    ExtendedDiscovery {
        /// The underlying wire error.
        #[source]
        source: Box<ClientError>,
    },

    /// A message exchange (send or stream) failed.
    #[error("message exchange failed: {source}")]
    Exchange {
        /// The underlying wire error.
        #[source]
        source: Box<ClientError>,
    },
}

/// Convenience result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Wrap a wire error as a fatal public-card discovery failure.
    pub fn discovery(source: ClientError) -> Self {
        ClientError::Discovery {
            source: Box::new(source),
        }
    }

    /// Wrap a wire error as a non-fatal extended-card discovery failure.
    pub fn extended_discovery(source: ClientError) -> Self {
        ClientError::ExtendedDiscovery {
            source: Box::new(source),
        }
    }

    /// Wrap a wire error as a message-exchange failure.
    pub fn exchange(source: ClientError) -> Self {
        ClientError::Exchange {
            source: Box::new(source),
        }
    }

    /// Whether this error must abort the run.
    ///
    /// Only public-card discovery failures are fatal; extended-discovery
    /// failures degrade to the public card and exchange failures are
    /// reported per call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClientError::Discovery { .. })
    }

    /// The JSON-RPC error code carried by this error, if any.
    pub fn json_rpc_code(&self) -> Option<i64> {
        match self {
            ClientError::JsonRpc { code, .. } => Some(*code),
            ClientError::Discovery { source }
            | ClientError::ExtendedDiscovery { source }
            | ClientError::Exchange { source } => source.json_rpc_code(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidJson(err.to_string())
    }
}
