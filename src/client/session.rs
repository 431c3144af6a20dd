//! Client session — one resolved agent card bound to one transport.

use crate::error::{ClientError, ClientResult};
use crate::types::{AgentCard, Message, SendMessageParams, SendMessageResponse};

use super::card_resolver::CardResolver;
use super::protocol::{self, METHOD_SEND, METHOD_STREAM};
use super::sse::SseStream;
use super::transport::{JsonRpcTransport, Transport};

/// A session for exchanging messages with one agent.
///
/// Binds exactly one [`AgentCard`] to one [`Transport`] for the lifetime of
/// the run. If an extended card was obtained during startup, that card is the
/// one handed to the session; the session itself never re-resolves.
/// Construction performs no I/O.
///
/// # Example
///
/// ```no_run
/// use a2a_chat::client::{CardResolver, ClientSession};
/// use a2a_chat::client::protocol::new_user_text_message;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let http = reqwest::Client::new();
/// let card = CardResolver::new(http.clone()).resolve("http://localhost:9999").await?;
/// let session = ClientSession::from_card(card, http)?;
/// let response = session.send(new_user_text_message("hello")).await?;
/// println!("{}", serde_json::to_string(&response)?);
/// # Ok(())
/// # }
/// ```
pub struct ClientSession {
    transport: Box<dyn Transport>,
    card: AgentCard,
}

impl std::fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSession")
            .field("card", &self.card)
            .finish_non_exhaustive()
    }
}

impl ClientSession {
    /// Bind a card to a transport. Stores the handles, nothing more.
    pub fn new(transport: Box<dyn Transport>, card: AgentCard) -> Self {
        Self { transport, card }
    }

    /// Build a session from a resolved card, extracting the JSON-RPC
    /// endpoint URL from the card and reusing the run-scoped HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the card exposes no JSON-RPC endpoint.
    pub fn from_card(card: AgentCard, http: reqwest::Client) -> ClientResult<Self> {
        let url = CardResolver::rpc_url(&card).ok_or_else(|| {
            ClientError::Transport(format!(
                "agent card for '{}' has no JSONRPC interface",
                card.name
            ))
        })?;

        let transport = JsonRpcTransport::with_client(url, http);
        Ok(Self::new(Box::new(transport), card))
    }

    /// The card this session was built from (public or extended).
    pub fn card(&self) -> &AgentCard {
        &self.card
    }

    /// Send a message and wait for its single response (`message/send`).
    ///
    /// Builds a fresh correlation identifier per call. Transport failures,
    /// non-success statuses and malformed bodies come back as
    /// [`ClientError::Exchange`]; a JSON-RPC error object from the agent is
    /// carried inside the same wrapper.
    pub async fn send(&self, message: Message) -> ClientResult<SendMessageResponse> {
        let params = SendMessageParams::from_message(message);
        let request = protocol::new_request(METHOD_SEND, &params)?;
        tracing::debug!(correlation_id = %request.id.as_ref().map(ToString::to_string).unwrap_or_default(), "dispatching message/send");
        let response = self
            .transport
            .send(&request)
            .await
            .map_err(ClientError::exchange)?;
        protocol::parse_result(response).map_err(ClientError::exchange)
    }

    /// Send a message and consume the response as an ordered chunk stream
    /// (`message/stream`).
    ///
    /// The returned [`SseStream`] yields chunks lazily in emission order; it
    /// is restartable only by issuing a new request. Errors mid-stream
    /// surface as a terminal `Err` item on the stream, not here.
    pub async fn send_streaming(&self, message: Message) -> ClientResult<SseStream> {
        let params = SendMessageParams::from_message(message);
        let request = protocol::new_request(METHOD_STREAM, &params)?;
        tracing::debug!(correlation_id = %request.id.as_ref().map(ToString::to_string).unwrap_or_default(), "dispatching message/stream");
        self.transport
            .send_stream(&request)
            .await
            .map_err(ClientError::exchange)
    }
}
