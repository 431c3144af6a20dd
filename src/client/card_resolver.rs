//! Agent card discovery and resolution.
//!
//! Two fixed paths under the agent base URL: the public card at the
//! well-known path (available to anyone), and the authenticated extended
//! card (available only to callers presenting a bearer credential, and only
//! when the public card advertises it).
//!
//! Failure policy differs per path: a public-card failure is fatal to the
//! run ([`ClientError::Discovery`]); an extended-card failure is non-fatal
//! ([`ClientError::ExtendedDiscovery`]) and callers fall back to the public
//! card.

use crate::error::{ClientError, ClientResult};
use crate::types::AgentCard;

/// Well-known path for the public agent card (A2A v0.3+).
pub const AGENT_CARD_WELL_KNOWN_PATH: &str = "/.well-known/agent-card.json";

/// Previous well-known path (pre-v0.3 compat).
pub const PREV_AGENT_CARD_PATH: &str = "/.well-known/agent.json";

/// Path for the authenticated extended agent card.
pub const EXTENDED_AGENT_CARD_PATH: &str = "/agent/authenticatedExtendedCard";

/// Resolves [`AgentCard`]s from agent base URLs.
///
/// # Example
///
/// ```no_run
/// use a2a_chat::client::CardResolver;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = CardResolver::new(reqwest::Client::new());
/// let card = resolver.resolve("http://localhost:9999").await?;
/// println!("Agent: {} v{}", card.name, card.version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CardResolver {
    client: reqwest::Client,
}

impl CardResolver {
    /// Create a resolver over the run-scoped HTTP client handle.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch and parse the public agent card from the given base URL.
    ///
    /// Tries `{base}/.well-known/agent-card.json` first; on a 404, falls
    /// back to the legacy `/.well-known/agent.json` path.
    ///
    /// # Errors
    ///
    /// Any failure (connection, timeout, non-2xx status, malformed card)
    /// is wrapped as [`ClientError::Discovery`] — there is no session
    /// without a public card.
    pub async fn resolve(&self, base_url: &str) -> ClientResult<AgentCard> {
        let base = base_url.trim_end_matches('/');

        let result = match self.fetch_card(base, AGENT_CARD_WELL_KNOWN_PATH, None).await {
            Err(ClientError::Http { status: 404, .. }) => {
                tracing::debug!(
                    "agent card not found at {}{}, trying fallback path {}",
                    base,
                    AGENT_CARD_WELL_KNOWN_PATH,
                    PREV_AGENT_CARD_PATH,
                );
                self.fetch_card(base, PREV_AGENT_CARD_PATH, None).await
            }
            other => other,
        };

        result.map_err(ClientError::discovery)
    }

    /// Fetch and parse the authenticated extended agent card.
    ///
    /// Attaches `Authorization: Bearer {token}` and fetches from
    /// `{base}/agent/authenticatedExtendedCard`. Meant to be called only
    /// when the public card's extended-support flag is set; exactly one
    /// attempt, no retry.
    ///
    /// # Errors
    ///
    /// Failures are wrapped as [`ClientError::ExtendedDiscovery`], which is
    /// non-fatal: the caller keeps the already-resolved public card.
    pub async fn resolve_extended(&self, base_url: &str, token: &str) -> ClientResult<AgentCard> {
        let base = base_url.trim_end_matches('/');

        self.fetch_card(base, EXTENDED_AGENT_CARD_PATH, Some(token))
            .await
            .map_err(ClientError::extended_discovery)
    }

    /// Fetch and parse an agent card from a path relative to a base URL.
    async fn fetch_card(
        &self,
        base: &str,
        path: &str,
        bearer_token: Option<&str>,
    ) -> ClientResult<AgentCard> {
        let url = format!("{base}{path}");

        tracing::debug!("resolving agent card from {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::Transport(format!("failed to connect to agent at {url}: {e}"))
            } else if e.is_timeout() {
                ClientError::Timeout(format!("timed out fetching agent card from {url}: {e}"))
            } else {
                ClientError::Transport(format!("failed to fetch agent card from {url}: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            ClientError::Transport(format!("failed to read agent card response: {e}"))
        })?;

        let card: AgentCard = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidJson(format!("failed to parse agent card: {e}")))?;

        tracing::debug!("resolved agent card: {} v{}", card.name, card.version);

        Ok(card)
    }

    /// Extract the JSON-RPC endpoint URL from an agent card.
    ///
    /// Looks for the first interface with `transport` of `"JSONRPC"`
    /// (case-insensitive); falls back to the card's primary `url` when no
    /// interface list is present.
    pub fn rpc_url(card: &AgentCard) -> Option<String> {
        card.supported_interfaces
            .iter()
            .find(|iface| iface.transport.eq_ignore_ascii_case("JSONRPC"))
            .map(|iface| iface.url.clone())
            .or_else(|| {
                if card.supported_interfaces.is_empty() {
                    Some(card.url.clone())
                } else {
                    None
                }
            })
    }
}
