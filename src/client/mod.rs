//! Client side of the A2A protocol: card discovery, session, wire plumbing.
//!
//! - [`CardResolver`] — fetch public and authenticated extended agent cards
//! - [`ClientSession`] — one card bound to one transport; send and stream
//! - [`protocol`] — request shapes and fresh-identifier discipline
//! - [`Transport`] / [`JsonRpcTransport`] — pluggable transport seam
//! - [`SseStream`] — ordered chunk stream for streaming exchanges
//!
//! # Quick start
//!
//! ```no_run
//! use a2a_chat::client::{CardResolver, ClientSession};
//! use a2a_chat::client::protocol::new_user_text_message;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let http = reqwest::Client::new();
//! let card = CardResolver::new(http.clone()).resolve("http://localhost:9999").await?;
//! let session = ClientSession::from_card(card, http)?;
//!
//! let mut stream = session
//!     .send_streaming(new_user_text_message("Write a haiku"))
//!     .await?;
//! while let Some(chunk) = stream.next().await {
//!     println!("{}", serde_json::to_string(&chunk?)?);
//! }
//! # Ok(())
//! # }
//! ```

mod card_resolver;
pub mod protocol;
mod session;
mod sse;
mod transport;

pub use card_resolver::{
    CardResolver, AGENT_CARD_WELL_KNOWN_PATH, EXTENDED_AGENT_CARD_PATH, PREV_AGENT_CARD_PATH,
};
pub use session::ClientSession;
pub use sse::{SseStream, SseStreamAdapter};
pub use transport::{JsonRpcTransport, Transport, TransportConfig};
