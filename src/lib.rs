//! # a2a-chat — A2A Protocol v0.3 client with an interactive CLI
//!
//! This crate talks to remote agents speaking the
//! [A2A protocol](https://a2a-protocol.org/latest/specification/) over
//! JSON-RPC 2.0, with real-time streaming via Server-Sent Events (SSE).
//!
//! ## Overview
//!
//! The client side of the protocol breaks down into three pieces, each with
//! its own module here:
//!
//! - **Discovery** — fetch an agent's card from
//!   `/.well-known/agent-card.json` and, when the card advertises it,
//!   upgrade to the authenticated extended card
//!   ([`client::CardResolver`])
//! - **Exchanges** — `message/send` for a single response and
//!   `message/stream` for an SSE chunk sequence, over a session pinned to
//!   one resolved card ([`client::ClientSession`])
//! - **Interactive driver** — a one-shot demonstration mode and a chat
//!   REPL, both built on the session ([`driver`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use a2a_chat::client::{CardResolver, ClientSession};
//! use a2a_chat::client::protocol::new_user_text_message;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = reqwest::Client::new();
//!
//!     // Discover the agent and pin a session to its card.
//!     let resolver = CardResolver::new(http.clone());
//!     let card = resolver.resolve("http://localhost:9999").await?;
//!     let session = ClientSession::from_card(card, http)?;
//!
//!     // Single-shot exchange.
//!     let response = session
//!         .send(new_user_text_message("how much is 10 USD in INR?"))
//!         .await?;
//!     println!("{}", serde_json::to_string(&response)?);
//!
//!     // Streaming exchange.
//!     let mut stream = session
//!         .send_streaming(new_user_text_message("tell me more"))
//!         .await?;
//!     while let Some(chunk) = stream.next().await {
//!         println!("{}", serde_json::to_string(&chunk?)?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`client::CardResolver`] — agent card discovery with legacy-path
//!   fallback and the authenticated extended-card fetch
//! - [`client::ClientSession`] — send/stream exchanges against one card
//! - [`client::JsonRpcTransport`] — HTTP transport with JSON-RPC 2.0
//!   encoding
//! - [`client::SseStream`] — Server-Sent Events chunk stream
//! - [`driver`] — one-shot and chat run modes over a [`driver::Console`]
//! - [`types`] — A2A v0.3 wire types ([`types::AgentCard`],
//!   [`types::Message`], [`types::Task`], [`types::StreamResponse`])
//! - [`error::ClientError`] — error taxonomy with JSON-RPC error codes

pub mod client;
pub mod driver;
pub mod error;
pub mod types;

/// Prelude module that re-exports commonly used types and traits.
///
/// Import this module with `use a2a_chat::prelude::*;` to get access to the
/// most frequently used types without having to import them individually.
pub mod prelude {
    pub use crate::types::{
        AgentCapabilities, AgentCard, AgentInterface, AgentSkill, Artifact, FileContent,
        FileWithBytes, FileWithUri, Message, Part, Role, SendMessageConfiguration,
        SendMessageParams, SendMessageResponse, StreamResponse, Task, TaskArtifactUpdateEvent,
        TaskState, TaskStatus, TaskStatusUpdateEvent,
    };

    pub use crate::error::{ClientError, ClientResult};

    pub use crate::client::{CardResolver, ClientSession, SseStream};
}

// Re-export core types at crate root for convenience.
pub use error::{ClientError, ClientResult};
pub use types::*;
