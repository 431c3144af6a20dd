//! Interactive driver: the two run modes of the CLI.
//!
//! **One-shot mode** ([`run_demo`]) resolves the agent card (upgrading to the
//! authenticated extended card when advertised), sends one fixed
//! demonstration message, renders the single response, then replays the same
//! text as a streaming exchange, asking after every chunk whether to keep
//! draining. **Chat mode** ([`run_chat`]) resolves only the public card and
//! loops over operator input lines, streaming each one and draining the full
//! chunk sequence per turn.
//!
//! Console I/O goes through the [`Console`] trait so both modes can be
//! driven by scripted input in tests. Reads are blocking, which is fine
//! here: no other work is in flight while waiting for the operator.

use serde::Serialize;

use crate::client::{CardResolver, ClientSession};
use crate::client::protocol::new_user_text_message;
use crate::error::{ClientError, ClientResult};
use crate::types::AgentCard;

/// Fixed text sent by the one-shot demonstration exchange.
pub const DEMO_MESSAGE_TEXT: &str = "how much is 10 USD in INR?";

/// Per-chunk continuation prompt in one-shot mode.
const CONTINUE_PROMPT: &str = "Continue receiving messages? (y/n): ";

/// Input prompt in chat mode.
const CHAT_PROMPT: &str = "You: ";

/// Line-oriented console the driver reads from and renders to.
///
/// `read_line` blocks until a line is available and returns `None` on
/// end-of-input.
pub trait Console {
    /// Display `prompt` and read one line of operator input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Render one line of output.
    fn print(&mut self, line: &str);
}

/// [`Console`] over process stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        use std::io::Write;

        print!("{prompt}");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Outcome of the startup card negotiation.
#[derive(Debug)]
pub struct NegotiatedCard {
    /// The card every subsequent request uses.
    pub card: AgentCard,
    /// Set when the extended fetch was attempted and failed; the run
    /// continues on the public card.
    pub fallback: Option<ClientError>,
}

/// Resolve the active agent card with the fail-soft upgrade policy.
///
/// Fetches the public card (fatal on failure), then — only if the public
/// card advertises extended support — makes exactly one attempt to fetch
/// the authenticated extended card with the supplied bearer credential. On
/// upgrade failure a warning is logged and the public card stays active.
pub async fn negotiate_agent_card(
    resolver: &CardResolver,
    base_url: &str,
    token: &str,
) -> ClientResult<NegotiatedCard> {
    let public_card = resolver.resolve(base_url).await?;
    tracing::info!(agent = %public_card.name, version = %public_card.version,
        "fetched public agent card");

    if !public_card.supports_extended_card() {
        tracing::info!("public card does not advertise an extended card; using public card");
        return Ok(NegotiatedCard {
            card: public_card,
            fallback: None,
        });
    }

    tracing::info!("public card supports an authenticated extended card; attempting upgrade");
    match resolver.resolve_extended(base_url, token).await {
        Ok(extended_card) => {
            tracing::info!(agent = %extended_card.name,
                "using authenticated extended agent card");
            Ok(NegotiatedCard {
                card: extended_card,
                fallback: None,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e,
                "failed to fetch extended agent card; proceeding with public card");
            Ok(NegotiatedCard {
                card: public_card,
                fallback: Some(e),
            })
        }
    }
}

/// One-shot demonstration exchange.
///
/// Sends [`DEMO_MESSAGE_TEXT`] once via `message/send` and renders the
/// response, then opens a streaming exchange for the same text and renders
/// chunks one at a time, prompting after each. Any answer other than an
/// affirmative stops draining the stream — a client-initiated early close,
/// not an error. A failed send or a terminal stream error aborts the
/// remaining sequence.
pub async fn run_demo(
    http: reqwest::Client,
    agent_url: &str,
    token: &str,
    console: &mut dyn Console,
) -> ClientResult<()> {
    let resolver = CardResolver::new(http.clone());
    let negotiated = negotiate_agent_card(&resolver, agent_url, token).await?;
    let session = ClientSession::from_card(negotiated.card, http)?;
    tracing::info!("client session initialized");

    let response = session.send(new_user_text_message(DEMO_MESSAGE_TEXT)).await?;
    render(console, &response);

    let mut stream = session
        .send_streaming(new_user_text_message(DEMO_MESSAGE_TEXT))
        .await?;
    while let Some(chunk) = stream.next().await {
        render(console, &chunk?);
        match console.read_line(CONTINUE_PROMPT) {
            Some(answer) if is_affirmative(&answer) => continue,
            // Declined or end-of-input: abandon the rest of the stream.
            _ => break,
        }
    }

    console.print(&"-".repeat(20));
    console.print("End of streaming response.");
    Ok(())
}

/// Interactive chat loop.
///
/// Resolves only the public card (no upgrade attempt), then reads operator
/// lines until an exit keyword or end-of-input. Every other line becomes one
/// streaming exchange whose full chunk sequence is drained before the next
/// read. Exchange failures end only the current turn.
pub async fn run_chat(
    http: reqwest::Client,
    agent_url: &str,
    console: &mut dyn Console,
) -> ClientResult<()> {
    tracing::info!(agent_url, "starting chat mode");

    let resolver = CardResolver::new(http.clone());
    let public_card = resolver.resolve(agent_url).await?;
    let session = ClientSession::from_card(public_card, http)?;
    tracing::info!("client session initialized for chat mode");

    while let Some(input) = console.read_line(CHAT_PROMPT) {
        if is_exit_command(&input) {
            break;
        }

        let mut stream = match session.send_streaming(new_user_text_message(input)).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!(error = %e, "streaming exchange failed");
                console.print(&format!("error: {e}"));
                continue;
            }
        };

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => render(console, &chunk),
                Err(e) => {
                    // Terminal for this turn only; the loop continues.
                    tracing::error!(error = %e, "stream ended with error");
                    console.print(&format!("error: {e}"));
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Render a wire payload as one line of compact JSON (absent fields
/// omitted).
fn render(console: &mut dyn Console, payload: &impl Serialize) {
    match serde_json::to_string(payload) {
        Ok(json) => console.print(&json),
        Err(e) => tracing::error!(error = %e, "failed to render payload"),
    }
}

/// Whether a chat-mode input line ends the loop.
fn is_exit_command(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit")
}

/// Whether a continuation answer means "keep draining".
fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
