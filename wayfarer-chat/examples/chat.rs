//! Interactive-ish chat against a deployed assistant proxy.
//!
//! Run with:
//!   SUPABASE_URL=... SUPABASE_PUBLISHABLE_KEY=... RUST_LOG=wayfarer=debug \
//!   cargo run --example chat -p wayfarer-chat -- "Plan a 7-day trip to Japan"

use std::io::Write;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use wayfarer_chat::{ChatClient, ChatSession};
use wayfarer_store_memory::MemoryChatStore;
use wayfarer_types::UserId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What are the best destinations for a first-time traveler?".into());

    let client = ChatClient::from_env()?;
    let store = Arc::new(MemoryChatStore::new());
    let mut session = ChatSession::new(client, store, UserId::new("demo-user"), None);

    let result = session
        .send(&prompt, |fragment, _| {
            print!("{fragment}");
            let _ = std::io::stdout().flush();
        })
        .await;
    println!();

    if let Err(wayfarer_chat::SessionError::Api(err)) = &result {
        eprintln!("{}", err.user_message());
    }
    result?;
    Ok(())
}
