//! Group chat HTTP server with inactivity-based eviction.
//!
//! Registers participants, stores public and private messages, and evicts
//! participants that stop sending heartbeats.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin idobata-server
//! cargo run --bin idobata-server -- --host 0.0.0.0 --port 5000
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use idobata_server::{
    infrastructure::repository::InMemoryChatStore,
    ui::{InactivityReaper, Server},
    usecase::{
        HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase,
        ReapInactiveUseCase, RegisterParticipantUseCase,
    },
};
use idobata_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "idobata-server")]
#[command(about = "Group chat backend with inactivity-based eviction", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "5000")]
    port: u16,

    /// Seconds between reaper sweeps
    #[arg(long, default_value = "15")]
    reap_interval_secs: u64,

    /// Seconds of silence after which a participant counts as inactive
    //
    // Deliberately independent of the sweep period: with the defaults a
    // participant can stay up to interval + threshold seconds past its
    // last heartbeat.
    #[arg(long, default_value = "10")]
    inactivity_threshold_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Store
    // 2. Clock
    // 3. UseCases
    // 4. Reaper
    // 5. Server

    // 1. Create the document store (in-memory database)
    let store = Arc::new(InMemoryChatStore::new());

    // 2. Create the clock
    let clock = Arc::new(SystemClock);

    // 3. Create UseCases
    let register_participant_usecase = Arc::new(RegisterParticipantUseCase::new(
        store.clone(),
        store.clone(),
        clock.clone(),
    ));
    let list_participants_usecase = Arc::new(ListParticipantsUseCase::new(store.clone()));
    let post_message_usecase = Arc::new(PostMessageUseCase::new(
        store.clone(),
        store.clone(),
        clock.clone(),
    ));
    let list_messages_usecase = Arc::new(ListMessagesUseCase::new(store.clone()));
    let heartbeat_usecase = Arc::new(HeartbeatUseCase::new(store.clone(), clock.clone()));
    let reap_inactive_usecase = Arc::new(ReapInactiveUseCase::new(
        store.clone(),
        store.clone(),
        clock.clone(),
        Duration::from_secs(args.inactivity_threshold_secs),
    ));

    // 4. Spawn the reaper (runs for the lifetime of the process)
    let reaper = InactivityReaper::new(
        reap_inactive_usecase,
        Duration::from_secs(args.reap_interval_secs),
    );
    tokio::spawn(reaper.run());

    // 5. Create and run the server
    let server = Server::new(
        register_participant_usecase,
        list_participants_usecase,
        post_message_usecase,
        list_messages_usecase,
        heartbeat_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
