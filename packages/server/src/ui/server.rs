//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{
    HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase,
    RegisterParticipantUseCase,
};

use super::{
    handler::{
        get_messages, get_participants, health_check, heartbeat, post_message,
        register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Group chat HTTP server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     register_participant_usecase,
///     list_participants_usecase,
///     post_message_usecase,
///     list_messages_usecase,
///     heartbeat_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 5000).await?;
/// ```
pub struct Server {
    /// RegisterParticipantUseCase（参加者登録のユースケース）
    register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧取得のユースケース）
    list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    post_message_usecase: Arc<PostMessageUseCase>,
    /// ListMessagesUseCase（メッセージ一覧取得のユースケース）
    list_messages_usecase: Arc<ListMessagesUseCase>,
    /// HeartbeatUseCase（生存通知のユースケース）
    heartbeat_usecase: Arc<HeartbeatUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        register_participant_usecase: Arc<RegisterParticipantUseCase>,
        list_participants_usecase: Arc<ListParticipantsUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
        list_messages_usecase: Arc<ListMessagesUseCase>,
        heartbeat_usecase: Arc<HeartbeatUseCase>,
    ) -> Self {
        Self {
            register_participant_usecase,
            list_participants_usecase,
            post_message_usecase,
            list_messages_usecase,
            heartbeat_usecase,
        }
    }

    /// Run the chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 5000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(
        self,
        host: String,
        port: u16,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app_state = Arc::new(AppState {
            register_participant_usecase: self.register_participant_usecase,
            list_participants_usecase: self.list_participants_usecase,
            post_message_usecase: self.post_message_usecase,
            list_messages_usecase: self.list_messages_usecase,
            heartbeat_usecase: self.heartbeat_usecase,
        });

        // Define handlers
        let app = Router::new()
            .route(
                "/participants",
                post(register_participant).get(get_participants),
            )
            .route("/messages", post(post_message).get(get_messages))
            .route("/status", post(heartbeat))
            .route("/health", get(health_check))
            // フロントエンドは別オリジンから叩くため CORS は全開にする
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
