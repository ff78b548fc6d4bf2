use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use parley::application::ports::{ChatRepository, ConversationRepository};
use parley::application::services::{ChatService, GenerationService, ProviderRegistry};
use parley::domain::AiProvider;
use parley::infrastructure::llm::{GeminiClient, OpenRouterClient};
use parley::infrastructure::observability::{TracingConfig, init_tracing};
use parley::infrastructure::persistence::{
    PgChatRepository, PgConversationRepository, create_pool, run_migrations,
};
use parley::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let pool = create_pool(
        &settings.database.url,
        settings.database.max_connections,
    )
    .await
    .map_err(|e| anyhow::anyhow!("database connection failed: {e}"))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("migrations failed: {e}"))?;

    let chats: Arc<dyn ChatRepository> = Arc::new(PgChatRepository::new(pool.clone()));
    let conversations: Arc<dyn ConversationRepository> =
        Arc::new(PgConversationRepository::new(pool));

    // Shared HTTP client; adapter calls are bounded by a single timeout.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.providers.request_timeout_secs))
        .build()?;

    let providers = ProviderRegistry::new(
        Arc::new(GeminiClient::new(
            http.clone(),
            settings.providers.gemini.api_key.clone(),
            settings.providers.gemini.base_url.clone(),
            settings.providers.gemini.model.clone(),
        )),
        Arc::new(OpenRouterClient::new(
            http.clone(),
            AiProvider::OpenAi,
            settings.providers.openai.api_key.clone(),
            settings.providers.openai.base_url.clone(),
            settings.providers.openai.model.clone(),
        )),
        Arc::new(OpenRouterClient::new(
            http,
            AiProvider::DeepSeek,
            settings.providers.deepseek.api_key.clone(),
            settings.providers.deepseek.base_url.clone(),
            settings.providers.deepseek.model.clone(),
        )),
    );

    let state = AppState {
        chat_service: Arc::new(ChatService::new(chats.clone(), conversations.clone())),
        generation_service: Arc::new(GenerationService::new(providers, chats, conversations)),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
