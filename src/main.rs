//! Tabi server entry point.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tabi::adapters::ai::{OpenAIConfig, OpenAIProvider};
use tabi::adapters::http::{app_router, AppState};
use tabi::adapters::memory::InMemoryWellnessStore;
use tabi::adapters::postgres::{PostgresGoalRepository, PostgresUserContextReader};
use tabi::adapters::speech::{OpenAISpeechConfig, OpenAISpeechService};
use tabi::adapters::tools::WellnessToolExecutor;
use tabi::application::handlers::{
    ChatModels, FetchUserContextHandler, GenerateReplyHandler, GoalExtractor,
    ModelGoalTitleFallback, ModelMoodFallback, MoodExtractor, OrchestratorConfig,
    RouteMessageHandler, SummarizeChatHandler,
};
use tabi::config::{AiConfig, AppConfig, DatabaseConfig, VoiceConfig};
use tabi::domain::conversation::tools::ToolRegistry;
use tabi::ports::{AIProvider, GoalRepository, SpeechService, UserContextReader};

const DEFAULT_LOG_FILTER: &str = "tabi=info,tower_http=info";

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

/// Chat model for `model` on the OpenAI endpoint.
fn openai_model(ai: &AiConfig, key: &str, model: &str) -> Result<Arc<dyn AIProvider>, Box<dyn Error>> {
    let config = OpenAIConfig::new(key)
        .with_model(model)
        .with_base_url(ai.openai_base_url.clone())
        .with_timeout(ai.timeout());
    Ok(Arc::new(OpenAIProvider::new(config)?))
}

struct Providers {
    models: ChatModels,
    router: Arc<dyn AIProvider>,
}

fn build_providers(ai: &AiConfig) -> Result<Providers, Box<dyn Error>> {
    let openai_key = ai.openai_api_key.clone().unwrap_or_default();
    let standard = openai_model(ai, &openai_key, &ai.standard_model)?;
    let lightweight = openai_model(ai, &openai_key, &ai.lightweight_model)?;
    let router = openai_model(ai, &openai_key, &ai.router_model)?;

    let cost_optimized: Arc<dyn AIProvider> = match ai.deepseek_api_key.as_deref() {
        Some(key) if ai.has_deepseek() => {
            let config = OpenAIConfig::new(key)
                .with_provider_name("deepseek")
                .with_model(ai.cost_optimized_model.clone())
                .with_base_url(ai.deepseek_base_url.clone())
                .with_timeout(ai.timeout());
            Arc::new(OpenAIProvider::new(config)?)
        }
        _ => {
            warn!("no DeepSeek key configured; cost-optimized personas use the standard model");
            standard.clone()
        }
    };

    Ok(Providers {
        models: ChatModels {
            standard,
            cost_optimized,
            lightweight,
        },
        router,
    })
}

async fn build_stores(
    database: &DatabaseConfig,
) -> Result<(Arc<dyn GoalRepository>, Arc<dyn UserContextReader>), Box<dyn Error>> {
    match database.url() {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(database.max_connections)
                .acquire_timeout(database.acquire_timeout())
                .connect(url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("connected to PostgreSQL, migrations applied");
            Ok((
                Arc::new(PostgresGoalRepository::new(pool.clone())),
                Arc::new(PostgresUserContextReader::new(pool)),
            ))
        }
        None => {
            warn!("no database configured; using in-memory store");
            let store = InMemoryWellnessStore::seeded();
            Ok((Arc::new(store.clone()), Arc::new(store)))
        }
    }
}

fn build_speech(
    voice: &VoiceConfig,
    ai: &AiConfig,
) -> Result<Option<Arc<dyn SpeechService>>, Box<dyn Error>> {
    if !voice.enabled {
        info!("voice disabled");
        return Ok(None);
    }
    let config = OpenAISpeechConfig::new(ai.openai_api_key.clone().unwrap_or_default())
        .with_base_url(ai.openai_base_url.clone())
        .with_models(voice.stt_model.clone(), voice.tts_model.clone())
        .with_default_voice(voice.default_voice.clone())
        .with_timeout(ai.timeout());
    Ok(Some(Arc::new(OpenAISpeechService::new(config)?)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(config.is_production());
    config.validate()?;

    let personas = config.personas.load_table()?;
    let providers = build_providers(&config.ai)?;
    let (goals, user_context) = build_stores(&config.database).await?;
    let speech = build_speech(&config.voice, &config.ai)?;

    let lightweight = providers.models.lightweight.clone();
    let standard = providers.models.standard.clone();
    let orchestrator = OrchestratorConfig {
        personas,
        models: providers.models,
        tools: ToolRegistry::wellness(),
    };
    let reply = GenerateReplyHandler::new(
        orchestrator,
        RouteMessageHandler::new(providers.router),
        GoalExtractor::new(Arc::new(ModelGoalTitleFallback::new(lightweight.clone()))),
        Arc::new(WellnessToolExecutor::new(goals)),
    );

    let state = AppState {
        reply: Arc::new(reply),
        summarizer: Arc::new(SummarizeChatHandler::new(standard)),
        user_context: Arc::new(FetchUserContextHandler::new(user_context)),
        mood: Arc::new(MoodExtractor::new(Arc::new(ModelMoodFallback::new(lightweight)))),
        speech,
    };

    let app = app_router(state).layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "tabi listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}
