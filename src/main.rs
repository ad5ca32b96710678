use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use secrecy::Secret;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tapzilla::adapters::ai::{OpenAIConfig, OpenAIProvider};
use tapzilla::adapters::auth::{Argon2PasswordHasher, JwtConfig, JwtTokenService};
use tapzilla::adapters::http::{api_router, AppState};
use tapzilla::adapters::notification::{LoggingNotifier, ResendConfig, ResendNotifier};
use tapzilla::adapters::postgres::{
    PostgresAdminReader, PostgresCompanyRepository, PostgresConversationRepository,
    PostgresLeadRepository, PostgresQrCodeRepository, PostgresUserRepository,
};
use tapzilla::application::handlers::ChatSettings;
use tapzilla::config::{AppConfig, ServerConfig};
use tapzilla::ports::Notifier;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(environment = ?config.server.environment, "Starting Tapzilla");

    let pool = config.database.pool_options().connect(&config.database.url).await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    let state = build_state(&config, pool)?;
    let app = api_router(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

fn build_state(config: &AppConfig, pool: PgPool) -> Result<AppState, BoxError> {
    let api_key = config.ai.api_key().unwrap_or_default();
    let ai = OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;

    let notifier: Arc<dyn Notifier> = match config.email.api_key() {
        Some(key) => Arc::new(ResendNotifier::new(ResendConfig::new(key, config.email.from_header()))?),
        None => {
            tracing::warn!("No Resend API key configured; emails will only be logged");
            Arc::new(LoggingNotifier::new())
        }
    };

    let jwt = Arc::new(JwtTokenService::new(JwtConfig {
        secret: Secret::new(config.auth.jwt_secret.clone()),
        issuer: config.auth.issuer.clone(),
        audience: config.auth.audience.clone(),
        session_ttl_secs: config.auth.session_ttl_secs,
        reset_ttl_secs: config.auth.reset_ttl_secs,
    }));

    Ok(AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        companies: Arc::new(PostgresCompanyRepository::new(pool.clone())),
        qr_codes: Arc::new(PostgresQrCodeRepository::new(pool.clone())),
        conversations: Arc::new(PostgresConversationRepository::new(pool.clone())),
        leads: Arc::new(PostgresLeadRepository::new(pool.clone())),
        admin_reader: Arc::new(PostgresAdminReader::new(pool)),
        ai: Arc::new(ai),
        notifier,
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: jwt.clone(),
        sessions: jwt,
        chat: ChatSettings {
            max_tokens: config.ai.max_tokens,
            temperature: config.ai.temperature,
            public_url: config.server.public_url().to_string(),
        },
    })
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
