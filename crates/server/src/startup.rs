use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth::AuthSettings, auth::ServerState};
use service::auth::domain::ADMIN_ROLE;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Token secrets come from the environment; TTLs from config.toml when
/// present.
pub fn load_auth_settings() -> AuthSettings {
    let (access_ttl_secs, refresh_ttl_secs) = match configs::load_default() {
        Ok(cfg) => (cfg.auth.access_token_ttl_secs, cfg.auth.refresh_token_ttl_secs),
        Err(_) => (1800, 18000),
    };
    AuthSettings {
        jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string()),
        refresh_secret: env::var("REFRESH_JWT_SECRET")
            .unwrap_or_else(|_| "dev-refresh-secret-change-me".to_string()),
        access_ttl_secs,
        refresh_ttl_secs,
    }
}

/// Ensure a fresh deployment has a loginable admin account. Existing
/// credentials are never overwritten here.
async fn bootstrap_admin(db: &DatabaseConnection, auth: &AuthSettings) -> anyhow::Result<()> {
    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let existing = models::credential::find_by_username(db, &username)
        .await
        .map_err(|e| anyhow::anyhow!("credential lookup failed: {e}"))?;
    if existing.is_some() {
        return Ok(());
    }
    let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "ChangeMe123".to_string());
    let state = ServerState { db: db.clone(), auth: auth.clone() };
    routes::auth::auth_service(&state)
        .register(&username, &password, ADMIN_ROLE)
        .await
        .map_err(|e| anyhow::anyhow!("bootstrap admin failed: {e}"))?;
    info!(%username, "bootstrap admin credential created");
    Ok(())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection + schema
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let auth = load_auth_settings();
    bootstrap_admin(&db, &auth).await?;

    let state = ServerState { db, auth };
    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting census server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
