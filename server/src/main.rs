mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::auth::{AuthEvent, AuthService};
use services::identity::SupabaseProvider;
use services::places::PlaceCatalog;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let places = match &config.places_file {
        Some(path) => PlaceCatalog::load(path).expect("places catalog load failed"),
        None => PlaceCatalog::bundled().expect("bundled places catalog invalid"),
    };
    if places.is_empty() {
        tracing::warn!(file = ?config.places_file, "places catalog is empty");
    } else {
        tracing::info!(places = places.len(), file = ?config.places_file, "places catalog loaded");
    }

    // Identity provider is optional: auth routes answer 503 without it.
    let auth = match &config.supabase {
        Some(supabase) => {
            let provider = SupabaseProvider::new(supabase).expect("identity client build failed");
            tracing::info!(url = %supabase.url, "identity provider configured");
            Some(AuthService::new(Arc::new(provider)))
        }
        None => {
            tracing::warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set; auth disabled");
            None
        }
    };

    if let Some(auth) = &auth {
        spawn_auth_event_log(auth);
    }

    let state = state::AppState::new(auth, places);
    tracing::info!(auth = state.auth_enabled(), "application state ready");
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tripmap listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Log every auth-state change until the service is dropped.
fn spawn_auth_event_log(auth: &AuthService) {
    let mut events = auth.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(AuthEvent::SignedIn { user_id, email }) => {
                    tracing::info!(%user_id, email = ?email, "auth: signed in");
                }
                Ok(AuthEvent::SignedOut) => tracing::info!("auth: signed out"),
                Ok(AuthEvent::UserUpdated { user_id }) => tracing::info!(%user_id, "auth: user updated"),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "auth event log lagged");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
