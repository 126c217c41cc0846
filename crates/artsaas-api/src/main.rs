use std::env;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("ARTSAAS_BUCKET").unwrap_or_else(|_| "artsaas".to_string());
    let jwt_secret = env::var("ARTSAAS_JWT_SECRET")
        .map_err(|_| eyre::eyre!("ARTSAAS_JWT_SECRET must be set"))?;
    let stripe_secret_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8090);

    let s3 = artsaas_storage::client::build_client().await;
    let http = reqwest::Client::new();

    let state = AppState {
        s3,
        bucket,
        http,
        jwt_secret,
        stripe_secret_key,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/assessments", get(routes::assessments::list_assessments))
        .route("/assessments", post(routes::assessments::create_assessment))
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment),
        )
        .route(
            "/assessments/{id}/review",
            post(routes::assessments::review_assessment),
        )
        .route("/artists", get(routes::artists::list_artists))
        .route("/artists", post(routes::artists::create_artist))
        .route("/artists/{id}", get(routes::artists::get_artist))
        .route("/artists/{id}", put(routes::artists::update_artist))
        .route("/artworks", get(routes::artworks::list_artworks))
        .route("/artworks", post(routes::artworks::create_artwork))
        .route("/artworks/{id}", get(routes::artworks::get_artwork))
        .route("/artworks/{id}", put(routes::artworks::update_artwork))
        .route("/artworks/{id}", delete(routes::artworks::delete_artwork))
        .route(
            "/artworks/{id}/image-upload",
            post(routes::artworks::create_image_upload),
        )
        .route(
            "/mentorship/requests",
            get(routes::mentorship::list_requests),
        )
        .route(
            "/mentorship/requests",
            post(routes::mentorship::create_request),
        )
        .route(
            "/mentorship/requests/{id}/respond",
            post(routes::mentorship::respond_to_request),
        )
        .route(
            "/mentorship/sessions",
            get(routes::mentorship::list_sessions),
        )
        .route(
            "/mentorship/sessions",
            post(routes::mentorship::create_session),
        )
        .route(
            "/mentorship/sessions/{id}",
            put(routes::mentorship::update_session),
        )
        .route(
            "/donations/intent",
            post(routes::donations::create_donation_intent),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth — public catalog data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Stripe callback (authenticated by Stripe, not a session)
        .route(
            "/donations/webhook",
            post(routes::donations::stripe_webhook),
        )
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "artsaas api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
