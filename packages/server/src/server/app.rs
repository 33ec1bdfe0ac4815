//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    bulk_extend_handler, expire_listings_handler, expire_subscriptions_handler,
    extend_listing_handler, health_handler, owner_expiring_listings_handler,
    user_subscription_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    /// Bearer shared secret guarding the cron triggers; `None` leaves them
    /// open (local development).
    pub cron_secret: Option<String>,
    pub sweep_notice_days: i32,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, cron_secret: Option<String>, sweep_notice_days: i32) -> Router {
    let app_state = AppState {
        db_pool: pool,
        cron_secret,
        sweep_notice_days,
    };

    // CORS configuration - the web frontend runs as a separate service
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting for user-initiated routes: 10/sec with bursts of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers()
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    // User-initiated routes (rate limited)
    let user_routes = Router::new()
        .route("/listings/extend", post(bulk_extend_handler))
        .route("/listings/:id/extend", post(extend_listing_handler))
        .route(
            "/owners/:owner_id/expiring-listings",
            get(owner_expiring_listings_handler),
        )
        .route("/users/:user_id/subscription", get(user_subscription_handler))
        .layer(rate_limit_layer);

    // Scheduled trigger routes (bearer-guarded instead of rate limited)
    let cron_routes = Router::new()
        .route(
            "/cron/expire-listings",
            get(expire_listings_handler).post(expire_listings_handler),
        )
        .route(
            "/cron/expire-subscriptions",
            get(expire_subscriptions_handler).post(expire_subscriptions_handler),
        );

    Router::new()
        .merge(user_routes)
        .merge(cron_routes)
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
