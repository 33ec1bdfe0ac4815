//! Listing extension and owner dashboard routes.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use futures::future::join_all;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::listings::actions::{expiring_listings_for_owner, extend_listing};
use crate::domains::listings::models::{ExpiringListing, VisibilityWindow};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct ExtendRequest {
    pub window: VisibilityWindow,
    #[serde(default)]
    pub amount: Decimal,
}

#[derive(Serialize)]
pub struct ExtendResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Extend a single listing's visibility window.
pub async fn extend_listing_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExtendRequest>,
) -> (StatusCode, Json<ExtendResponse>) {
    if extend_listing(id, request.window, request.amount, &state.db_pool).await {
        (
            StatusCode::OK,
            Json(ExtendResponse {
                success: true,
                error: None,
            }),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ExtendResponse {
                success: false,
                error: Some("Extension failed, please try again".to_string()),
            }),
        )
    }
}

#[derive(Deserialize)]
pub struct BulkExtendRequest {
    pub listing_ids: Vec<Uuid>,
    pub window: VisibilityWindow,
    #[serde(default)]
    pub amount: Decimal,
}

#[derive(Serialize)]
pub struct BulkExtendResponse {
    pub requested: usize,
    pub extended: usize,
    pub failed: Vec<Uuid>,
}

/// Extend a batch of listings.
///
/// Every extension settles independently; failures are reported per id
/// rather than aborting the batch.
pub async fn bulk_extend_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<BulkExtendRequest>,
) -> Json<BulkExtendResponse> {
    let results = join_all(request.listing_ids.iter().map(|&id| {
        let pool = state.db_pool.clone();
        let window = request.window;
        let amount = request.amount;
        async move { (id, extend_listing(id, window, amount, &pool).await) }
    }))
    .await;

    let failed: Vec<Uuid> = results
        .iter()
        .filter(|(_, extended)| !extended)
        .map(|(id, _)| *id)
        .collect();

    Json(BulkExtendResponse {
        requested: results.len(),
        extended: results.len() - failed.len(),
        failed,
    })
}

#[derive(Deserialize)]
pub struct ExpiringQuery {
    pub days: Option<i32>,
}

/// Listings owned by `owner_id` that end soon, soonest first.
pub async fn owner_expiring_listings_handler(
    Extension(state): Extension<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<ExpiringQuery>,
) -> Json<Vec<ExpiringListing>> {
    let days = query.days.unwrap_or(state.sweep_notice_days);

    Json(expiring_listings_for_owner(owner_id, days, &state.db_pool).await)
}
