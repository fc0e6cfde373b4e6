//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use eordb_domain::{Class, ClassId, ItemId, MapId, NpcId, QuestId, SpellId};
use eordb_shared::{EntityRef, ItemListEntry, ListPage, ListQuery, RefreshReport, SpeedSample};

use crate::app::App;
use crate::infrastructure::ports::StoreError;
use crate::use_cases::{
    ItemDetails, ListError, MapDetails, NpcDetails, PreviewError, QuestDetails, RefreshError,
    ResolveError, SpellDetails,
};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/items", get(list_items))
        .route("/api/items/{id}", get(get_item))
        .route("/api/npcs", get(list_npcs))
        .route("/api/npcs/{id}", get(get_npc))
        .route("/api/maps", get(list_maps))
        .route("/api/maps/{id}", get(get_map))
        .route("/api/maps/{id}/preview", get(map_preview))
        .route("/api/maps/{id}/find", get(find_on_map))
        .route("/api/quests", get(list_quests))
        .route("/api/quests/{id}", get(get_quest))
        .route("/api/classes", get(list_classes))
        .route("/api/classes/{id}", get(get_class))
        .route("/api/spells", get(list_spells))
        .route("/api/spells/{id}", get(get_spell))
        .route("/api/shops", get(list_shops))
        .route("/api/speeds", get(list_speeds))
        .route("/api/refresh", get(refresh).post(refresh))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Items, NPCs, maps, quests
// =============================================================================

async fn list_items(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage<ItemListEntry>>, ApiError> {
    Ok(Json(app.use_cases.listing.items(&query).await?))
}

async fn get_item(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<ItemDetails>, ApiError> {
    let item = app
        .use_cases
        .items
        .execute(ItemId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(item))
}

async fn list_npcs(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage<EntityRef>>, ApiError> {
    Ok(Json(app.use_cases.listing.npcs(&query).await?))
}

async fn get_npc(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<NpcDetails>, ApiError> {
    let npc = app
        .use_cases
        .npcs
        .execute(NpcId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(npc))
}

async fn list_maps(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage<EntityRef>>, ApiError> {
    Ok(Json(app.use_cases.listing.maps(&query).await?))
}

async fn get_map(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<MapDetails>, ApiError> {
    let map = app
        .use_cases
        .maps
        .execute(MapId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(map))
}

async fn map_preview(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Response, ApiError> {
    let png = app.use_cases.preview.render(MapId::new(id)).await?;
    Ok(png_response(png))
}

/// Query of the locator preview. Kept as strings so that bad input is a
/// 400 with a message rather than an extractor rejection.
#[derive(Debug, Deserialize)]
struct FindQuery {
    x: Option<String>,
    y: Option<String>,
}

async fn find_on_map(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
    Query(query): Query<FindQuery>,
) -> Result<Response, ApiError> {
    let x = coordinate("x", query.x.as_deref())?;
    let y = coordinate("y", query.y.as_deref())?;
    let png = app
        .use_cases
        .preview
        .render_with_arrow(MapId::new(id), x, y)
        .await?;
    Ok(png_response(png))
}

fn coordinate(name: &str, raw: Option<&str>) -> Result<i32, ApiError> {
    raw.and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} must be an integer")))
}

fn png_response(png: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "image/png")], png).into_response()
}

async fn list_quests(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage<EntityRef>>, ApiError> {
    Ok(Json(app.use_cases.listing.quests(&query).await?))
}

async fn get_quest(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<QuestDetails>, ApiError> {
    let quest = app
        .use_cases
        .quests
        .execute(QuestId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(quest))
}

// =============================================================================
// Catalog
// =============================================================================

async fn list_classes(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage<EntityRef>>, ApiError> {
    Ok(Json(app.use_cases.listing.classes(&query).await?))
}

async fn get_class(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<Class>, ApiError> {
    let class = app
        .use_cases
        .catalog
        .class(ClassId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(class))
}

async fn list_spells(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage<EntityRef>>, ApiError> {
    Ok(Json(app.use_cases.listing.spells(&query).await?))
}

async fn get_spell(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<SpellDetails>, ApiError> {
    let spell = app
        .use_cases
        .catalog
        .spell(SpellId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(spell))
}

async fn list_shops(State(app): State<Arc<App>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(app.use_cases.catalog.shops().await?))
}

async fn list_speeds(State(app): State<Arc<App>>) -> Result<Json<Vec<SpeedSample>>, ApiError> {
    Ok(Json(app.use_cases.catalog.speeds().await?))
}

// =============================================================================
// Refresh
// =============================================================================

#[derive(Debug, Deserialize)]
struct RefreshQuery {
    key: Option<String>,
}

async fn refresh(
    State(app): State<Arc<App>>,
    Query(query): Query<RefreshQuery>,
) -> Result<Json<RefreshReport>, ApiError> {
    let report = app.use_cases.refresh.execute(query.key.as_deref()).await?;
    Ok(Json(report))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Forbidden,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Denied").into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ResolveError> for ApiError {
    fn from(e: ResolveError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ListError> for ApiError {
    fn from(e: ListError) -> Self {
        match e {
            ListError::InvalidPage(_) | ListError::InvalidType(_) => {
                ApiError::BadRequest(e.to_string())
            }
            ListError::Store(e) => e.into(),
        }
    }
}

impl From<PreviewError> for ApiError {
    fn from(e: PreviewError) -> Self {
        match e {
            PreviewError::MapNotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<RefreshError> for ApiError {
    fn from(e: RefreshError) -> Self {
        match e {
            RefreshError::Denied => ApiError::Forbidden,
            other => ApiError::Internal(other.to_string()),
        }
    }
}
