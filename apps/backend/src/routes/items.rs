//! Item catalog HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{ItemId, ValidatedJson};
use crate::repos::items::{self, Item, NewItem, UpdateItem};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemDeletedResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    // Option<Option<String>> allows distinguishing:
    // - None = field not provided (don't update)
    // - Some(None) = field provided as null (explicitly unset)
    // - Some(Some(text)) = field provided with value
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<f64>,
}

fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "name must not be blank".to_string(),
        ));
    }
    Ok(())
}

async fn list_items(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let items = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { items::list(txn).await.map_err(AppError::from) })
    })
    .await?;

    let body: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_item(
    req: HttpRequest,
    item_id: ItemId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = item_id.0;
    let item = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { items::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

async fn create_item(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    require_name(&payload.name)?;

    let new_item = NewItem {
        name: payload.name,
        description: payload.description,
        price: payload.price.unwrap_or(0.0),
    };

    let item = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { items::create(txn, new_item).await.map_err(AppError::from) })
    })
    .await?;

    tracing::info!(item_id = item.id, "item.created");

    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

async fn update_item(
    req: HttpRequest,
    item_id: ItemId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let id = item_id.0;
    let payload = body.into_inner();

    if let Some(name) = &payload.name {
        require_name(name)?;
    }

    // Allow request if any field is provided (including description explicitly set to null)
    let update_request = UpdateItem {
        name: payload.name,
        description: payload.description,
        price: payload.price,
    };

    if update_request.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "At least one field must be provided".to_string(),
        ));
    }

    let item = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            items::update(txn, id, update_request)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(item_id = item.id, "item.updated");

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

async fn delete_item(
    req: HttpRequest,
    item_id: ItemId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = item_id.0;
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { items::delete(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    tracing::info!(item_id = id, "item.deleted");

    Ok(HttpResponse::Ok().json(ItemDeletedResponse {
        message: "Item deleted".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/items")
            .route(web::get().to(list_items))
            .route(web::post().to(create_item)),
    );
    cfg.service(
        web::resource("/api/items/{item_id}")
            .route(web::get().to(get_item))
            .route(web::put().to(update_item))
            .route(web::delete().to(delete_item)),
    );
}
