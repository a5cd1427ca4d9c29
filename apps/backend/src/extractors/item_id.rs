use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Item ID extracted from the route path parameter.
///
/// Rejects non-numeric and non-positive ids with 400 before the handler
/// runs; existence is checked by the repository, which answers 404.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ItemId(pub i64);

impl FromRequest for ItemId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract_item_id(req))
    }
}

fn extract_item_id(req: &HttpRequest) -> Result<ItemId, AppError> {
    let raw = req.match_info().get("item_id").ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidItemId,
            "Missing item_id parameter".to_string(),
        )
    })?;

    let item_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidItemId, format!("Invalid item id: {raw}"))
    })?;

    if item_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidItemId,
            format!("Item id must be positive, got: {item_id}"),
        ));
    }

    Ok(ItemId(item_id))
}
