//! Repository layer for catalog items.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;

use crate::adapters::items_sea as adapter;
use crate::entities::items;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Partial update; `description` distinguishes "not supplied" (outer None)
/// from "supplied as null" (inner None).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

fn item_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Item, format!("Item {id} not found"))
}

pub async fn list(txn: &DatabaseTransaction) -> Result<Vec<Item>, DomainError> {
    let models = adapter::find_all(txn).await.map_err(map_db_err)?;
    Ok(models.into_iter().map(Item::from).collect())
}

pub async fn find_by_id(txn: &DatabaseTransaction, id: i64) -> Result<Item, DomainError> {
    let model = adapter::find_by_id(txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Item::from(model))
}

pub async fn create(txn: &DatabaseTransaction, new_item: NewItem) -> Result<Item, DomainError> {
    let model = adapter::insert(txn, new_item.name, new_item.description, new_item.price)
        .await
        .map_err(map_db_err)?;
    Ok(Item::from(model))
}

pub async fn update(
    txn: &DatabaseTransaction,
    id: i64,
    update: UpdateItem,
) -> Result<Item, DomainError> {
    let existing = adapter::find_by_id(txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| item_not_found(id))?;

    let model = adapter::update(txn, existing, update.name, update.description, update.price)
        .await
        .map_err(map_db_err)?;
    Ok(Item::from(model))
}

pub async fn delete(txn: &DatabaseTransaction, id: i64) -> Result<(), DomainError> {
    let rows_affected = adapter::delete_by_id(txn, id).await.map_err(map_db_err)?;
    if rows_affected == 0 {
        return Err(item_not_found(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_item_is_empty() {
        assert!(UpdateItem::default().is_empty());

        let name_only = UpdateItem {
            name: Some("Widget".to_string()),
            ..Default::default()
        };
        assert!(!name_only.is_empty());

        // An explicit null description still counts as a supplied field
        let null_description = UpdateItem {
            description: Some(None),
            ..Default::default()
        };
        assert!(!null_description.is_empty());
    }

    #[test]
    fn test_model_to_item_conversion() {
        let model = items::Model {
            id: 7,
            name: "Widget".to_string(),
            description: None,
            price: 0.0,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let item = Item::from(model);
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description, None);
        assert_eq!(item.price, 0.0);
    }
}
