//! SeaORM adapter for the items repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::items;

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<items::Model>, sea_orm::DbErr> {
    items::Entity::find()
        .order_by_asc(items::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<items::Model>, sea_orm::DbErr> {
    items::Entity::find_by_id(id).one(conn).await
}

pub async fn insert(
    txn: &DatabaseTransaction,
    name: String,
    description: Option<String>,
    price: f64,
) -> Result<items::Model, sea_orm::DbErr> {
    let active = items::ActiveModel {
        name: Set(name),
        description: Set(description),
        price: Set(price),
        created_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    };
    active.insert(txn).await
}

/// Apply the supplied fields to an existing row. `description` uses the
/// outer Option for "was it supplied", the inner for the stored null.
pub async fn update(
    txn: &DatabaseTransaction,
    existing: items::Model,
    name: Option<String>,
    description: Option<Option<String>>,
    price: Option<f64>,
) -> Result<items::Model, sea_orm::DbErr> {
    let mut active: items::ActiveModel = existing.into();
    if let Some(name) = name {
        active.name = Set(name);
    }
    if let Some(description) = description {
        active.description = Set(description);
    }
    if let Some(price) = price {
        active.price = Set(price);
    }
    active.update(txn).await
}

pub async fn delete_by_id(txn: &DatabaseTransaction, id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = items::Entity::delete_by_id(id).exec(txn).await?;
    Ok(res.rows_affected)
}
