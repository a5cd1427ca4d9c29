mod common;

use std::sync::Arc;

use actix_web::{test, HttpMessage};
use backend::db::txn::{with_txn, SharedTxn};
use backend::repos::items::{self, NewItem};
use backend::test_support::test_state;
use backend::AppError;
use sea_orm::TransactionTrait;

#[actix_web::test]
async fn test_with_txn_commits_on_ok() {
    let state = test_state().await;

    let created = with_txn(None, &state, move |txn| {
        Box::pin(async move {
            items::create(
                txn,
                NewItem {
                    name: "Durable".to_string(),
                    description: None,
                    price: 3.0,
                },
            )
            .await
            .map_err(AppError::from)
        })
    })
    .await
    .expect("create item");

    // A second transaction sees the committed row
    let id = created.id;
    let found = with_txn(None, &state, move |txn| {
        Box::pin(async move { items::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await
    .expect("find item");

    assert_eq!(found.name, "Durable");
}

#[actix_web::test]
async fn test_with_txn_prefers_injected_shared_txn() {
    let state = test_state().await;

    let txn = state.db.begin().await.expect("begin txn");
    let shared = SharedTxn(Arc::new(txn));

    let req = test::TestRequest::default().to_http_request();
    req.extensions_mut().insert(shared.clone());

    let created = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move {
            items::create(
                txn,
                NewItem {
                    name: "Scoped".to_string(),
                    description: None,
                    price: 1.0,
                },
            )
            .await
            .map_err(AppError::from)
        })
    })
    .await
    .expect("create item in shared txn");

    // The same shared transaction sees the uncommitted row
    let id = created.id;
    let found = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { items::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await
    .expect("find item in shared txn");
    assert_eq!(found.name, "Scoped");

    // Roll the shared transaction back; the row never lands
    req.extensions_mut().remove::<SharedTxn>();
    drop(req);
    let txn = Arc::try_unwrap(shared.0).expect("no other txn handles");
    txn.rollback().await.expect("rollback shared txn");

    let err = with_txn(None, &state, move |txn| {
        Box::pin(async move { items::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await
    .expect_err("row should have been rolled back");
    assert_eq!(err.status().as_u16(), 404);
}
