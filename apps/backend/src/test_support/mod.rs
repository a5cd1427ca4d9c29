//! Shared helpers for tests (two-stage harness: state, then service).

pub mod app_builder;
pub mod logging;

pub use app_builder::{create_test_app_builder, TestAppBuilder};

use crate::config::db::{DbKind, DbProfile};
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

/// Build an AppState backed by a freshly migrated in-memory database.
pub async fn test_state() -> AppState {
    build_state()
        .with_profile(DbProfile::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build test app state")
}
