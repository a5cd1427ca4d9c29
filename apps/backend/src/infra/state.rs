use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    profile: DbProfile,
    kind: DbKind,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            profile: DbProfile::Prod,
            kind: DbKind::Postgres,
        }
    }

    pub fn with_profile(mut self, profile: DbProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.kind = kind;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // single entrypoint: build + migrate
        let conn = bootstrap_db(self.profile, self.kind).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
