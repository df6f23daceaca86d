use crate::db::{DbPool, OrmConn};

/// Shared handles: the sqlx pool serves the raw listing queries, the SeaORM
/// connection serves the entity-mapped operations.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}
