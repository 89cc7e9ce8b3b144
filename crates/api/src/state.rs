/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tagnotes_db::DbPool,
}
