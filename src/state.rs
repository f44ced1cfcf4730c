use std::sync::Arc;

use crate::database::{ProductRepository, UserRepository};

/// Shared application state: repository trait objects so the HTTP layer is
/// independent of the backing store (Postgres in production, in-memory in the
/// test harness).
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
}
