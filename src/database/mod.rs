pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use repository::{Page, ProductRepository, RepositoryError, UserRepository};
