pub mod product;
pub mod user;

pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
