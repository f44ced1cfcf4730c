pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update_quantity;

pub use create::create;
pub use delete::delete_product;
pub use get::get_product;
pub use list::list;
pub use update_quantity::update_quantity;
