pub mod config;
pub mod error;
pub mod models;
pub mod pagination;

pub use config::Config;
pub use error::AppError;
pub use pagination::{PageQuery, Paginated, Pagination};
