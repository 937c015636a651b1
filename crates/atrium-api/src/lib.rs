pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
