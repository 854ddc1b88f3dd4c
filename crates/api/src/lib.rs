#![forbid(unsafe_code)]

pub mod context;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use context::ApiContext;
pub use error::ApiError;
pub use routes::router;
