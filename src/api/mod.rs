pub mod error;
pub mod handlers;
pub mod routes;
pub mod user_agent;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::create_router;
