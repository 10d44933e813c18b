//! # Session API
//! 
//! Cookie session handlers, cookie and CORS policies, responses, and the router.

pub mod cookie;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
