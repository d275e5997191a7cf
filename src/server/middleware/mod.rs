//! HTTP middleware

mod helpers;
mod request_id;
mod session;

pub use helpers::extract_bearer;
pub use request_id::{RequestId, RequestIdMiddleware};
pub use session::SessionMiddleware;
