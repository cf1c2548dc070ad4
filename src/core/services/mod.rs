pub mod api;
pub mod http;
pub mod session;

pub use api::*;
pub use http::*;
pub use session::*;
