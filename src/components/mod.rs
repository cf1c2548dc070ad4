pub mod error_banner;

pub use error_banner::ErrorBanner;
