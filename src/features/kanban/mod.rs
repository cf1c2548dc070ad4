pub mod card;
pub mod components;
pub mod drag;
pub mod filters;
pub mod grouping;
pub mod hooks;
pub mod priority;
pub mod services;

pub use components::*;
pub use hooks::*;
