pub mod fallback;
pub mod health;
pub mod info;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use info::{info_handler, links_handler};
