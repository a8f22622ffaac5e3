pub mod elevation;
pub mod health;

pub use elevation::elevation_handler;
pub use health::health_handler;
