pub mod analyze;
pub mod common;
pub mod enhance;
pub mod health;
pub mod status;
pub mod synthetic;

pub use analyze::post_analyze;
pub use enhance::post_enhance;
pub use health::health;
pub use status::get_ai_status;
pub use synthetic::post_synthetic_data;
