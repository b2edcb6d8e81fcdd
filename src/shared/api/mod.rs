mod fallback;
mod json_config;
mod response;

pub use fallback::{method_not_allowed, register_method_fallbacks};
pub use json_config::{custom_json_config, custom_query_config};
pub use response::{ApiError, ApiResponse};
