pub mod domain;
pub mod ports;
pub mod services;
pub mod ingredient_use_cases;
