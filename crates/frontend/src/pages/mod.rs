pub mod global_config;
pub mod instances;
