pub mod core_response;
pub mod instances;
pub mod plugins;
pub mod proxy;
