pub mod config;
pub mod core_client;
pub mod error;
pub mod request_log;
pub mod state;

#[cfg(test)]
pub mod test_support;
