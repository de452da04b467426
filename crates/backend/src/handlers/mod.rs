pub mod instances;
pub mod jobs;
pub mod logs;
pub mod plugins;
pub mod relay;
