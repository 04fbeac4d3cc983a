pub mod adapter_config;
pub mod source;

pub use adapter_config::AdapterConfig;
pub use source::{ConfigSource, FileConfigSource};
