// src/config/source.rs

use std::path::PathBuf;
use tracing::warn;

use crate::config::adapter_config::AdapterConfig;

/// 配置来源
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> AdapterConfig;
}

/// 从 JSON 文件读取配置，读取或解析失败时回退到默认配置
pub struct FileConfigSource {
    pub path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> AdapterConfig {
        AdapterConfig::from_file(&self.path).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "falling back to default adapter config");
            AdapterConfig::default()
        })
    }
}
