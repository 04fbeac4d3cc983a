// src/config/adapter_config.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// 默认的 Bid Glass 配置
static DEFAULT_CONFIG: Lazy<AdapterConfig> = Lazy::new(|| AdapterConfig {
    bidder_code: "bidglass".to_string(),
    aliases: vec!["bg".to_string()],
    endpoint: "https://bid.glass/ad/hb.php".to_string(),
    integration_tag: format!("{}_{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    content_type: "text/plain".to_string(),
    currency: "USD".to_string(),
    media_type: "banner".to_string(),
    net_revenue: true,
    ttl: 10,
});

/// **交易所相关的固定参数**
///
/// 所有 Bid Glass 专属的常量（接入地址、币种、ttl 等）都集中在这里，
/// 请求构造与响应解析只读取该结构体。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AdapterConfig {
    pub bidder_code: String,     // 适配器代码
    pub aliases: Vec<String>,    // 别名
    pub endpoint: String,        // 交易所接收地址
    pub integration_tag: String, // 作为 `src` 查询参数上报
    pub content_type: String,
    pub currency: String,
    pub media_type: String,
    pub net_revenue: bool,
    pub ttl: u32,                // 秒
}

impl Default for AdapterConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl AdapterConfig {
    /// 读取 JSON 配置文件，缺省字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 完整的请求地址：`endpoint?src=<integration_tag>`
    pub fn request_url(&self) -> String {
        format!("{}?src={}", self.endpoint, urlencoding::encode(&self.integration_tag))
    }
}
