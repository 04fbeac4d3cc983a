// src/model/bid_request.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::wire::lenient;

/// 广告尺寸 `[width, height]`
pub type Size = [u32; 2];

/// **宿主传入的单个广告位竞价配置**
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidConfiguration {
    #[serde(default)]
    pub bidder: String,
    pub params: Option<BidParams>,
    pub ad_unit_code: Option<String>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    pub media_types: Option<MediaTypes>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bid_id: String,
    pub bidder_request_id: Option<String>,
    pub auction_id: Option<String>,
    pub transaction_id: Option<String>,
}

impl BidConfiguration {
    /// 优先使用 `sizes`，为空时回退到 `mediaTypes.banner.sizes`
    pub fn effective_sizes(&self) -> Vec<Size> {
        if !self.sizes.is_empty() {
            return self.sizes.clone();
        }
        self.media_types
            .as_ref()
            .and_then(|m| m.banner.as_ref())
            .map(|b| b.sizes.clone())
            .unwrap_or_default()
    }
}

/// Bid Glass 参数：`adUnitId` 必填，其余字段原样透传给交易所
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BidParams {
    #[serde(
        rename = "adUnitId",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ad_unit_id: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MediaTypes {
    pub banner: Option<BannerMediaType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BannerMediaType {
    #[serde(default)]
    pub sizes: Vec<Size>,
}

/// **宿主的竞价上下文（隐私同意信息、页面信息）**
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidderRequest {
    pub gdpr_consent: Option<GdprConsent>,
    pub gpp_consent: Option<GppConsent>,
    pub referer_info: Option<RefererInfo>,
    pub ortb2: Option<Ortb2>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GdprConsent {
    #[serde(default)]
    pub gdpr_applies: bool,
    pub consent_string: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GppConsent {
    pub gpp_string: Option<String>,
    #[serde(default)]
    pub applicable_sections: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RefererInfo {
    pub page: Option<String>,
}

/// first-party 数据，这里只关心 `regs` 中的 GPP 信号
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Ortb2 {
    pub regs: Option<Regs>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Regs {
    pub gpp: Option<String>,
    #[serde(default)]
    pub gpp_sid: Vec<i32>,
}
