// src/bidding/response_interpreter.rs

use tracing::{debug, warn};

use crate::config::AdapterConfig;
use crate::model::consent::ConsentContext;
use crate::wire::request::OutboundRequest;
use crate::wire::response::{NormalizedBid, RawBid, ServerResponse};

/// 解析交易所响应，按服务端顺序输出标准化出价。
///
/// 同意参数从回传的请求体中恢复，替换到创意地址的占位符上。
/// 价格或尺寸无法解析的出价会被丢弃并记录 warn 日志。
pub fn interpret_response(
    config: &AdapterConfig,
    response: &ServerResponse,
    request: &OutboundRequest,
) -> Vec<NormalizedBid> {
    let raw_bids = response.bids();
    if raw_bids.is_empty() {
        return Vec::new();
    }

    let consent = ConsentContext::from_request_data(&request.data);

    let bids: Vec<NormalizedBid> = raw_bids
        .iter()
        .filter_map(|raw| normalize(config, raw, consent.as_ref()))
        .collect();

    debug!(received = raw_bids.len(), accepted = bids.len(), "interpreted bid glass response");
    bids
}

fn normalize(config: &AdapterConfig, raw: &RawBid, consent: Option<&ConsentContext>) -> Option<NormalizedBid> {
    let (Some(cpm), Some(width), Some(height)) = (
        raw.cpm.as_deref().and_then(parse_cpm),
        raw.width.as_deref().and_then(parse_dimension),
        raw.height.as_deref().and_then(parse_dimension),
    ) else {
        warn!(
            request_id = %raw.request_id,
            cpm = ?raw.cpm,
            width = ?raw.width,
            height = ?raw.height,
            "dropping bid with malformed price or size"
        );
        return None;
    };

    let ad = match consent {
        Some(consent) => consent.apply_to_markup(&raw.ad),
        None => raw.ad.clone(),
    };

    Some(NormalizedBid {
        request_id: raw.request_id.clone(),
        cpm,
        width,
        height,
        creative_id: raw.creative_id.clone(),
        deal_id: raw.deal_id.clone().filter(|d| !d.is_empty()),
        currency: config.currency.clone(),
        media_type: config.media_type.clone(),
        net_revenue: config.net_revenue,
        ttl: config.ttl,
        ad,
        meta: raw.meta.clone().unwrap_or_default(),
    })
}

/// 价格：有限且非负的十进制数
pub(crate) fn parse_cpm(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// 尺寸：整数，带小数时截断
pub(crate) fn parse_dimension(value: &str) -> Option<u32> {
    let value = value.trim();
    value.parse::<u32>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v.trunc() as u32)
    })
}
