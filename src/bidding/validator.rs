// src/bidding/validator.rs

use crate::model::bid_request::BidConfiguration;

/// 校验竞价配置：`params.adUnitId` 必须存在且非空。
/// 不合法的配置由宿主跳过，这里从不报错。
pub fn is_bid_request_valid(bid: &BidConfiguration) -> bool {
    bid.params
        .as_ref()
        .and_then(|p| p.ad_unit_id.as_deref())
        .is_some_and(|id| !id.trim().is_empty())
}
