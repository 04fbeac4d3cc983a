// src/wire/response.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::wire::lenient;

/// 交易所原始响应（HTTP body 已由宿主取回）
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServerResponse {
    pub body: Option<ResponseBody>,
}

impl ServerResponse {
    pub fn new(body: ResponseBody) -> Self {
        Self { body: Some(body) }
    }

    /// 解析原始 HTTP body，无法解析时退化为空响应
    pub fn from_body_bytes(bytes: &mut [u8]) -> Self {
        match simd_json::serde::from_slice::<ResponseBody>(bytes) {
            Ok(body) => Self::new(body),
            Err(e) => {
                warn!(error = %e, "unparseable bid glass response body");
                Self::default()
            }
        }
    }

    pub fn bids(&self) -> &[RawBid] {
        self.body.as_ref().map(|b| b.bid_responses.as_slice()).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, deserialize_with = "per_record_bids")]
    pub bid_responses: Vec<RawBid>,
}

/// 逐条解析出价，单条格式错误只丢弃该条
fn per_record_bids<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Vec<RawBid>, D::Error> {
    let records: Vec<Value> = lenient::nullable(d)?;
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<RawBid>(record) {
            Ok(bid) => Some(bid),
            Err(e) => {
                warn!(index, error = %e, "dropping malformed bid glass record");
                None
            }
        })
        .collect())
}

/// 交易所返回的单条出价，数值字段保持原始文本
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawBid {
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub ad: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub cpm: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub creative_id: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub request_id: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    #[serde(default)]
    pub meta: Option<BidMeta>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidMeta {
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub advertiser_domains: Vec<String>,
}

/// **交给宿主的标准化出价**
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBid {
    pub request_id: String,
    pub cpm: f64,
    pub width: u32,
    pub height: u32,
    pub creative_id: String,
    pub deal_id: Option<String>,
    pub currency: String,
    pub media_type: String,
    pub net_revenue: bool,
    pub ttl: u32,
    pub ad: String,
    pub meta: BidMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_raw_body_bytes() {
        let mut body = br#"{"bidResponses":[{"ad":"<div/>","cpm":"1.5","creativeId":7,"width":"728","height":90,"requestId":"r1"}]}"#.to_vec();
        let response = ServerResponse::from_body_bytes(&mut body);
        let bids = response.bids();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].cpm.as_deref(), Some("1.5"));
        assert_eq!(bids[0].creative_id, "7");
        assert_eq!(bids[0].height.as_deref(), Some("90"));
        assert_eq!(bids[0].meta, None);
    }

    #[test]
    fn malformed_record_is_dropped_alone() {
        let mut body = br#"{"bidResponses":[
            {"ad":"<a/>","cpm":"1","width":"300","height":"250","requestId":"good"},
            {"ad":"<b/>","cpm":"1","width":"300","height":"250","requestId":"bad","meta":"not-an-object"},
            {"ad":null,"cpm":"2","width":"300","height":"250","requestId":"null-ad","meta":{"advertiserDomains":null}}
        ]}"#
        .to_vec();
        let response = ServerResponse::from_body_bytes(&mut body);
        let ids: Vec<&str> = response.bids().iter().map(|b| b.request_id.as_str()).collect();
        assert_eq!(ids, vec!["good", "null-ad"]);
        assert_eq!(response.bids()[1].ad, "");
    }

    #[test]
    fn garbage_body_is_empty() {
        let mut body = b"<html>502</html>".to_vec();
        assert!(ServerResponse::from_body_bytes(&mut body).bids().is_empty());
    }

    #[test]
    fn null_or_missing_bid_responses_are_empty() {
        let mut body = br#"{"bidResponses":null}"#.to_vec();
        assert!(ServerResponse::from_body_bytes(&mut body).bids().is_empty());
        let mut body = br#"{}"#.to_vec();
        assert!(ServerResponse::from_body_bytes(&mut body).bids().is_empty());
        assert!(ServerResponse::default().bids().is_empty());
    }
}
