// src/model/consent.rs

use serde::{Deserialize, Serialize};

use crate::model::bid_request::BidderRequest;
use crate::wire::lenient;

/// 交易所在创意 URL 中预留的占位符，由同意参数替换
pub const CONSENT_PLACEHOLDER: &str = "&replaceme";

/// **隐私同意上下文**
///
/// 构造请求时写入请求体，解析响应时再从回传的请求体中取出，
/// 拼接到创意地址上。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentContext {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub gdpr_applies: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub gdpr_consent: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub gpp_string: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub gpp_sid: Option<String>,
}

impl ConsentContext {
    /// 从宿主上下文提取同意信息；GPP 优先取 `gppConsent`，否则取 `ortb2.regs`
    pub fn from_bidder_request(bidder_request: &BidderRequest) -> Self {
        let mut consent = Self::default();

        if let Some(gdpr) = &bidder_request.gdpr_consent {
            consent.gdpr_applies = Some(if gdpr.gdpr_applies { "1" } else { "0" }.to_string());
            consent.gdpr_consent = gdpr.consent_string.clone();
        }

        if let Some(gpp) = &bidder_request.gpp_consent {
            consent.gpp_string = gpp.gpp_string.clone();
            consent.gpp_sid = join_sections(&gpp.applicable_sections);
        } else if let Some(regs) = bidder_request.ortb2.as_ref().and_then(|o| o.regs.as_ref()) {
            consent.gpp_string = regs.gpp.clone();
            consent.gpp_sid = join_sections(&regs.gpp_sid);
        }

        consent
    }

    /// 从请求体 JSON 中恢复同意信息，请求体无法解析时返回 `None`
    pub fn from_request_data(data: &str) -> Option<Self> {
        serde_json::from_str(data).ok()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_none())
    }

    fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("gdprApplies", self.gdpr_applies.as_deref()),
            ("gdprConsent", self.gdpr_consent.as_deref()),
            ("gppString", self.gpp_string.as_deref()),
            ("gppSid", self.gpp_sid.as_deref()),
        ]
        .into_iter()
    }

    /// 生成 `&gdprApplies=..&gdprConsent=..&gppString=..&gppSid=..`，
    /// 只包含存在的字段，值做 URL 编码
    pub fn query_fragment(&self) -> String {
        self.fields()
            .filter_map(|(key, value)| value.map(|v| format!("&{}={}", key, urlencoding::encode(v))))
            .collect()
    }

    /// 用同意参数替换创意中的占位符（只替换第一处）；
    /// 没有任何同意字段时占位符被移除
    pub fn apply_to_markup(&self, ad: &str) -> String {
        if !ad.contains(CONSENT_PLACEHOLDER) {
            return ad.to_string();
        }
        ad.replacen(CONSENT_PLACEHOLDER, &self.query_fragment(), 1)
    }
}

fn join_sections(sections: &[i32]) -> Option<String> {
    if sections.is_empty() {
        return None;
    }
    Some(sections.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bid_request::{GdprConsent, GppConsent, Ortb2, Regs};

    fn fixture() -> ConsentContext {
        ConsentContext {
            gdpr_applies: Some("1".to_string()),
            gdpr_consent: Some("BOJObISOJObISAABAAENAA4AAAAAo".to_string()),
            gpp_string: Some("DBABMA~CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA".to_string()),
            gpp_sid: Some("7,8".to_string()),
        }
    }

    #[test]
    fn fragment_keeps_fixed_order_and_encodes_values() {
        assert_eq!(
            fixture().query_fragment(),
            "&gdprApplies=1&gdprConsent=BOJObISOJObISAABAAENAA4AAAAAo\
             &gppString=DBABMA~CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA&gppSid=7%2C8"
        );
    }

    #[test]
    fn fragment_skips_missing_fields() {
        let consent = ConsentContext {
            gpp_sid: Some("2".to_string()),
            gdpr_applies: Some("0".to_string()),
            ..Default::default()
        };
        assert_eq!(consent.query_fragment(), "&gdprApplies=0&gppSid=2");
    }

    #[test]
    fn empty_context_strips_placeholder() {
        let ad = "<script src=\"https://bid.glass/x.js?t=1&replaceme\"></script>";
        assert_eq!(
            ConsentContext::default().apply_to_markup(ad),
            "<script src=\"https://bid.glass/x.js?t=1\"></script>"
        );
    }

    #[test]
    fn markup_without_placeholder_is_untouched() {
        let ad = "<script src=\"https://bid.glass/x.js?t=1\"></script>";
        assert_eq!(fixture().apply_to_markup(ad), ad);
    }

    #[test]
    fn only_first_placeholder_is_replaced() {
        let consent = ConsentContext { gdpr_applies: Some("1".to_string()), ..Default::default() };
        assert_eq!(consent.apply_to_markup("a&replaceme b&replaceme"), "a&gdprApplies=1 b&replaceme");
    }

    #[test]
    fn builds_from_bidder_request() {
        let request = BidderRequest {
            gdpr_consent: Some(GdprConsent { gdpr_applies: true, consent_string: Some("CS".to_string()) }),
            gpp_consent: Some(GppConsent { gpp_string: Some("GPP".to_string()), applicable_sections: vec![7, 8] }),
            ..Default::default()
        };
        let consent = ConsentContext::from_bidder_request(&request);
        assert_eq!(consent.gdpr_applies.as_deref(), Some("1"));
        assert_eq!(consent.gdpr_consent.as_deref(), Some("CS"));
        assert_eq!(consent.gpp_string.as_deref(), Some("GPP"));
        assert_eq!(consent.gpp_sid.as_deref(), Some("7,8"));
    }

    #[test]
    fn gpp_falls_back_to_ortb2_regs() {
        let request = BidderRequest {
            ortb2: Some(Ortb2 { regs: Some(Regs { gpp: Some("GPP".to_string()), gpp_sid: vec![2] }) }),
            ..Default::default()
        };
        let consent = ConsentContext::from_bidder_request(&request);
        assert_eq!(consent.gdpr_applies, None);
        assert_eq!(consent.gpp_string.as_deref(), Some("GPP"));
        assert_eq!(consent.gpp_sid.as_deref(), Some("2"));
    }

    #[test]
    fn recovers_from_request_data() {
        let data = r#"{"reqId":"x","imps":[],"gdprApplies":"1","gppSid":"7,8"}"#;
        let consent = ConsentContext::from_request_data(data).unwrap();
        assert_eq!(consent.gdpr_applies.as_deref(), Some("1"));
        assert_eq!(consent.gpp_sid.as_deref(), Some("7,8"));
        assert!(ConsentContext::from_request_data("not json").is_none());
    }
}
