// src/bidding/request_builder.rs

use tracing::debug;
use uuid::Uuid;

use crate::config::AdapterConfig;
use crate::error::Result;
use crate::model::bid_request::{BidConfiguration, BidderRequest};
use crate::model::consent::ConsentContext;
use crate::wire::request::{HttpMethod, Imp, OutboundRequest, RequestOptions, RequestPayload};

/// 将一批（已校验的）竞价配置合并为一个发往交易所的请求。
/// 不做去重、不拆分，输入顺序保持不变。
pub fn build_requests(
    config: &AdapterConfig,
    bids: &[BidConfiguration],
    bidder_request: Option<&BidderRequest>,
) -> Result<OutboundRequest> {
    let imps: Vec<Imp> = bids.iter().map(to_imp).collect();

    let payload = RequestPayload {
        req_id: Uuid::new_v4().to_string(),
        imps,
        referer: bidder_request
            .and_then(|r| r.referer_info.as_ref())
            .and_then(|r| r.page.clone()),
        consent: bidder_request
            .map(ConsentContext::from_bidder_request)
            .unwrap_or_default(),
    };

    let request = OutboundRequest {
        method: HttpMethod::Post,
        url: config.request_url(),
        data: serde_json::to_string(&payload)?,
        options: RequestOptions {
            content_type: config.content_type.clone(),
            with_credentials: false,
        },
    };

    debug!(
        method = %request.method,
        url = %request.url,
        req_id = %payload.req_id,
        imp_count = payload.imps.len(),
        has_consent = !payload.consent.is_empty(),
        "built bid glass request"
    );

    Ok(request)
}

fn to_imp(bid: &BidConfiguration) -> Imp {
    let (ad_unit_id, options) = bid
        .params
        .as_ref()
        .map(|p| (p.ad_unit_id.clone().unwrap_or_default(), p.options.clone()))
        .unwrap_or_default();

    Imp {
        bid_id: bid.bid_id.clone(),
        sizes: bid.effective_sizes(),
        ad_unit_id,
        ad_unit_code: bid.ad_unit_code.clone(),
        options,
    }
}
