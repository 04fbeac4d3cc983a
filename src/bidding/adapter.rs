// src/bidding/adapter.rs

use crate::bidding::{request_builder, response_interpreter, validator};
use crate::config::{AdapterConfig, ConfigSource};
use crate::error::Result;
use crate::model::bid_request::{BidConfiguration, BidderRequest};
use crate::wire::request::OutboundRequest;
use crate::wire::response::{NormalizedBid, ServerResponse};

/// 宿主调用的适配器接口
pub trait BidderSpec: Send + Sync {
    fn code(&self) -> &str;
    fn aliases(&self) -> &[String];
    fn supported_media_types(&self) -> Vec<&str>;

    fn is_bid_request_valid(&self, bid: &BidConfiguration) -> bool;

    fn build_requests(
        &self,
        bids: &[BidConfiguration],
        bidder_request: Option<&BidderRequest>,
    ) -> Result<OutboundRequest>;

    fn interpret_response(&self, response: &ServerResponse, request: &OutboundRequest) -> Vec<NormalizedBid>;
}

/// **Bid Glass 适配器**，只持有不可变配置
#[derive(Debug, Clone, Default)]
pub struct BidglassAdapter {
    config: AdapterConfig,
}

impl BidglassAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self::new(source.load())
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl BidderSpec for BidglassAdapter {
    fn code(&self) -> &str {
        &self.config.bidder_code
    }

    fn aliases(&self) -> &[String] {
        &self.config.aliases
    }

    fn supported_media_types(&self) -> Vec<&str> {
        vec![self.config.media_type.as_str()]
    }

    fn is_bid_request_valid(&self, bid: &BidConfiguration) -> bool {
        validator::is_bid_request_valid(bid)
    }

    fn build_requests(
        &self,
        bids: &[BidConfiguration],
        bidder_request: Option<&BidderRequest>,
    ) -> Result<OutboundRequest> {
        request_builder::build_requests(&self.config, bids, bidder_request)
    }

    fn interpret_response(&self, response: &ServerResponse, request: &OutboundRequest) -> Vec<NormalizedBid> {
        response_interpreter::interpret_response(&self.config, response, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_identity() {
        let adapter = BidglassAdapter::default();
        assert_eq!(adapter.code(), "bidglass");
        assert_eq!(adapter.aliases(), ["bg".to_string()]);
        assert_eq!(adapter.supported_media_types(), vec!["banner"]);
    }

    struct FixedSource;

    impl ConfigSource for FixedSource {
        fn load(&self) -> AdapterConfig {
            AdapterConfig { ttl: 45, ..AdapterConfig::default() }
        }
    }

    #[test]
    fn builds_from_config_source() {
        let adapter = BidglassAdapter::from_source(&FixedSource);
        assert_eq!(adapter.config().ttl, 45);
        assert_eq!(adapter.config().currency, "USD");
    }

    #[test]
    fn usable_as_trait_object() {
        let adapters: Vec<Box<dyn BidderSpec>> = vec![Box::new(BidglassAdapter::default())];
        assert_eq!(adapters[0].code(), "bidglass");
    }
}
