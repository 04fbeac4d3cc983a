// src/lib.rs

//! Bid Glass 竞价适配器。
//!
//! 宿主（header bidding 框架）依次调用：
//!
//! ```text
//! is_bid_request_valid  ->  build_requests  ->  (宿主发送 HTTP)  ->  interpret_response
//! ```
//!
//! 三个操作都是同步、无状态的纯数据转换；网络、超时、竞价排序都由宿主负责。

pub mod bidding;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod wire;

pub use bidding::{BidderSpec, BidglassAdapter};
pub use config::AdapterConfig;
pub use error::{AdapterError, Result};
pub use model::{BidConfiguration, BidParams, BidderRequest, ConsentContext};
pub use wire::{NormalizedBid, OutboundRequest, ServerResponse};
