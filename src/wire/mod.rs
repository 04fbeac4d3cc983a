pub mod lenient;
pub mod request;
pub mod response;

pub use request::{HttpMethod, Imp, OutboundRequest, RequestOptions, RequestPayload};
pub use response::{BidMeta, NormalizedBid, RawBid, ResponseBody, ServerResponse};
