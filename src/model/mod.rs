pub mod bid_request;
pub mod consent;

pub use bid_request::{BidConfiguration, BidParams, BidderRequest, GdprConsent, GppConsent, RefererInfo};
pub use consent::ConsentContext;
