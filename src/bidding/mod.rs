pub mod adapter;
pub mod request_builder;
pub mod response_interpreter;
pub mod validator;

pub use adapter::{BidderSpec, BidglassAdapter};
