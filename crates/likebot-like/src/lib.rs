//! Like-request orchestration: argument normalization, the bounded HTTP call
//! to the like provider, response classification, and the pipeline gluing
//! them behind the channel access gate.

pub mod like_client;
pub mod like_outcome;
pub mod like_pipeline;
pub mod like_request;

pub use like_client::{LikeApiClient, LikeTransportResult};
pub use like_outcome::{classify_transport_result, LikeOutcome};
pub use like_pipeline::{run_like_request, LikeRequestContext};
pub use like_request::{normalize_like_args, LikeRequest, RawLikeArgs};
