//! Wire data model for the Drip REST API

pub mod request;
pub mod response;
pub mod subscriber;

pub use request::{
    ListSubscribersRequest, TagPair, TagsRequest, UpdateSubscriber, UpdateSubscribersRequest,
};
pub use response::{ApiResponse, Meta, SubscribersResponse};
pub use subscriber::{Links, Subscriber};
