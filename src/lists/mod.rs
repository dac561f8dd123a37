//! Lists and list subscriptions.

mod client;
mod types;

pub use client::ListsClient;
pub use types::{
    List, ListGetAllResponse, ListGetSubscriptionsResponse, ListPutParams, ListSubscription,
    PutSubscriptionsRecipient,
};
