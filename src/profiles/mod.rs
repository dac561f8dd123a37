//! User profiles and their list subscriptions.

mod client;
mod types;

pub use client::ProfilesClient;
pub use types::{
    GetProfileListSubscriptionsResponse, GetProfileResponse, ProfileUpdateResponse,
    SubscribeToListsEntry,
};
