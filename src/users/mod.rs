//! User-scoped resources: preferences, device tokens, tenant memberships.

mod client;
mod preferences;
mod tenants;
mod tokens;

pub use client::UsersClient;
pub use preferences::{
    TopicPreferenceUpdate, UserPreferencesClient, UserPreferencesGetResponse,
    UserPreferencesListResponse, UserPreferencesUpdateResponse,
};
pub use tenants::{ListTenantsForUserResponse, UserTenantsClient};
pub use tokens::{
    Device, GetUserTokenResponse, ProviderKey, TokenExpiry, TokenStatus, Tracking, UserToken,
    UserTokensClient,
};
