//! Tenants and tenant default preferences.

mod client;
mod types;

pub use client::TenantsClient;
pub use types::{
    DefaultPreferences, ListUsersForTenantResponse, PutDefaultPreferencesParams, PutTenantParams,
    SubscriptionTopic, Tenant, TenantAssociation, TenantListResponse,
};
