use super::preferences::UserPreferencesClient;
use super::tenants::UserTenantsClient;
use super::tokens::UserTokensClient;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Entry point for user-scoped resources.
pub struct UsersClient {
    transport: Arc<HttpTransport>,
}

impl UsersClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Subscription topic preferences.
    pub fn preferences(&self) -> UserPreferencesClient {
        UserPreferencesClient::new(self.transport.clone())
    }

    /// Push/device token registration.
    pub fn tokens(&self) -> UserTokensClient {
        UserTokensClient::new(self.transport.clone())
    }

    /// Tenant memberships.
    pub fn tenants(&self) -> UserTenantsClient {
        UserTenantsClient::new(self.transport.clone())
    }
}
