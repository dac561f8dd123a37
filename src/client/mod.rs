//! Root Courier client and builder.

mod builder;

pub use builder::CourierClientBuilder;

use crate::audiences::AudiencesClient;
use crate::automations::AutomationsClient;
use crate::bulk::BulkClient;
use crate::lists::ListsClient;
use crate::messages::MessagesClient;
use crate::notifications::NotificationsClient;
use crate::profiles::ProfilesClient;
use crate::send::SendClient;
use crate::tenants::TenantsClient;
use crate::transport::HttpTransport;
use crate::users::UsersClient;
use crate::Result;
use std::sync::Arc;

/// Entry point for the Courier API.
///
/// Cheap to clone; all service clients share one underlying HTTP client.
#[derive(Clone, Debug)]
pub struct CourierClient {
    transport: Arc<HttpTransport>,
}

impl CourierClient {
    pub fn builder() -> CourierClientBuilder {
        CourierClientBuilder::new()
    }

    /// Build a client from the `COURIER_AUTH_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    pub(crate) fn from_transport(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Message submission (`POST /send`).
    pub fn send(&self) -> SendClient {
        SendClient::new(self.transport.clone())
    }

    /// Message log, cancelation, history, and rendered output.
    pub fn messages(&self) -> MessagesClient {
        MessagesClient::new(self.transport.clone())
    }

    /// Ad-hoc and template automation invocation.
    pub fn automations(&self) -> AutomationsClient {
        AutomationsClient::new(self.transport.clone())
    }

    /// Bulk job lifecycle.
    pub fn bulk(&self) -> BulkClient {
        BulkClient::new(self.transport.clone())
    }

    /// Lists and list subscriptions.
    pub fn lists(&self) -> ListsClient {
        ListsClient::new(self.transport.clone())
    }

    /// Notification template content and checks.
    pub fn notifications(&self) -> NotificationsClient {
        NotificationsClient::new(self.transport.clone())
    }

    /// User profiles and their list subscriptions.
    pub fn profiles(&self) -> ProfilesClient {
        ProfilesClient::new(self.transport.clone())
    }

    /// Tenants and tenant default preferences.
    pub fn tenants(&self) -> TenantsClient {
        TenantsClient::new(self.transport.clone())
    }

    /// User preferences, tokens, and tenant memberships.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.transport.clone())
    }

    /// Audiences and audience membership.
    pub fn audiences(&self) -> AudiencesClient {
        AudiencesClient::new(self.transport.clone())
    }
}
