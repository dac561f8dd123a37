//! Shared test setup: build a client pointed at a mockito server.

use courier_sdk::CourierClient;

pub const TEST_TOKEN: &str = "test-token";

pub fn client_for(server: &mockito::ServerGuard) -> CourierClient {
    CourierClient::builder()
        .auth_token(TEST_TOKEN)
        .base_url(server.url())
        .build()
        .expect("client builds against mock server")
}
