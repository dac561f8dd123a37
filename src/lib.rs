//! # courier-sdk
//!
//! Typed async Rust client for the [Courier](https://www.courier.com)
//! notification delivery API.
//!
//! ## Overview
//!
//! This library wraps the Courier REST API (`https://api.courier.com`) with
//! strongly typed request/response models and thin per-resource service
//! clients. Every operation builds an HTTP request (method, path, query,
//! JSON body), dispatches it through a shared [`reqwest`] client, and
//! deserializes the response into typed values.
//!
//! ## Key Features
//!
//! - **Unified Client**: [`CourierClient`] is the single entry point; each
//!   resource is exposed as a lightweight service client.
//! - **Typed Models**: request and response shapes are plain serde structs
//!   with chainable `with_*` helpers for optional fields.
//! - **Union Types**: polymorphic fields (recipients, message shapes,
//!   Elemental nodes, audience filters) resolve via serde tagged/untagged
//!   dispatch.
//! - **Structured Errors**: HTTP failures surface as [`Error::Api`] with the
//!   status code and the parsed Courier error body.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courier_sdk::{CourierClient, Message, TemplateMessage, UserRecipient};
//!
//! #[tokio::main]
//! async fn main() -> courier_sdk::Result<()> {
//!     let client = CourierClient::builder()
//!         .auth_token("your-auth-token")
//!         .build()?;
//!
//!     let message = TemplateMessage::new("TEMPLATE_ID")
//!         .with_to(UserRecipient::new().with_email("ada@example.com"))
//!         .with_data(serde_json::json!({ "name": "Ada" }));
//!
//!     let resp = client.send().message(Message::Template(message)).await?;
//!     println!("request id: {}", resp.request_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Root client and builder |
//! | [`types`] | Shared models: recipients, Elemental content, preferences |
//! | [`send`] | Message submission (`POST /send`) |
//! | [`messages`] | Message log, cancelation, history, rendered output |
//! | [`automations`] | Ad-hoc and template automation invocation |
//! | [`bulk`] | Bulk job lifecycle |
//! | [`lists`] | Lists and list subscriptions |
//! | [`notifications`] | Notification template content and checks |
//! | [`profiles`] | User profiles and their list subscriptions |
//! | [`tenants`] | Tenants and tenant default preferences |
//! | [`users`] | User preferences, tokens, and tenant memberships |
//! | [`audiences`] | Audiences and audience membership |

pub mod audiences;
pub mod automations;
pub mod bulk;
pub mod client;
pub mod lists;
pub mod messages;
pub mod notifications;
pub mod profiles;
pub mod send;
pub mod tenants;
pub(crate) mod transport;
pub mod types;
pub mod users;

// Re-export main types for convenience
pub use client::{CourierClient, CourierClientBuilder};
pub use send::SendMessageResponse;
pub use types::{
    content::{Content, ElementalContent, ElementalContentSugar, ElementalNode},
    message::{ContentMessage, Message, Routing, RoutingMethod, TemplateMessage},
    recipient::{MessageRecipient, Recipient, UserRecipient},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
