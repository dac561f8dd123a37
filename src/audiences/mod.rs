//! Audiences: filter-defined recipient groups.

mod client;
mod types;

pub use client::AudiencesClient;
pub use types::{
    Audience, AudienceListResponse, AudienceMember, AudienceMemberListResponse,
    AudienceUpdateResponse, ComparisonOperator, Filter, LogicalOperator, NestedFilterConfig,
    PutAudienceParams, SingleFilterConfig,
};
