use crate::types::paging::Paging;
use serde::{Deserialize, Serialize};

/// A filter-defined group of users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audience {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A membership filter: a single comparison or a logical combination of
/// nested filters. Nested before single so the `filters` key wins dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    Nested(NestedFilterConfig),
    Single(SingleFilterConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedFilterConfig {
    pub operator: LogicalOperator,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleFilterConfig {
    pub operator: ComparisonOperator,
    /// Profile field path, e.g. `"favorite_color"` or `"address.city"`.
    pub path: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalOperator {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonOperator {
    EndsWith,
    Eq,
    Exists,
    Gt,
    Gte,
    Includes,
    IsAfter,
    IsBefore,
    Lt,
    Lte,
    Neq,
    Omit,
    StartsWith,
}

/// Body of `PUT /audiences/{audience_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PutAudienceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

impl PutAudienceParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceUpdateResponse {
    pub audience: Audience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceMember {
    pub added_at: String,
    pub audience_id: String,
    pub audience_version: u64,
    pub member_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceMemberListResponse {
    pub items: Vec<AudienceMember>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceListResponse {
    pub items: Vec<Audience>,
    pub paging: Paging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_union_resolves_nesting() {
        let json = r#"{
            "operator": "AND",
            "filters": [
                {"operator": "EQ", "path": "title", "value": "Software Engineer"},
                {"operator": "OR", "filters": [
                    {"operator": "INCLUDES", "path": "interests", "value": "rust"}
                ]}
            ]
        }"#;
        let filter: Filter = serde_json::from_str(json).unwrap();
        let nested = match filter {
            Filter::Nested(n) => n,
            other => panic!("unexpected filter: {:?}", other),
        };
        assert_eq!(nested.operator, LogicalOperator::And);
        assert!(matches!(&nested.filters[0], Filter::Single(s) if s.path == "title"));
        assert!(matches!(&nested.filters[1], Filter::Nested(_)));
    }

    #[test]
    fn comparison_operators_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ComparisonOperator::StartsWith).unwrap(),
            r#""STARTS_WITH""#
        );
        assert_eq!(
            serde_json::to_string(&ComparisonOperator::IsAfter).unwrap(),
            r#""IS_AFTER""#
        );
    }
}
