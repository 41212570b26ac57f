//! Dog record and request types.

use serde::{Deserialize, Serialize};

/// A dog record as stored and returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub color: String,
    pub tail_length: i32,
    pub weight: i32,
}

/// Request body for creating a dog.
///
/// Numeric fields stay signed so negative inputs reach validation instead
/// of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDog {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub tail_length: i32,
    #[serde(default)]
    pub weight: i32,
}

/// Query parameters for listing dogs.
#[derive(Debug, Clone, Deserialize)]
pub struct DogQuery {
    /// Attribute to sort by: name, color, tail_length, or weight
    pub attribute: Option<String>,
    /// Sort direction; "desc" (any case) for descending
    pub order: Option<String>,
    /// 1-based page number
    #[serde(default = "default_page_number", rename = "pageNumber")]
    pub page_number: i64,
    /// Page size
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    100
}

impl Default for DogQuery {
    fn default() -> Self {
        Self {
            attribute: None,
            order: None,
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}
