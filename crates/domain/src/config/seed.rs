use serde::{Deserialize, Serialize};

/// A record loaded into a resolver's table at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedRecord {
    pub name: String,

    pub record_type: String,

    pub result: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    #[serde(default)]
    pub is_static: bool,
}

impl SeedRecord {
    pub fn new_static(name: &str, record_type: &str, result: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: record_type.to_string(),
            result: result.to_string(),
            ttl: None,
            is_static: true,
        }
    }
}
