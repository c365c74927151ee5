//! Index listing models.

use serde::Deserialize;

/// Response of `GET /indexes`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IndexListResponse {
    #[serde(default)]
    pub value: Vec<IndexSummary>,
}

/// One entry of an index listing. Only the name is needed; other fields are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub name: String,
}

impl IndexListResponse {
    /// Index names in the order the service returned them.
    pub fn into_names(self) -> Vec<String> {
        self.value.into_iter().map(|i| i.name).collect()
    }
}
