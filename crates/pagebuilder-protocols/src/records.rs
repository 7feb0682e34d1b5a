//! Plain records that capability hooks and state modules operate on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A builder page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: u64,
    pub builder_id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub order: u32,
}

/// An element placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: u64,
    pub page_id: u64,
    /// Key of the element type in the `element` namespace.
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub values: Map<String, Value>,
}

/// Job lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Pending,
    Started,
    Finished,
    Failed,
}

/// A long-running job as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub job_type: String,
    pub state: JobState,
    #[serde(default)]
    pub progress_percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_readable_error: Option<String>,
}

impl JobRecord {
    pub fn is_finished(&self) -> bool {
        matches!(self.state, JobState::Finished | JobState::Failed)
    }
}

/// Context of an error that needs an error page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_record_deserialize_defaults() {
        let element: ElementRecord =
            serde_json::from_str(r#"{"id": 3, "page_id": 1, "type": "heading"}"#).unwrap();
        assert_eq!(element.element_type, "heading");
        assert_eq!(element.order, 0);
        assert!(element.values.is_empty());
    }

    #[test]
    fn test_job_state_snake_case() {
        let json = serde_json::to_string(&JobState::Started).unwrap();
        assert_eq!(json, "\"started\"");
    }

    #[test]
    fn test_job_is_finished() {
        let mut job = JobRecord {
            id: 1,
            job_type: "duplicate_page".to_string(),
            state: JobState::Pending,
            progress_percentage: 0,
            human_readable_error: None,
        };
        assert!(!job.is_finished());
        job.state = JobState::Failed;
        assert!(job.is_finished());
    }
}
