//! `job` namespace contract.

use serde_json::{Map, Value};

use crate::records::{JobRecord, JobState};
use crate::registerable::Registerable;

/// A long-running backend operation the UI tracks.
pub trait JobType: Registerable {
    fn icon_class(&self) -> &str;

    /// Whether `job` still needs polling.
    fn is_running(&self, job: &JobRecord) -> bool {
        matches!(job.state, JobState::Pending | JobState::Started)
    }

    /// Status line for `job`.
    fn progress_text(&self, job: &JobRecord) -> String;

    fn capabilities(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("icon_class".to_string(), Value::from(self.icon_class()));
        map
    }
}
