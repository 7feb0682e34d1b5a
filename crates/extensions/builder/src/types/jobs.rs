//! Job types.

use pagebuilder_protocols::{ExecutionContext, JobRecord, JobState, JobType, Registerable};

/// Backend job copying a page with its elements.
pub struct DuplicatePageJobType {
    ctx: ExecutionContext,
}

impl DuplicatePageJobType {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx }
    }
}

impl Registerable for DuplicatePageJobType {
    fn type_key(&self) -> &str {
        "duplicate_page"
    }

    fn label(&self) -> String {
        self.ctx.t("jobType.duplicatePage")
    }
}

impl JobType for DuplicatePageJobType {
    fn icon_class(&self) -> &str {
        "iconoir-copy"
    }

    fn progress_text(&self, job: &JobRecord) -> String {
        match job.state {
            JobState::Failed => job
                .human_readable_error
                .clone()
                .unwrap_or_else(|| self.ctx.t("jobType.duplicatePageFailed")),
            JobState::Finished => self.label(),
            JobState::Pending | JobState::Started => format!(
                "{} {}%",
                self.ctx.t("jobType.duplicatePageProgress"),
                job.progress_percentage.min(100)
            ),
        }
    }
}
