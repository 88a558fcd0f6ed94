use serde::{Deserialize, Serialize};

/// Lifecycle stage of a design job as reported by the pipeline service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStage {
    Submitted,
    Running,
    Completed,
    Failed,
}

/// One status payload from the pipeline service's job tracker.
///
/// `progress` is a scalar in [0,100], monotonically non-decreasing over a
/// job's lifetime on the service side; consumers must not rely on that and
/// should treat every payload as a fresh snapshot (the render layer clamps
/// defensively). `message` is free-form operator text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: JobStage,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub progress: f64,
}

impl StatusReport {
    /// True once the service will publish no further updates for this job.
    pub const fn is_terminal(&self) -> bool {
        matches!(self.status, JobStage::Completed | JobStage::Failed)
    }
}
