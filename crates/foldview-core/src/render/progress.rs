use crate::core::models::phase::{PHASE_COUNT, Phase};
use serde::{Deserialize, Serialize};

/// Per-phase bars fill at four times the overall job rate, so a bar reaches
/// 100% exactly when its phase's progress range is exhausted. Cosmetic
/// pacing only; `tests` pin it against the range table.
pub const PHASE_FILL_FACTOR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Pending,
    Running,
    Completed,
}

/// Drawable state of one phase card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseCard {
    pub phase: Phase,
    pub status: PhaseStatus,
    /// Progress through this phase alone, in [0,100].
    pub local_progress: f64,
}

/// Derives the four phase cards from the overall job progress.
///
/// Total over all of `f64`: values outside [0,100] are clamped and NaN is
/// treated as 0, since status telemetry may be noisy. A phase is `Completed`
/// from its range's end onward and `Running` strictly inside the range, so
/// at an exact boundary the lower phase is already complete while the upper
/// one is still pending. Two cards never run at once.
pub fn phase_cards(progress: f64) -> [PhaseCard; PHASE_COUNT] {
    let overall = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    };

    Phase::ALL.map(|phase| {
        let range = phase.range();
        let status = if overall >= range.end {
            PhaseStatus::Completed
        } else if overall > range.start {
            PhaseStatus::Running
        } else {
            PhaseStatus::Pending
        };
        let local_progress = ((overall - range.start) * PHASE_FILL_FACTOR).clamp(0.0, 100.0);
        PhaseCard {
            phase,
            status,
            local_progress,
        }
    })
}
