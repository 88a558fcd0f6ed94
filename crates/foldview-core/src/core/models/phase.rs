use serde::{Deserialize, Serialize};

/// Number of sequential stages in the design pipeline.
pub const PHASE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Backbone,      // Backbone generation (RFdiffusion-style sampling)
    Sequence,      // Sequence design (inverse folding)
    Structure,     // Structure prediction of the designed sequences
    Visualization, // Static render generation for the results page
}

/// Half-open slice of the overall [0,100] progress scale owned by one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRange {
    pub start: f64,
    pub end: f64,
}

impl PhaseRange {
    pub const fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl Phase {
    /// All phases in canonical pipeline order.
    pub const ALL: [Phase; PHASE_COUNT] = [
        Phase::Backbone,
        Phase::Sequence,
        Phase::Structure,
        Phase::Visualization,
    ];

    /// The phase's slice of the overall progress scale. The four ranges
    /// partition [0,100] with no gaps or overlaps; `tests` enumerate this.
    pub const fn range(self) -> PhaseRange {
        match self {
            Phase::Backbone => PhaseRange {
                start: 0.0,
                end: 25.0,
            },
            Phase::Sequence => PhaseRange {
                start: 25.0,
                end: 50.0,
            },
            Phase::Structure => PhaseRange {
                start: 50.0,
                end: 75.0,
            },
            Phase::Visualization => PhaseRange {
                start: 75.0,
                end: 100.0,
            },
        }
    }

    /// Human-facing stage name, matching the pipeline service's messages.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Backbone => "Backbone Generation",
            Phase::Sequence => "Sequence Design",
            Phase::Structure => "Structure Prediction",
            Phase::Visualization => "Visualization",
        }
    }
}
