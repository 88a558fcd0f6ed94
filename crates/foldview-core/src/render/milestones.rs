use crate::core::models::phase::Phase;

// Marker counts for the card decorations on the status board: backbone
// nodes along the chain, sample residue letters, secondary-structure
// elements, and render-scan dots.
pub const BACKBONE_NODES: usize = 8;
pub const SEQUENCE_LETTERS: usize = 15;
pub const STRUCTURE_HELICES: usize = 3;
pub const STRUCTURE_SHEETS: usize = 2;
pub const RENDER_DOTS: usize = 3;

/// Total marker count drawn on one phase card.
pub const fn marker_count(phase: Phase) -> usize {
    match phase {
        Phase::Backbone => BACKBONE_NODES,
        Phase::Sequence => SEQUENCE_LETTERS,
        Phase::Structure => STRUCTURE_HELICES + STRUCTURE_SHEETS,
        Phase::Visualization => RENDER_DOTS,
    }
}

/// How many of `marker_count` evenly spaced markers are revealed at the
/// given local progress. Marker `i` (1-based) appears once local progress
/// reaches `i * (100 / marker_count)`, so the last marker appears exactly
/// at 100.
pub fn revealed_markers(marker_count: usize, local_progress: f64) -> usize {
    if marker_count == 0 || !(local_progress > 0.0) {
        return 0;
    }
    let revealed = (local_progress / 100.0 * marker_count as f64).floor() as usize;
    revealed.min(marker_count)
}
