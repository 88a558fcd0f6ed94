use colored::{ColoredString, Colorize};
use foldview::core::models::phase::PHASE_COUNT;
use foldview::core::models::report::{JobStage, StatusReport};
use foldview::core::models::residue::{AnnotatedResidue, ResidueClass};
use foldview::render::layout;
use foldview::render::milestones::{marker_count, revealed_markers};
use foldview::render::progress::{PhaseCard, PhaseStatus, phase_cards};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

const PENDING_GLYPH: &str = "○";
const RUNNING_GLYPH: &str = "◐";
const COMPLETED_GLYPH: &str = "●";

/// Terminal rendering of the four-phase status board: one bar per phase
/// card plus an overall job bar, redrawn from scratch on every poll tick.
pub struct PhaseBoard {
    mp: MultiProgress,
    overall: ProgressBar,
    cards: Vec<ProgressBar>,
}

impl PhaseBoard {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr_with_hz(12))
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let mp = MultiProgress::new();
        mp.set_draw_target(target);

        let overall = mp.add(ProgressBar::new(100).with_style(Self::overall_style()));
        let cards = (0..PHASE_COUNT)
            .map(|_| mp.add(ProgressBar::new(100).with_style(Self::card_style())))
            .collect();

        let board = Self { mp, overall, cards };
        board.render(&StatusReport {
            status: JobStage::Submitted,
            message: "Waiting for status...".to_string(),
            progress: 0.0,
        });
        board
    }

    /// Redraws the board from one status payload. Stateless with respect to
    /// previous payloads, so duplicate or out-of-order reports are safe.
    pub fn render(&self, report: &StatusReport) {
        let cards = phase_cards(report.progress);

        self.overall.set_position(overall_position(&cards));
        self.overall.set_message(report.message.clone());

        for (bar, card) in self.cards.iter().zip(cards.iter()) {
            bar.set_position(card.local_progress.round() as u64);
            bar.set_message(card_message(card));
        }
    }

    /// Freezes the board after a terminal report and prints the outcome line.
    pub fn finish(&self, report: &StatusReport) {
        self.render(report);
        for bar in &self.cards {
            bar.finish();
        }
        self.overall.finish();
        self.mp.println(String::new()).ok();
    }

    fn overall_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<44} [{bar:40.green/black.dim}] {pos:>3}%")
            .expect("Invalid template")
            .progress_chars("━╸ ")
    }

    fn card_style() -> ProgressStyle {
        ProgressStyle::with_template("  {msg:<42} [{bar:30.cyan/blue}] {pos:>3}%")
            .expect("Invalid template")
            .progress_chars("━╸ ")
    }
}

impl Default for PhaseBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn overall_position(cards: &[PhaseCard; PHASE_COUNT]) -> u64 {
    // Derive the overall position from the card states rather than the raw
    // payload so the bar inherits the defensive clamp.
    let completed = cards
        .iter()
        .filter(|c| c.status == PhaseStatus::Completed)
        .count() as f64;
    let running: f64 = cards
        .iter()
        .filter(|c| c.status == PhaseStatus::Running)
        .map(|c| c.local_progress / 100.0)
        .sum();
    ((completed + running) * (100.0 / PHASE_COUNT as f64)).round() as u64
}

fn card_message(card: &PhaseCard) -> String {
    let glyph = match card.status {
        PhaseStatus::Pending => PENDING_GLYPH,
        PhaseStatus::Running => RUNNING_GLYPH,
        PhaseStatus::Completed => COMPLETED_GLYPH,
    };
    let total = marker_count(card.phase);
    let shown = revealed_markers(total, card.local_progress);
    let markers = format!("{}{}", "•".repeat(shown), "·".repeat(total - shown));
    format!("{glyph} {:<22} {markers}", card.phase.label())
}

/// Renders annotated residues as terminal text: colored by chemical class,
/// spaced in blocks of 10 and wrapped at 50.
pub fn render_sequence(residues: &[AnnotatedResidue], use_color: bool) -> String {
    let mut out = String::new();
    for (index, residue) in residues.iter().enumerate() {
        if use_color {
            out.push_str(&paint(residue.letter, residue.class).to_string());
        } else {
            out.push(residue.letter);
        }

        let slot = layout::slot(index);
        if index + 1 < residues.len() {
            if slot.break_after {
                out.push('\n');
            } else if slot.gap_after {
                out.push(' ');
            }
        }
    }
    out
}

/// One legend line per chemical class, colored to match the sequence view.
pub fn class_legend(use_color: bool) -> String {
    let entries = [
        (ResidueClass::Hydrophobic, "I L V A M"),
        (ResidueClass::Aromatic, "F Y W H"),
        (ResidueClass::Positive, "K R"),
        (ResidueClass::Negative, "D E"),
        (ResidueClass::Polar, "S T N Q"),
        (ResidueClass::Special, "C G P"),
    ];
    let mut out = String::new();
    for (class, codes) in entries {
        let swatch = if use_color {
            paint('■', class).to_string()
        } else {
            "■".to_string()
        };
        out.push_str(&format!("{swatch} {:<12} {codes}\n", class.label()));
    }
    out
}

// Class palette from the results-page stylesheet.
fn paint(letter: char, class: ResidueClass) -> ColoredString {
    let text = letter.to_string();
    let text = text.as_str();
    match class {
        ResidueClass::Hydrophobic => text.truecolor(0xFF, 0x98, 0x00),
        ResidueClass::Aromatic => text.truecolor(0x9C, 0x27, 0xB0),
        ResidueClass::Positive => text.truecolor(0x21, 0x96, 0xF3),
        ResidueClass::Negative => text.truecolor(0xF4, 0x43, 0x36),
        ResidueClass::Polar => text.truecolor(0x4C, 0xAF, 0x50),
        ResidueClass::Special => text.truecolor(0x60, 0x7D, 0x8B),
        ResidueClass::Unknown => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldview::core::models::report::JobStage;
    use foldview::render::sequence::annotate;

    fn hidden_board() -> PhaseBoard {
        PhaseBoard::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn report(progress: f64) -> StatusReport {
        StatusReport {
            status: JobStage::Running,
            message: "working".to_string(),
            progress,
        }
    }

    #[test]
    fn board_has_one_bar_per_phase() {
        let board = hidden_board();
        assert_eq!(board.cards.len(), PHASE_COUNT);
    }

    #[test]
    fn render_positions_cards_from_the_payload() {
        let board = hidden_board();
        board.render(&report(37.5));

        assert_eq!(board.cards[0].position(), 100);
        assert_eq!(board.cards[1].position(), 50);
        assert_eq!(board.cards[2].position(), 0);
        assert_eq!(board.cards[3].position(), 0);
        assert_eq!(board.overall.position(), 38);
    }

    #[test]
    fn render_is_safe_to_repeat_with_the_same_payload() {
        let board = hidden_board();
        board.render(&report(60.0));
        let first: Vec<_> = board.cards.iter().map(|b| b.position()).collect();
        board.render(&report(60.0));
        let second: Vec<_> = board.cards.iter().map(|b| b.position()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn render_clamps_noisy_payloads() {
        let board = hidden_board();
        board.render(&report(250.0));
        assert_eq!(board.overall.position(), 100);
        for bar in &board.cards {
            assert_eq!(bar.position(), 100);
        }
    }

    #[test]
    fn finish_freezes_every_bar() {
        let board = hidden_board();
        board.finish(&StatusReport {
            status: JobStage::Completed,
            message: "All steps completed successfully".to_string(),
            progress: 100.0,
        });
        assert!(board.overall.is_finished());
        for bar in &board.cards {
            assert!(bar.is_finished());
        }
    }

    #[test]
    fn card_messages_carry_glyph_label_and_markers() {
        let cards = phase_cards(12.5);
        let message = card_message(&cards[0]);
        assert!(message.starts_with(RUNNING_GLYPH));
        assert!(message.contains("Backbone Generation"));
        // Local progress 50 reveals 4 of the 8 backbone nodes.
        assert!(message.contains(&format!("{}{}", "•".repeat(4), "·".repeat(4))));
    }

    #[test]
    fn plain_sequence_rendering_groups_blocks_and_lines() {
        let residues = annotate(&"A".repeat(60));
        let text = render_sequence(&residues, false);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("{} ", "A".repeat(10)).repeat(4) + &"A".repeat(10));
        assert_eq!(lines[1], "A".repeat(10));
    }

    #[test]
    fn plain_rendering_has_no_trailing_separator() {
        let residues = annotate(&"K".repeat(10));
        let text = render_sequence(&residues, false);
        assert_eq!(text, "K".repeat(10));
    }

    #[test]
    fn empty_sequence_renders_to_nothing() {
        assert!(render_sequence(&[], true).is_empty());
    }

    #[test]
    fn legend_lists_all_six_classes() {
        let legend = class_legend(false);
        for label in [
            "hydrophobic",
            "aromatic",
            "positive",
            "negative",
            "polar",
            "special",
        ] {
            assert!(legend.contains(label), "legend misses {label}");
        }
    }
}
