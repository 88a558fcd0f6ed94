use serde::{Deserialize, Serialize};
use std::fmt;

/// Chemical character of an amino acid, the property the dashboard colors by.
///
/// The six named classes partition the 20 canonical one-letter codes;
/// `Unknown` is the fallback for anything outside that alphabet (ambiguity
/// codes, lowercase, whitespace), so annotation is total over arbitrary
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidueClass {
    Hydrophobic,
    Aromatic,
    Positive,
    Negative,
    Polar,
    Special,
    #[serde(rename = "special-unknown")]
    Unknown,
}

impl ResidueClass {
    /// Stable kebab-case label, shared by serde and display layers.
    pub const fn label(self) -> &'static str {
        match self {
            ResidueClass::Hydrophobic => "hydrophobic",
            ResidueClass::Aromatic => "aromatic",
            ResidueClass::Positive => "positive",
            ResidueClass::Negative => "negative",
            ResidueClass::Polar => "polar",
            ResidueClass::Special => "special",
            ResidueClass::Unknown => "special-unknown",
        }
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One position of an annotated sequence: the residue letter, its chemical
/// class, and the full chemical name (or the literal character when the
/// letter is not a canonical code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedResidue {
    pub letter: char,
    pub class: ResidueClass,
    pub full_name: String,
}
