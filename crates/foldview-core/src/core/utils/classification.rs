use crate::core::models::residue::ResidueClass;
use phf::{Map, phf_map};

static RESIDUE_CLASSES: Map<char, ResidueClass> = phf_map! {
    'I' => ResidueClass::Hydrophobic,
    'L' => ResidueClass::Hydrophobic,
    'V' => ResidueClass::Hydrophobic,
    'A' => ResidueClass::Hydrophobic,
    'M' => ResidueClass::Hydrophobic,
    'F' => ResidueClass::Aromatic,
    'Y' => ResidueClass::Aromatic,
    'W' => ResidueClass::Aromatic,
    'H' => ResidueClass::Aromatic,
    'K' => ResidueClass::Positive,
    'R' => ResidueClass::Positive,
    'D' => ResidueClass::Negative,
    'E' => ResidueClass::Negative,
    'S' => ResidueClass::Polar,
    'T' => ResidueClass::Polar,
    'N' => ResidueClass::Polar,
    'Q' => ResidueClass::Polar,
    'C' => ResidueClass::Special,
    'G' => ResidueClass::Special,
    'P' => ResidueClass::Special,
};

static AMINO_ACID_NAMES: Map<char, &'static str> = phf_map! {
    'A' => "Alanine",
    'R' => "Arginine",
    'N' => "Asparagine",
    'D' => "Aspartic acid",
    'C' => "Cysteine",
    'E' => "Glutamic acid",
    'Q' => "Glutamine",
    'G' => "Glycine",
    'H' => "Histidine",
    'I' => "Isoleucine",
    'L' => "Leucine",
    'K' => "Lysine",
    'M' => "Methionine",
    'F' => "Phenylalanine",
    'P' => "Proline",
    'S' => "Serine",
    'T' => "Threonine",
    'W' => "Tryptophan",
    'Y' => "Tyrosine",
    'V' => "Valine",
};

pub fn classify(code: char) -> Option<ResidueClass> {
    RESIDUE_CLASSES.get(&code).copied()
}

pub fn full_name(code: char) -> Option<&'static str> {
    AMINO_ACID_NAMES.get(&code).copied()
}

pub fn is_standard_code(code: char) -> bool {
    RESIDUE_CLASSES.contains_key(&code)
}
