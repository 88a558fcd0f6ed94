use crate::core::models::residue::{AnnotatedResidue, ResidueClass};
use crate::core::utils::classification;

/// Annotates a raw sequence string, one record per character in input order.
///
/// Total over arbitrary input: characters outside the canonical 20-code
/// alphabet (ambiguity codes, lowercase, whitespace) come back as
/// [`ResidueClass::Unknown`] with the literal character as the name, since
/// upstream design tools may emit ambiguous codes. Re-annotating the same
/// string always yields the same records.
pub fn annotate(sequence: &str) -> Vec<AnnotatedResidue> {
    sequence.chars().map(annotate_code).collect()
}

fn annotate_code(letter: char) -> AnnotatedResidue {
    match classification::classify(letter) {
        Some(class) => AnnotatedResidue {
            letter,
            class,
            full_name: classification::full_name(letter)
                .unwrap_or_default()
                .to_string(),
        },
        None => AnnotatedResidue {
            letter,
            class: ResidueClass::Unknown,
            full_name: letter.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_annotates_to_nothing() {
        assert!(annotate("").is_empty());
    }

    #[test]
    fn classes_follow_input_order() {
        let residues = annotate("MKTLFGDI");
        let classes: Vec<_> = residues.iter().map(|r| r.class).collect();
        assert_eq!(
            classes,
            vec![
                ResidueClass::Hydrophobic,
                ResidueClass::Positive,
                ResidueClass::Polar,
                ResidueClass::Hydrophobic,
                ResidueClass::Aromatic,
                ResidueClass::Special,
                ResidueClass::Negative,
                ResidueClass::Hydrophobic,
            ]
        );
    }

    #[test]
    fn output_length_matches_input_including_duplicates() {
        let residues = annotate("AAAA");
        assert_eq!(residues.len(), 4);
        for residue in &residues {
            assert_eq!(residue.letter, 'A');
            assert_eq!(residue.full_name, "Alanine");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_the_literal_character() {
        let residues = annotate("X");
        assert_eq!(residues.len(), 1);
        assert_eq!(residues[0].class, ResidueClass::Unknown);
        assert_eq!(residues[0].full_name, "X");
    }

    #[test]
    fn lowercase_and_whitespace_pass_through_as_unknown() {
        for (input, letter) in [("m", 'm'), (" ", ' '), ("-", '-')] {
            let residues = annotate(input);
            assert_eq!(residues[0].letter, letter);
            assert_eq!(residues[0].class, ResidueClass::Unknown);
            assert_eq!(residues[0].full_name, letter.to_string());
        }
    }

    #[test]
    fn annotation_is_idempotent() {
        let sequence = "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQX";
        assert_eq!(annotate(sequence), annotate(sequence));
    }

    #[test]
    fn canonical_codes_get_their_chemical_names() {
        let residues = annotate("WD");
        assert_eq!(residues[0].full_name, "Tryptophan");
        assert_eq!(residues[1].full_name, "Aspartic acid");
    }
}
