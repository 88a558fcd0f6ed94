use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastaError {
    #[error("Line {line} appears before any '>' header.")]
    MissingHeader { line: usize },

    #[error("Record '{id}' has no sequence lines.")]
    EmptyRecord { id: String },

    #[error("The file contains no FASTA records.")]
    NoRecords,
}

/// One record of a FASTA file, as emitted by the sequence-design stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Parses FASTA text. Sequence lines are concatenated with surrounding
/// whitespace trimmed; letter case is preserved so the annotator's
/// unknown-code fallback stays visible downstream.
pub fn parse_str(content: &str) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (number, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            finish_record(&records)?;
            records.push(FastaRecord {
                id: header.trim().to_string(),
                sequence: String::new(),
            });
        } else {
            let record = records
                .last_mut()
                .ok_or(FastaError::MissingHeader { line: number + 1 })?;
            record.sequence.push_str(line);
        }
    }

    finish_record(&records)?;
    if records.is_empty() {
        return Err(FastaError::NoRecords);
    }
    Ok(records)
}

fn finish_record(records: &[FastaRecord]) -> Result<(), FastaError> {
    if let Some(last) = records.last()
        && last.sequence.is_empty()
    {
        return Err(FastaError::EmptyRecord {
            id: last.id.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_record() {
        let records = parse_str(">design_0 sample=1\nMKTLFGDI\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "design_0 sample=1");
        assert_eq!(records[0].sequence, "MKTLFGDI");
    }

    #[test]
    fn joins_wrapped_sequence_lines() {
        let records = parse_str(">d\nMKTL\nFGDI\n").unwrap();
        assert_eq!(records[0].sequence, "MKTLFGDI");
    }

    #[test]
    fn parses_multiple_records_in_order() {
        let records = parse_str(">a\nMK\n>b\nTL\n>c\nFG\n").unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn skips_blank_lines() {
        let records = parse_str("\n>d\n\nMKTL\n\nFGDI\n\n").unwrap();
        assert_eq!(records[0].sequence, "MKTLFGDI");
    }

    #[test]
    fn preserves_letter_case() {
        let records = parse_str(">d\nmkTL\n").unwrap();
        assert_eq!(records[0].sequence, "mkTL");
    }

    #[test]
    fn sequence_before_header_is_an_error() {
        assert_eq!(
            parse_str("MKTL\n>d\nFGDI\n"),
            Err(FastaError::MissingHeader { line: 1 })
        );
    }

    #[test]
    fn header_without_sequence_is_an_error() {
        assert_eq!(
            parse_str(">a\n>b\nMKTL\n"),
            Err(FastaError::EmptyRecord {
                id: "a".to_string()
            })
        );
        assert_eq!(
            parse_str(">only\n"),
            Err(FastaError::EmptyRecord {
                id: "only".to_string()
            })
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_str(""), Err(FastaError::NoRecords));
        assert_eq!(parse_str("\n\n"), Err(FastaError::NoRecords));
    }

}
