use crate::cli::SequenceArgs;
use crate::error::{CliError, Result};
use crate::ui;
use crate::utils::fasta::{self, FastaRecord};
use colored::Colorize;
use foldview::render::sequence::annotate;
use tracing::info;

pub async fn run(args: SequenceArgs) -> Result<()> {
    let records = collect_records(&args)?;
    let use_color = !args.plain;
    info!("Rendering {} sequence record(s).", records.len());

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            println!();
        }
        if !record.id.is_empty() {
            let header = format!(">{}", record.id);
            if use_color {
                println!("{}", header.as_str().bold());
            } else {
                println!("{header}");
            }
        }

        let residues = annotate(&record.sequence);
        println!("{}", ui::render_sequence(&residues, use_color));
    }

    if args.legend {
        println!();
        print!("{}", ui::class_legend(use_color));
    }

    Ok(())
}

fn collect_records(args: &SequenceArgs) -> Result<Vec<FastaRecord>> {
    if let Some(sequence) = &args.input.sequence {
        return Ok(vec![FastaRecord {
            id: String::new(),
            sequence: sequence.clone(),
        }]);
    }

    // clap's input group guarantees exactly one source is present.
    let path = args
        .input
        .fasta
        .as_ref()
        .ok_or_else(|| CliError::Argument("a sequence or a FASTA file is required".to_string()))?;

    let content = std::fs::read_to_string(path)?;
    fasta::parse_str(&content).map_err(|e| CliError::FileParsing {
        path: path.clone(),
        source: e.into(),
    })
}
