use crate::cli::ValidateArgs;
use crate::config::PartialDesignRequest;
use crate::error::Result;
use tracing::{info, warn};

pub async fn run(args: ValidateArgs) -> Result<()> {
    let partial = match &args.config {
        Some(path) => {
            info!("Loading request file from {:?}", path);
            PartialDesignRequest::from_file(path)?
        }
        None => PartialDesignRequest::default(),
    };

    let request = partial.merge_with_cli(&args)?;
    request.validate()?;

    for warning in request.warnings() {
        warn!("{warning}");
        println!("⚠ {warning}");
    }

    let gpus = request
        .gpus
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    println!("✓ Request is valid.");
    println!(
        "  backbone length    : {} - {} residues",
        request.min_length, request.max_length
    );
    println!(
        "  backbone samples   : {} (batch size {})",
        request.num_samples, request.batch_size
    );
    println!("  generation device  : {}", request.device);
    println!(
        "  sequences/backbone : {} at temperature {}",
        request.mpnn_num_sequences, request.mpnn_temperature
    );
    println!("  prediction GPUs    : {gpus}");

    Ok(())
}
