use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use foldview::submission::request::{DesignRequest, Device};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Request file contents: every field optional, missing ones fall back to
/// the pipeline defaults, CLI flags override both.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialDesignRequest {
    min_length: Option<u32>,
    max_length: Option<u32>,
    num_samples: Option<u32>,
    batch_size: Option<u32>,
    device: Option<String>,
    mpnn_num_sequences: Option<u32>,
    mpnn_temperature: Option<f64>,
    gpus: Option<Vec<u32>>,
}

impl PartialDesignRequest {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let partial: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded partial request from {:?}: {:?}", path, partial);
        Ok(partial)
    }

    /// Layers CLI overrides over the file values over the defaults.
    pub fn merge_with_cli(self, args: &ValidateArgs) -> Result<DesignRequest> {
        let defaults = DesignRequest::default();

        let device = match args.device.as_deref().or(self.device.as_deref()) {
            Some(raw) => raw.parse::<Device>()?,
            None => defaults.device,
        };

        let request = DesignRequest {
            min_length: args
                .min_length
                .or(self.min_length)
                .unwrap_or(defaults.min_length),
            max_length: args
                .max_length
                .or(self.max_length)
                .unwrap_or(defaults.max_length),
            num_samples: args
                .num_samples
                .or(self.num_samples)
                .unwrap_or(defaults.num_samples),
            batch_size: args
                .batch_size
                .or(self.batch_size)
                .unwrap_or(defaults.batch_size),
            device,
            mpnn_num_sequences: args
                .mpnn_num_sequences
                .or(self.mpnn_num_sequences)
                .unwrap_or(defaults.mpnn_num_sequences),
            mpnn_temperature: args
                .mpnn_temperature
                .or(self.mpnn_temperature)
                .unwrap_or(defaults.mpnn_temperature),
            gpus: args
                .gpus
                .clone()
                .or(self.gpus)
                .unwrap_or(defaults.gpus),
        };
        debug!("Effective request after merge: {:?}", request);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn empty_args() -> ValidateArgs {
        ValidateArgs {
            config: None,
            min_length: None,
            max_length: None,
            num_samples: None,
            batch_size: None,
            device: None,
            mpnn_num_sequences: None,
            mpnn_temperature: None,
            gpus: None,
        }
    }

    #[test]
    fn empty_sources_yield_the_pipeline_defaults() {
        let request = PartialDesignRequest::default()
            .merge_with_cli(&empty_args())
            .unwrap();
        assert_eq!(request, DesignRequest::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "min-length = 80\nmax-length = 150\ndevice = \"cuda:1\"\ngpus = [1, 2]"
        )
        .unwrap();

        let partial = PartialDesignRequest::from_file(file.path()).unwrap();
        let request = partial.merge_with_cli(&empty_args()).unwrap();

        assert_eq!(request.min_length, 80);
        assert_eq!(request.max_length, 150);
        assert_eq!(request.device, Device::Cuda(1));
        assert_eq!(request.gpus, vec![1, 2]);
        // Untouched fields keep their defaults.
        assert_eq!(request.batch_size, DesignRequest::default().batch_size);
    }

    #[test]
    fn cli_overrides_beat_file_values() {
        let partial = PartialDesignRequest {
            min_length: Some(80),
            device: Some("cpu".to_string()),
            ..PartialDesignRequest::default()
        };
        let args = ValidateArgs {
            min_length: Some(20),
            device: Some("cuda:2".to_string()),
            ..empty_args()
        };

        let request = partial.merge_with_cli(&args).unwrap();
        assert_eq!(request.min_length, 20);
        assert_eq!(request.device, Device::Cuda(2));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min-length = 80\nnum-designs = 3").unwrap();

        let result = PartialDesignRequest::from_file(file.path());
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn malformed_device_string_is_reported() {
        let partial = PartialDesignRequest {
            device: Some("tpu".to_string()),
            ..PartialDesignRequest::default()
        };
        let result = partial.merge_with_cli(&empty_args());
        assert!(matches!(result, Err(CliError::Device(_))));
    }
}
