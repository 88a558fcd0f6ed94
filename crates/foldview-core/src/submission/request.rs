use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Designable backbone length window accepted by the generator.
pub const MIN_DESIGN_LENGTH: u32 = 10;
pub const MAX_DESIGN_LENGTH: u32 = 200;

/// Compute device for backbone generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Device {
    Cpu,
    Cuda(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid device '{0}'. Expected 'cpu' or 'cuda:<index>' (e.g. 'cuda:0').")]
pub struct DeviceParseError(String);

impl FromStr for Device {
    type Err = DeviceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "cpu" {
            return Ok(Device::Cpu);
        }
        match s.strip_prefix("cuda:") {
            Some(index) => index
                .parse::<u32>()
                .map(Device::Cuda)
                .map_err(|_| DeviceParseError(s.to_string())),
            None => Err(DeviceParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Cuda(index) => write!(f, "cuda:{index}"),
        }
    }
}

impl TryFrom<String> for Device {
    type Error = DeviceParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Device> for String {
    fn from(device: Device) -> Self {
        device.to_string()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Minimum length {min} must be less than maximum length {max}.")]
    LengthOrder { min: u32, max: u32 },

    #[error(
        "Designable length window is {}-{} residues; requested {min}-{max}.",
        MIN_DESIGN_LENGTH,
        MAX_DESIGN_LENGTH
    )]
    LengthWindow { min: u32, max: u32 },

    #[error("'{field}' must be at least 1.")]
    ZeroCount { field: &'static str },

    #[error("Sampling temperature must be a positive finite number, got {value}.")]
    Temperature { value: f64 },

    #[error("Select at least one GPU for structure prediction.")]
    NoGpus,
}

/// Non-fatal advisories surfaced alongside a valid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestWarning {
    CpuBackboneGeneration,
}

impl fmt::Display for RequestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestWarning::CpuBackboneGeneration => f.write_str(
                "Using the CPU for backbone generation is significantly slower than a GPU.",
            ),
        }
    }
}

/// Parameters of one design job, with the service's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DesignRequest {
    pub min_length: u32,
    pub max_length: u32,
    pub num_samples: u32,
    pub batch_size: u32,
    pub device: Device,
    pub mpnn_num_sequences: u32,
    pub mpnn_temperature: f64,
    pub gpus: Vec<u32>,
}

impl Default for DesignRequest {
    fn default() -> Self {
        Self {
            min_length: 50,
            max_length: 128,
            num_samples: 3,
            batch_size: 512,
            device: Device::Cuda(0),
            mpnn_num_sequences: 3,
            mpnn_temperature: 0.1,
            gpus: vec![0],
        }
    }
}

impl DesignRequest {
    /// Checks the request against the service's acceptance rules, returning
    /// the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_length >= self.max_length {
            return Err(ValidationError::LengthOrder {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.min_length < MIN_DESIGN_LENGTH || self.max_length > MAX_DESIGN_LENGTH {
            return Err(ValidationError::LengthWindow {
                min: self.min_length,
                max: self.max_length,
            });
        }
        for (field, value) in [
            ("num-samples", self.num_samples),
            ("batch-size", self.batch_size),
            ("mpnn-num-sequences", self.mpnn_num_sequences),
        ] {
            if value == 0 {
                return Err(ValidationError::ZeroCount { field });
            }
        }
        if !(self.mpnn_temperature > 0.0) || !self.mpnn_temperature.is_finite() {
            return Err(ValidationError::Temperature {
                value: self.mpnn_temperature,
            });
        }
        if self.gpus.is_empty() {
            return Err(ValidationError::NoGpus);
        }
        Ok(())
    }

    pub fn warnings(&self) -> Vec<RequestWarning> {
        let mut warnings = Vec::new();
        if self.device == Device::Cpu {
            warnings.push(RequestWarning::CpuBackboneGeneration);
        }
        warnings
    }
}
