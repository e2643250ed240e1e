use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Pixel data unavailable: {message}")]
    PixelData { message: String },

    #[error("Contract violation: {message}")]
    ContractViolation { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AuraError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Decode,
    Contract,
    Io,
    Config,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AuraError {
    /// Decode-kind errors are the only ones the pipeline recovers from
    /// (by switching to the seed-based mapper).
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::PixelData { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode(_) | Self::PixelData { .. } => ErrorCategory::Decode,
            Self::ContractViolation { .. } => ErrorCategory::Contract,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Decode(_) | Self::PixelData { .. } => ErrorSeverity::Medium,
            Self::ContractViolation { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Decode(_) | Self::PixelData { .. } => {
                "The photo could not be decoded as an image".to_string()
            }
            Self::ContractViolation { message } => {
                format!("Internal pipeline contract broken: {message}")
            }
            Self::IoError(e) => format!("File access failed: {e}"),
            Self::SerializationError(e) => format!("Could not write the analysis record: {e}"),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{field}': {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Decode => {
                "Check that the input file is a valid PNG or JPEG photo".to_string()
            }
            ErrorCategory::Contract => {
                "This is a bug in aura-lens; please report it with the photo that triggered it"
                    .to_string()
            }
            ErrorCategory::Io => {
                "Check that the input exists and the output directory is writable".to_string()
            }
            ErrorCategory::Serialization => {
                "Check free disk space and output directory permissions".to_string()
            }
            ErrorCategory::Config => "Run with --help to see valid options".to_string(),
        }
    }
}
