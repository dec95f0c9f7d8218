use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("Invalid CEP: '{value}' (expected 00000-000)")]
    InvalidCep { value: String },

    #[error("No shipping region covers prefix {prefix:05}")]
    NoMatchingRegion { prefix: u32 },

    #[error("Shipping has not been calculated for this order")]
    ShippingUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that ended in an error; never 0.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ShippingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCep { .. } | Self::ShippingUnavailable => ErrorCategory::Input,
            Self::NoMatchingRegion { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ShippingUnavailable => ErrorSeverity::Low,
            Self::InvalidCep { .. } => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::NoMatchingRegion { .. } | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidCep { .. } => "Enter all 8 digits of the CEP, e.g. 01310-000",
            Self::ShippingUnavailable => "Enter a valid CEP and wait for the shipping quote",
            Self::NoMatchingRegion { .. } => {
                "Check that the rate table covers every prefix from 00000 to 99999"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file and try again",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Report this as a bug",
        }
    }

    /// Short message suitable for showing next to the form field.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidCep { .. } => "CEP inválido (formato: 00000-000)".to_string(),
            Self::ShippingUnavailable => {
                "Por favor, informe um CEP válido para calcular o frete.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippingError>;
