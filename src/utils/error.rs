use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    /// `detail` 依操作不同：查詢、刪除、更新各有自己的說法
    #[error("{name} {detail}")]
    NotFound { name: String, detail: &'static str },

    #[error("{name} already exist in Library, Can't be added.")]
    AlreadyExists { name: String },

    #[error("{name} is already assigned.")]
    AlreadyAssigned { name: String },

    #[error("{name} is assigned, First collect the book and then try removing.")]
    InvalidState { name: String },

    #[error("{customer} is not available. Check the name.")]
    UnknownCustomer { customer: String },

    #[error("Book can't be assigned for more than two weeks.")]
    DurationTooLong { requested: u32, max: u32 },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Input,
    Config,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LibraryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. }
            | Self::AlreadyExists { .. }
            | Self::AlreadyAssigned { .. }
            | Self::InvalidState { .. }
            | Self::UnknownCustomer { .. }
            | Self::DurationTooLong { .. } => ErrorCategory::Catalog,
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::TomlError(_) | Self::ConfigValidationError { .. } => ErrorCategory::Config,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Output,
        }
    }

    /// 目錄操作被拒絕只算警告，程式仍正常結束
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Catalog | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::NotFound { .. } => "Run show_books to list the books in the library".to_string(),
            Self::AlreadyExists { name } => {
                format!("Use update_book to change {} instead of adding it again", name)
            }
            Self::AlreadyAssigned { name } => {
                format!("Clear the status of {} with update_book before assigning it", name)
            }
            Self::InvalidState { name } => {
                format!("Collect {} and run update_book with status=false first", name)
            }
            Self::UnknownCustomer { .. } => {
                "Check the customer roster in the library configuration".to_string()
            }
            Self::DurationTooLong { max, .. } => {
                format!("Choose a duration of at most {} days", max)
            }
            Self::InvalidInput { field, .. } => format!("Provide a non-empty value for {}", field),
            Self::IoError(_) => "Check that the configuration file exists and is readable".to_string(),
            Self::TomlError(_) => "Make sure the configuration file is valid TOML".to_string(),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Try a different --format for the listing".to_string()
            }
            Self::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Catalog | ErrorCategory::Input => self.to_string(),
            ErrorCategory::Config => format!("Library configuration is invalid: {}", self),
            ErrorCategory::Io => format!("Could not read library configuration: {}", self),
            ErrorCategory::Output => format!("Could not render the book listing: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
