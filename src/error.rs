use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// File access errors
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// Library export parsing errors
    #[error("csv error: {0}")]
    Csv(#[from] CsvError),
    /// Configuration errors
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Page rendering errors
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// File access errors
#[derive(Debug, Error)]
pub enum FileError {
    /// Input file does not exist
    #[error("file not found: {path}")]
    NotFound { path: String },
    /// Reading failed
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Writing failed
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Output directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Library export parsing errors
#[derive(Debug, Error)]
pub enum CsvError {
    /// The header row could not be read
    #[error("malformed header row: {source}")]
    BadHeader {
        #[source]
        source: csv::Error,
    },
    /// A data row could not be read
    #[error("malformed record on line {line}: {source}")]
    BadRecord {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML config file could not be parsed
    #[error("failed to parse config file {path}: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// An environment variable held a value of the wrong type
    #[error("environment variable {var_name}: value '{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// Page rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// A required page setting was left blank
    #[error("page setting '{field}' must not be empty")]
    EmptySetting { field: &'static str },
}

// ========== convenience constructors ==========

impl AppError {
    /// Input file is missing
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// Reading a file failed
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// Writing a file failed
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// Creating the output directory failed
    pub fn create_dir_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.into(),
            source,
        })
    }

    /// A CSV record could not be decoded
    pub fn bad_record(line: u64, source: csv::Error) -> Self {
        AppError::Csv(CsvError::BadRecord { line, source })
    }

    /// An environment variable could not be parsed
    pub fn env_var_parse_failed(
        var_name: impl Into<String>,
        value: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.into(),
            value: value.into(),
            expected_type: expected_type.into(),
        })
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;
