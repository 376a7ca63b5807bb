//! Error types for the PYQ backend

use thiserror::Error;

use crate::backend::paper::Faculty;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("No paper with id {0}")]
    PaperNotFound(String),
}

/// Reasons an upload submission is rejected. The `Display` text is shown in the upload modal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Sign in to upload papers")]
    NoFaculty,

    #[error("Enter a title")]
    MissingTitle,

    #[error("Select a subject")]
    MissingSubject,

    #[error("Select a class")]
    MissingClass,

    #[error("Select a year")]
    MissingYear,

    #[error("Choose a question paper file")]
    MissingFile,

    #[error("{subject} is not offered by the {faculty} faculty")]
    SubjectNotOffered { subject: String, faculty: Faculty },

    #[error("Year {0} is outside the accepted range")]
    YearOutOfRange(String),

    #[error("{0} is not a PDF, DOC or DOCX file")]
    UnsupportedFileType(String),

    #[error("{name} is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { name: String, size: u64, limit: u64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}
