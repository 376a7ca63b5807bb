use tracing::{info, warn};

use crate::backend::blobs::BlobStore;
use crate::backend::error::UploadError;
use crate::backend::paper::{Category, ClassLevel, Faculty, FileKind, NewPaper};

/// A file picked in the upload modal, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// e.g. "1.25 MB"
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size() as f64 / 1024.0 / 1024.0)
    }

    fn mime_type(&self, kind: FileKind) -> String {
        self.content_type
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| match kind {
                FileKind::Pdf => "application/pdf".to_string(),
                FileKind::Doc => "application/msword".to_string(),
            })
    }
}

/// Limits applied on top of the required-field checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadRules {
    pub current_year: i32,
    pub recent_year_count: usize,
    pub max_upload_bytes: u64,
}

impl UploadRules {
    pub fn allowed_years(&self) -> Vec<String> {
        recent_years(self.current_year, self.recent_year_count)
    }

    /// Shown under each file picker, e.g. "PDF, DOC, DOCX up to 10MB".
    pub fn file_hint(&self) -> String {
        format!("PDF, DOC, DOCX up to {}", limit_label(self.max_upload_bytes))
    }
}

fn limit_label(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{}B", bytes)
    }
}

/// `count` years ending at `current_year`, newest first.
pub fn recent_years(current_year: i32, count: usize) -> Vec<String> {
    (0..count as i32).map(|i| (current_year - i).to_string()).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub subject: String,
    pub class_level: Option<ClassLevel>,
    pub year: String,
    pub category: Category,
    pub file: Option<SelectedFile>,
    pub solution: Option<SelectedFile>,
}

/// A submission that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadDraft {
    pub title: String,
    pub subject: String,
    pub class_level: ClassLevel,
    pub year: String,
    pub category: Category,
    pub file_kind: FileKind,
    pub file: SelectedFile,
    pub solution: Option<SelectedFile>,
}

impl UploadForm {
    pub fn validate(&self, faculty: Option<Faculty>, rules: &UploadRules) -> Result<UploadDraft, UploadError> {
        let result = self.check(faculty, rules);
        if let Err(e) = &result {
            warn!(reason = %e, "Upload rejected");
        }
        result
    }

    fn check(&self, faculty: Option<Faculty>, rules: &UploadRules) -> Result<UploadDraft, UploadError> {
        let faculty = faculty.ok_or(UploadError::NoFaculty)?;

        let title = self.title.trim();
        if title.is_empty() {
            return Err(UploadError::MissingTitle);
        }
        if self.subject.is_empty() {
            return Err(UploadError::MissingSubject);
        }
        let class_level = self.class_level.ok_or(UploadError::MissingClass)?;
        if self.year.is_empty() {
            return Err(UploadError::MissingYear);
        }
        let file = self.file.as_ref().ok_or(UploadError::MissingFile)?;

        if !faculty.offers(&self.subject) {
            return Err(UploadError::SubjectNotOffered {
                subject: self.subject.clone(),
                faculty,
            });
        }
        if !rules.allowed_years().contains(&self.year) {
            return Err(UploadError::YearOutOfRange(self.year.clone()));
        }

        let file_kind = check_file(file, rules)?;
        if let Some(solution) = &self.solution {
            check_file(solution, rules)?;
        }

        Ok(UploadDraft {
            title: title.to_string(),
            subject: self.subject.clone(),
            class_level,
            year: self.year.clone(),
            category: self.category,
            file_kind,
            file: file.clone(),
            solution: self.solution.clone(),
        })
    }
}

fn check_file(file: &SelectedFile, rules: &UploadRules) -> Result<FileKind, UploadError> {
    let kind = FileKind::from_file_name(&file.name)
        .ok_or_else(|| UploadError::UnsupportedFileType(file.name.clone()))?;
    if file.size() > rules.max_upload_bytes {
        return Err(UploadError::FileTooLarge {
            name: file.name.clone(),
            size: file.size(),
            limit: rules.max_upload_bytes,
        });
    }
    Ok(kind)
}

impl UploadDraft {
    /// Hands the files to the local blob store and swaps them for references.
    pub fn into_new_paper(self, blobs: &mut BlobStore) -> NewPaper {
        let file_ref = blobs.put(&self.file.mime_type(self.file_kind), &self.file.bytes);
        let solution_ref = self.solution.map(|solution| {
            let kind = FileKind::from_file_name(&solution.name).unwrap_or_default();
            blobs.put(&solution.mime_type(kind), &solution.bytes)
        });

        info!(
            file = %self.file.name,
            file_ref = %file_ref,
            with_solution = solution_ref.is_some(),
            "Upload accepted"
        );

        NewPaper {
            title: self.title,
            subject: self.subject,
            class_level: self.class_level,
            year: self.year,
            category: self.category,
            file_ref,
            file_type: self.file_kind,
            solution_ref,
        }
    }
}
