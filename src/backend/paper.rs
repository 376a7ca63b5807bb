use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Faculty {
    Science,
    Management,
    Humanities,
    Law,
    Education,
}

impl Faculty {
    pub const ALL: [Faculty; 5] = [
        Faculty::Science,
        Faculty::Management,
        Faculty::Humanities,
        Faculty::Law,
        Faculty::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Faculty::Science => "Science",
            Faculty::Management => "Management",
            Faculty::Humanities => "Humanities",
            Faculty::Law => "Law",
            Faculty::Education => "Education",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// Subjects offered by the upload form for this faculty.
    pub fn subjects(&self) -> &'static [&'static str] {
        match self {
            Faculty::Science => &["Mathematics", "Physics", "Chemistry", "Biology", "Computer Science"],
            Faculty::Management => &["Accountancy", "Economics", "Business Studies", "Marketing", "Finance"],
            Faculty::Humanities => &["Sociology", "Psychology", "History", "Geography", "Political Science"],
            Faculty::Law => &["Constitutional Law", "Criminal Law", "Civil Law", "Legal Studies"],
            Faculty::Education => &[
                "Teaching Methods",
                "Educational Psychology",
                "Curriculum Development",
                "Pedagogy",
            ],
        }
    }

    pub fn offers(&self, subject: &str) -> bool {
        self.subjects().contains(&subject)
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClassLevel {
    #[serde(rename = "11")]
    Eleven,
    #[serde(rename = "12")]
    Twelve,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 2] = [ClassLevel::Eleven, ClassLevel::Twelve];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLevel::Eleven => "11",
            ClassLevel::Twelve => "12",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Board Exam")]
    BoardExam,
    #[serde(rename = "Model Question")]
    ModelQuestion,
    #[serde(rename = "Important Questions")]
    ImportantQuestions,
}

impl Category {
    /// Fixed category facet, in display order.
    pub const ALL: [Category; 3] = [
        Category::BoardExam,
        Category::ModelQuestion,
        Category::ImportantQuestions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BoardExam => "Board Exam",
            Category::ModelQuestion => "Model Question",
            Category::ImportantQuestions => "Important Questions",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    #[default]
    Pdf,
    Doc,
}

impl FileKind {
    /// Maps an uploaded file name to its kind. `None` for anything outside pdf/doc/docx.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "doc" | "docx" => Some(FileKind::Doc),
            _ => None,
        }
    }
}

/// A past-year question paper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub faculty: Faculty,
    #[serde(rename = "class")]
    pub class_level: ClassLevel,
    pub year: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "fileUrl")]
    pub file_ref: String,
    pub file_type: FileKind,
    pub downloads: u64,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub has_solution: bool,
    #[serde(default, rename = "solutionUrl", skip_serializing_if = "Option::is_none")]
    pub solution_ref: Option<String>,
}

/// Everything a new paper carries before the catalog stamps id, counters and faculty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaper {
    pub title: String,
    pub subject: String,
    pub class_level: ClassLevel,
    pub year: String,
    pub category: Category,
    pub file_ref: String,
    pub file_type: FileKind,
    pub solution_ref: Option<String>,
}

/// "Just now", "5h ago" or "3d ago", rounded down.
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Five star slots; the first `floor(rating)` are filled.
pub fn star_states(rating: f32) -> [bool; 5] {
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    std::array::from_fn(|i| i < filled)
}

fn seeded_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

/// Sample papers shown before anyone uploads.
pub fn demo_papers() -> Vec<PaperRecord> {
    vec![
        PaperRecord {
            id: "1".to_string(),
            title: "Physics Board Exam 2023".to_string(),
            subject: "Physics".to_string(),
            faculty: Faculty::Science,
            class_level: ClassLevel::Twelve,
            year: "2023".to_string(),
            category: Category::BoardExam,
            file_ref: "#".to_string(),
            file_type: FileKind::Pdf,
            downloads: 1250,
            rating: 4.8,
            created_at: seeded_at(2024, 1, 15, 10, 0),
            has_solution: true,
            solution_ref: Some("#solution1".to_string()),
        },
        PaperRecord {
            id: "2".to_string(),
            title: "Mathematics Model Questions Set A".to_string(),
            subject: "Mathematics".to_string(),
            faculty: Faculty::Science,
            class_level: ClassLevel::Eleven,
            year: "2024".to_string(),
            category: Category::ModelQuestion,
            file_ref: "#".to_string(),
            file_type: FileKind::Pdf,
            downloads: 890,
            rating: 4.6,
            created_at: seeded_at(2024, 1, 10, 14, 30),
            has_solution: false,
            solution_ref: None,
        },
        PaperRecord {
            id: "3".to_string(),
            title: "Accountancy Important Questions".to_string(),
            subject: "Accountancy".to_string(),
            faculty: Faculty::Management,
            class_level: ClassLevel::Twelve,
            year: "2024".to_string(),
            category: Category::ImportantQuestions,
            file_ref: "#".to_string(),
            file_type: FileKind::Pdf,
            downloads: 567,
            rating: 4.5,
            created_at: seeded_at(2024, 1, 8, 9, 15),
            has_solution: true,
            solution_ref: Some("#solution3".to_string()),
        },
        PaperRecord {
            id: "4".to_string(),
            title: "Chemistry Board Exam 2022".to_string(),
            subject: "Chemistry".to_string(),
            faculty: Faculty::Science,
            class_level: ClassLevel::Twelve,
            year: "2022".to_string(),
            category: Category::BoardExam,
            file_ref: "#".to_string(),
            file_type: FileKind::Pdf,
            downloads: 1100,
            rating: 4.7,
            created_at: seeded_at(2024, 1, 5, 16, 45),
            has_solution: true,
            solution_ref: Some("#solution4".to_string()),
        },
    ]
}
