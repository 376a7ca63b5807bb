use serde::{Deserialize, Serialize};

use crate::backend::paper::Faculty;

/// The signed-in student, as handed over by the portal's auth layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub display_name: String,
    /// `None` when nobody is signed in.
    pub faculty: Option<Faculty>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            display_name: "Student".to_string(),
            faculty: Some(Faculty::Science),
        }
    }
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.faculty.is_some()
    }

    pub fn faculty_label(&self) -> &'static str {
        self.faculty.map(|f| f.as_str()).unwrap_or("")
    }
}
