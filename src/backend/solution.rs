use tracing::debug;

use crate::backend::blobs::BlobStore;
use crate::backend::catalog::Catalog;
use crate::backend::error::CatalogError;

/// What the solution modal shows for one paper.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionView {
    pub paper_id: String,
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub description: String,
    pub has_solution: bool,
    /// Data URL of the uploaded solution. `None` leaves download and view-online inert.
    pub artifact_url: Option<String>,
}

impl SolutionView {
    pub fn open(catalog: &Catalog, blobs: &BlobStore, paper_id: &str) -> Result<Self, CatalogError> {
        let paper = catalog.find(paper_id)?;
        let artifact_url = paper
            .solution_ref
            .as_deref()
            .and_then(|reference| blobs.resolve(reference));

        debug!(
            paper_id = %paper.id,
            resolvable = artifact_url.is_some(),
            "Opened solution view"
        );

        Ok(Self {
            paper_id: paper.id.clone(),
            title: paper.title.clone(),
            heading: format!("{} - Solutions", paper.title),
            subtitle: format!("{} • Class {} • {}", paper.subject, paper.class_level, paper.year),
            description: format!("Complete step-by-step solutions for {}", paper.title),
            has_solution: paper.has_solution,
            artifact_url,
        })
    }

    pub fn actions_enabled(&self) -> bool {
        self.artifact_url.is_some()
    }

    /// Suggested download name, e.g. "physics-board-exam-2023-solution".
    pub fn download_name(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("{}-solution", slug)
    }
}
