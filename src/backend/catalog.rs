use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::backend::error::CatalogError;
use crate::backend::paper::{Category, Faculty, NewPaper, PaperRecord};

/// Size of the "Most Downloaded This Month" strip.
pub const MOST_DOWNLOADED_LIMIT: usize = 3;

/// Search box and dropdown state. Empty strings and `None` mean "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub term: String,
    pub subject: String,
    pub year: String,
    pub category: Option<Category>,
}

impl FilterCriteria {
    fn matches(&self, paper: &PaperRecord, term_lower: &str) -> bool {
        let matches_search = paper.title.to_lowercase().contains(term_lower)
            || paper.subject.to_lowercase().contains(term_lower);
        let matches_subject = self.subject.is_empty() || paper.subject == self.subject;
        let matches_year = self.year.is_empty() || paper.year == self.year;
        let matches_category = self.category.map_or(true, |c| paper.category == c);

        matches_search && matches_subject && matches_year && matches_category
    }
}

/// In-memory working set of papers, newest upload first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    papers: Vec<PaperRecord>,
}

impl Catalog {
    pub fn new(papers: Vec<PaperRecord>) -> Self {
        debug!(count = papers.len(), "Catalog seeded");
        Self { papers }
    }

    pub fn papers(&self) -> &[PaperRecord] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Papers of `faculty` passing every active criterion, in catalog order.
    /// No faculty means no session, and nothing is visible.
    pub fn filter(&self, faculty: Option<Faculty>, criteria: &FilterCriteria) -> Vec<&PaperRecord> {
        let Some(faculty) = faculty else {
            return Vec::new();
        };
        let term_lower = criteria.term.to_lowercase();

        self.papers
            .iter()
            .filter(|p| p.faculty == faculty && criteria.matches(p, &term_lower))
            .collect()
    }

    /// Distinct subjects among the faculty's papers, first-seen order.
    pub fn subject_facets(&self, faculty: Option<Faculty>) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for paper in self.papers.iter().filter(|p| Some(p.faculty) == faculty) {
            if !subjects.contains(&paper.subject) {
                subjects.push(paper.subject.clone());
            }
        }
        subjects
    }

    /// Distinct years across every faculty, newest first.
    pub fn year_facets(&self) -> Vec<String> {
        let mut years: Vec<String> = Vec::new();
        for paper in &self.papers {
            if !years.contains(&paper.year) {
                years.push(paper.year.clone());
            }
        }
        // Unparseable years sort after every numeric one.
        years.sort_by(|a, b| {
            let a_num = a.parse::<i64>().ok();
            let b_num = b.parse::<i64>().ok();
            match (a_num, b_num) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => b.cmp(a),
            }
        });
        years
    }

    /// Stamps id, counters, timestamp and the acting faculty, then prepends the paper.
    pub fn create(&mut self, new_paper: NewPaper, faculty: Faculty, now: DateTime<Utc>) -> &PaperRecord {
        let id = self.next_id(now);
        let has_solution = new_paper.solution_ref.is_some();

        let record = PaperRecord {
            id,
            title: new_paper.title,
            subject: new_paper.subject,
            faculty,
            class_level: new_paper.class_level,
            year: new_paper.year,
            category: new_paper.category,
            file_ref: new_paper.file_ref,
            file_type: new_paper.file_type,
            downloads: 0,
            rating: 0.0,
            created_at: now,
            has_solution,
            solution_ref: new_paper.solution_ref,
        };

        info!(
            id = %record.id,
            subject = %record.subject,
            faculty = %record.faculty,
            has_solution = record.has_solution,
            "Paper added to catalog"
        );

        self.papers.insert(0, record);
        &self.papers[0]
    }

    pub fn find(&self, id: &str) -> Result<&PaperRecord, CatalogError> {
        self.papers
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::PaperNotFound(id.to_string()))
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if !self.papers.iter().any(|p| p.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

/// Top `limit` papers by download count. Ties keep no guaranteed order.
pub fn most_downloaded<'a>(filtered: &[&'a PaperRecord], limit: usize) -> Vec<&'a PaperRecord> {
    let mut ranked = filtered.to_vec();
    ranked.sort_by(|a, b| b.downloads.cmp(&a.downloads));
    ranked.truncate(limit);
    ranked
}

/// Header counters of the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageStats {
    pub available_papers: usize,
    pub subjects_covered: usize,
    pub years_available: usize,
    pub total_downloads: u64,
}

impl PageStats {
    pub fn collect(filtered: &[&PaperRecord], subjects: &[String], years: &[String]) -> Self {
        Self {
            available_papers: filtered.len(),
            subjects_covered: subjects.len(),
            years_available: years.len(),
            total_downloads: filtered.iter().map(|p| p.downloads).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::paper::{demo_papers, ClassLevel, FileKind};
    use chrono::TimeZone;

    fn demo_catalog() -> Catalog {
        Catalog::new(demo_papers())
    }

    fn sample_new_paper(subject: &str) -> NewPaper {
        NewPaper {
            title: format!("{} Board Exam 2025", subject),
            subject: subject.to_string(),
            class_level: ClassLevel::Twelve,
            year: "2025".to_string(),
            category: Category::BoardExam,
            file_ref: "blob:abc".to_string(),
            file_type: FileKind::Pdf,
            solution_ref: None,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    fn ids(papers: &[&PaperRecord]) -> Vec<String> {
        papers.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_filters_show_faculty_papers() {
        let catalog = demo_catalog();
        let visible = catalog.filter(Some(Faculty::Science), &FilterCriteria::default());
        assert_eq!(ids(&visible), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_search_term_is_case_insensitive() {
        let catalog = demo_catalog();
        let criteria = FilterCriteria {
            term: "physics".to_string(),
            ..Default::default()
        };
        let visible = catalog.filter(Some(Faculty::Science), &criteria);
        assert_eq!(ids(&visible), vec!["1"]);

        let criteria = FilterCriteria {
            term: "BOARD".to_string(),
            ..Default::default()
        };
        let visible = catalog.filter(Some(Faculty::Science), &criteria);
        assert_eq!(ids(&visible), vec!["1", "4"]);
    }

    #[test]
    fn test_search_matches_subject_not_only_title() {
        let mut papers = demo_papers();
        papers[1].title = "Set A".to_string();
        let catalog = Catalog::new(papers);
        let criteria = FilterCriteria {
            term: "mathem".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter(Some(Faculty::Science), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_dropdown_filters_combine() {
        let catalog = demo_catalog();
        let criteria = FilterCriteria {
            year: "2022".to_string(),
            category: Some(Category::BoardExam),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter(Some(Faculty::Science), &criteria)), vec!["4"]);

        let criteria = FilterCriteria {
            subject: "Physics".to_string(),
            year: "2022".to_string(),
            ..Default::default()
        };
        assert!(catalog.filter(Some(Faculty::Science), &criteria).is_empty());
    }

    #[test]
    fn test_other_faculty_never_visible() {
        let catalog = demo_catalog();
        let criteria = FilterCriteria {
            term: "accountancy".to_string(),
            ..Default::default()
        };
        assert!(catalog.filter(Some(Faculty::Science), &criteria).is_empty());
        assert_eq!(ids(&catalog.filter(Some(Faculty::Management), &criteria)), vec!["3"]);
    }

    #[test]
    fn test_no_session_sees_nothing() {
        let catalog = demo_catalog();
        assert!(catalog.filter(None, &FilterCriteria::default()).is_empty());
        assert!(catalog.subject_facets(None).is_empty());
    }

    #[test]
    fn test_filter_membership_matches_predicates() {
        let catalog = demo_catalog();
        let all_criteria = [
            FilterCriteria::default(),
            FilterCriteria { term: "exam".into(), ..Default::default() },
            FilterCriteria { subject: "Chemistry".into(), ..Default::default() },
            FilterCriteria { year: "2024".into(), ..Default::default() },
            FilterCriteria { category: Some(Category::ModelQuestion), ..Default::default() },
        ];

        for faculty in Faculty::ALL {
            for criteria in &all_criteria {
                let visible = catalog.filter(Some(faculty), criteria);
                let term = criteria.term.to_lowercase();
                for paper in catalog.papers() {
                    let expected = paper.faculty == faculty && criteria.matches(paper, &term);
                    let present = visible.iter().any(|p| p.id == paper.id);
                    assert_eq!(expected, present, "paper {} under {:?}", paper.id, criteria);
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = demo_catalog();
        let criteria = FilterCriteria {
            term: "exam".to_string(),
            ..Default::default()
        };
        let first = ids(&catalog.filter(Some(Faculty::Science), &criteria));
        let second = ids(&catalog.filter(Some(Faculty::Science), &criteria));
        assert_eq!(first, second);
    }

    #[test]
    fn test_subject_facets_are_distinct_per_faculty() {
        let mut catalog = demo_catalog();
        catalog.create(sample_new_paper("Physics"), Faculty::Science, fixed_now());

        let subjects = catalog.subject_facets(Some(Faculty::Science));
        assert_eq!(subjects.len(), 3);
        for expected in ["Physics", "Mathematics", "Chemistry"] {
            assert!(subjects.iter().any(|s| s == expected));
        }
        assert_eq!(catalog.subject_facets(Some(Faculty::Management)), vec!["Accountancy"]);
        assert!(catalog.subject_facets(Some(Faculty::Law)).is_empty());
    }

    #[test]
    fn test_year_facets_sorted_descending() {
        let catalog = demo_catalog();
        assert_eq!(catalog.year_facets(), vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_year_facets_numeric_order() {
        let mut papers = demo_papers();
        papers[0].year = "999".to_string();
        papers[1].year = "n/a".to_string();
        let catalog = Catalog::new(papers);
        assert_eq!(catalog.year_facets(), vec!["2024", "2022", "999", "n/a"]);
    }

    #[test]
    fn test_most_downloaded_top_three() {
        let catalog = demo_catalog();
        let visible = catalog.filter(Some(Faculty::Science), &FilterCriteria::default());
        let top = most_downloaded(&visible, MOST_DOWNLOADED_LIMIT);
        let counts: Vec<u64> = top.iter().map(|p| p.downloads).collect();
        assert_eq!(counts, vec![1250, 1100, 890]);
    }

    #[test]
    fn test_most_downloaded_caps_and_ties() {
        let mut catalog = demo_catalog();
        catalog.create(sample_new_paper("Biology"), Faculty::Science, fixed_now());
        catalog.create(sample_new_paper("Physics"), Faculty::Science, fixed_now());

        let visible = catalog.filter(Some(Faculty::Science), &FilterCriteria::default());
        assert_eq!(visible.len(), 5);
        let top = most_downloaded(&visible, MOST_DOWNLOADED_LIMIT);
        assert_eq!(top.len(), 3);

        // Order among equal counts is unspecified; only check which counts made the cut.
        let bottom = most_downloaded(&visible, 5);
        let tail: Vec<u64> = bottom[3..].iter().map(|p| p.downloads).collect();
        assert_eq!(tail, vec![0, 0]);
    }

    #[test]
    fn test_page_stats() {
        let catalog = demo_catalog();
        let visible = catalog.filter(Some(Faculty::Science), &FilterCriteria::default());
        let subjects = catalog.subject_facets(Some(Faculty::Science));
        let years = catalog.year_facets();
        let stats = PageStats::collect(&visible, &subjects, &years);
        assert_eq!(
            stats,
            PageStats {
                available_papers: 3,
                subjects_covered: 3,
                years_available: 3,
                total_downloads: 1250 + 890 + 1100,
            }
        );
    }

    #[test]
    fn test_create_prepends_with_zeroed_counters() {
        let mut catalog = demo_catalog();
        let now = fixed_now();
        let created = catalog.create(sample_new_paper("Biology"), Faculty::Science, now).clone();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.papers()[0], created);
        assert_eq!(created.id, now.timestamp_millis().to_string());
        assert_eq!(created.downloads, 0);
        assert_eq!(created.rating, 0.0);
        assert_eq!(created.created_at, now);
        assert!(!created.has_solution);
    }

    #[test]
    fn test_create_forces_acting_faculty() {
        let mut catalog = demo_catalog();
        let created = catalog.create(sample_new_paper("Accountancy"), Faculty::Science, fixed_now());
        assert_eq!(created.faculty, Faculty::Science);
    }

    #[test]
    fn test_create_sets_solution_flag() {
        let mut catalog = Catalog::default();
        let mut new_paper = sample_new_paper("Physics");
        new_paper.solution_ref = Some("blob:def".to_string());
        let created = catalog.create(new_paper, Faculty::Science, fixed_now());
        assert!(created.has_solution);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut catalog = Catalog::default();
        let now = fixed_now();
        for _ in 0..3 {
            catalog.create(sample_new_paper("Physics"), Faculty::Science, now);
        }
        let mut all: Vec<&str> = catalog.papers().iter().map(|p| p.id.as_str()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_find_reports_missing_id() {
        let catalog = demo_catalog();
        assert_eq!(catalog.find("3").map(|p| p.subject.as_str()), Ok("Accountancy"));
        assert_eq!(
            catalog.find("42"),
            Err(CatalogError::PaperNotFound("42".to_string()))
        );
    }

    #[test]
    fn test_demo_scenario() {
        let catalog = demo_catalog();
        let science = Some(Faculty::Science);
        assert_eq!(catalog.filter(science, &FilterCriteria::default()).len(), 3);

        let criteria = FilterCriteria {
            term: "physics".to_string(),
            ..Default::default()
        };
        let visible = catalog.filter(science, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].subject, "Physics");
    }
}
