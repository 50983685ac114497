//! Issue search functionality.
//!
//! Case-insensitive substring search over issue titles and keys.

use crate::Issue;

/// Trait for searching issues by free text.
pub trait IssueSearcher {
    /// Returns true if the issue matches the search criteria.
    fn matches(&self, issue: &Issue) -> bool;
}

/// Search issues by title (case-insensitive).
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl IssueSearcher for TitleSearcher {
    fn matches(&self, issue: &Issue) -> bool {
        issue.title.to_lowercase().contains(&self.query)
    }
}

/// Search issues by key, e.g. `scrum-3` (case-insensitive).
pub struct KeySearcher {
    query: String,
}

impl KeySearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl IssueSearcher for KeySearcher {
    fn matches(&self, issue: &Issue) -> bool {
        issue.key.to_lowercase().contains(&self.query)
    }
}

/// Enum dispatch for searching issues by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Key(KeySearcher),
}

impl SearchBy {
    fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::Title(s) => s.matches(issue),
            Self::Key(s) => s.matches(issue),
        }
    }
}

/// Matches if any sub-searcher matches. An empty searcher, or an empty
/// query, matches everything.
#[derive(Default)]
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search both title and key.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Key(KeySearcher::new(query)),
            ],
        }
    }

    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }
}

impl IssueSearcher for CompositeSearcher {
    fn matches(&self, issue: &Issue) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(issue))
    }
}
