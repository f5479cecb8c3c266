use crate::Task;

/// Case-insensitive substring matcher for task text.
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for blank inputs.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    /// Determine whether the task's text contains the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.text.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskBook;

    fn task(text: &str) -> Task {
        let mut book = TaskBook::new();
        let id = book.add(text).unwrap_or_else(|| panic!("non-blank add must succeed"));
        book.remove(id).unwrap_or_else(|| panic!("just-added task must exist"))
    }

    #[test]
    fn matcher_skips_blank_queries() {
        assert!(TextMatcher::new("").is_none());
        assert!(TextMatcher::new("   ").is_none());
        assert!(TextMatcher::new("\n").is_none());
    }

    #[test]
    fn matcher_is_case_insensitive() {
        let walk = task("Walk the Dog");

        let matcher = TextMatcher::new("dog")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&walk));

        let matcher = TextMatcher::new("WALK")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&walk));

        let missing = TextMatcher::new("cat")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(!missing.matches(&walk));
    }

    #[test]
    fn matcher_trims_the_query() {
        let milk = task("buy milk");
        let matcher = TextMatcher::new("  milk  ")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&milk));
    }
}
