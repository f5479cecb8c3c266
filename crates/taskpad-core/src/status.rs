use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::Task;

/// Status predicate applied to the task list for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every task.
    #[default]
    All,
    /// Only completed tasks.
    Completed,
    /// Only tasks not yet completed.
    Pending,
}

impl StatusFilter {
    /// Whether the task passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }

    /// Cycle to the next filter: All -> Completed -> Pending -> All.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Pending,
            Self::Pending => Self::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        };
        f.write_str(label)
    }
}

/// Error returned when a filter token is not recognized.
#[derive(Debug, Error)]
#[error("invalid status filter: {token}")]
pub struct ParseStatusFilterError {
    /// The rejected input.
    pub token: String,
}

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "pending" | "open" => Ok(Self::Pending),
            _ => Err(ParseStatusFilterError { token: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskBook;

    fn tasks() -> TaskBook {
        let mut book = TaskBook::new();
        let _ = book.add("buy milk");
        let dog = book.add("walk dog").unwrap_or_else(|| panic!("non-blank add must succeed"));
        book.toggle(dog);
        book
    }

    #[test]
    fn all_matches_everything() {
        let book = tasks();
        assert!(book.tasks().iter().all(|t| StatusFilter::All.matches(t)));
    }

    #[test]
    fn completed_and_pending_partition_the_list() {
        let book = tasks();
        let completed: Vec<_> = book
            .tasks()
            .iter()
            .filter(|t| StatusFilter::Completed.matches(t))
            .map(|t| t.text.as_str())
            .collect();
        let pending: Vec<_> = book
            .tasks()
            .iter()
            .filter(|t| StatusFilter::Pending.matches(t))
            .map(|t| t.text.as_str())
            .collect();

        assert_eq!(completed, vec!["walk dog"]);
        assert_eq!(pending, vec!["buy milk"]);
    }

    #[test]
    fn cycle_visits_every_filter() {
        let start = StatusFilter::All;
        assert_eq!(start.next(), StatusFilter::Completed);
        assert_eq!(start.next().next(), StatusFilter::Pending);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn parse_accepts_case_insensitive_tokens() {
        assert_eq!("All".parse::<StatusFilter>().ok(), Some(StatusFilter::All));
        assert_eq!(" DONE ".parse::<StatusFilter>().ok(), Some(StatusFilter::Completed));
        assert_eq!("pending".parse::<StatusFilter>().ok(), Some(StatusFilter::Pending));
        assert!("later".parse::<StatusFilter>().is_err());
    }
}
