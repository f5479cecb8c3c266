use crate::{StatusFilter, Task, TextMatcher};

/// Derive the visible subset of `tasks` for the given filter and search
/// matcher, preserving source order.
///
/// Pure function of its inputs: call it again whenever the list, the
/// filter or the search text changes. A `None` matcher (blank query)
/// keeps every task that passes the status filter.
#[must_use]
pub fn visible<'a>(
    tasks: &'a [Task],
    filter: StatusFilter,
    matcher: Option<&TextMatcher>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| matcher.is_none_or(|m| m.matches(task)))
        .collect()
}
