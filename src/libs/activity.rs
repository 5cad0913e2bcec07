//! Time entry activities and fuzzy activity lookup.
//!
//! Redmine requires an activity ("development", "code review", …) on every
//! time entry. Users type a short query instead of the full name; the query
//! is resolved against the tracker's activity list and must identify exactly
//! one activity.
//!
//! A query matches an activity, ignoring case, when it is:
//!
//! 1. the activity id (`2`)
//! 2. the full name (`code review`)
//! 3. a substring of one word of the name (`rev`)
//! 4. the acronym of the name (`cr`)

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Activity {
    pub id: u32,
    pub name: String,
}

impl Activity {
    pub fn new(id: u32, name: &str) -> Self {
        Self { id, name: name.to_owned() }
    }

    /// First letter of every word of the name, lowercased.
    pub fn acronym(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Whether `query` designates this activity.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }

        let name = self.name.to_lowercase();

        query == self.id.to_string()
            || query == name
            || name.split_whitespace().any(|word| word.contains(&query))
            || query == self.acronym()
    }
}

/// Resolves `query` to the single activity it designates.
///
/// # Errors
///
/// - [`Error::NoMatch`] if no activity matches
/// - [`Error::AmbiguousMatch`] if two or more distinct activities match
pub fn match_activity(query: &str, activities: &[Activity]) -> Result<Activity> {
    let mut matched: Vec<&Activity> = Vec::new();
    for activity in activities.iter().filter(|activity| activity.matches(query)) {
        if !matched.contains(&activity) {
            matched.push(activity);
        }
    }

    match matched.as_slice() {
        [] => Err(Error::NoMatch(query.to_owned())),
        [activity] => Ok((*activity).clone()),
        _ => Err(Error::AmbiguousMatch {
            query: query.to_owned(),
            candidates: matched.iter().map(|activity| activity.name.clone()).collect(),
        }),
    }
}
