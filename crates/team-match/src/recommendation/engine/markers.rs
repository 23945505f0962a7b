//! Predicates recognising "high" Big Five markers in free-text trait values.
//!
//! Trait rows arrive as loosely formatted strings such as `Conscientiousness:High`,
//! `agreeableness - high` or a localized phrase. Each marker is a [`MarkerMatcher`]
//! so additional locales or formats plug in without touching the scoring math.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a single big5 trait value carries a marker.
pub trait MarkerMatcher: Send + Sync {
    fn matches(&self, value: &str) -> bool;
}

impl<F> MarkerMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, value: &str) -> bool {
        self(value)
    }
}

/// Matches `<trait name><separator><qualifier>` in any of several spellings,
/// plus whole localized phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighMarker {
    names: Vec<String>,
    qualifiers: Vec<String>,
    phrases: Vec<String>,
}

impl HighMarker {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
            qualifiers: vec!["high".to_string()],
            phrases: Vec::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: &str) -> Self {
        self.qualifiers.push(qualifier.to_lowercase());
        self
    }

    /// Adds a phrase that matches anywhere in the value, ignoring case and whitespace.
    pub fn with_phrase(mut self, phrase: &str) -> Self {
        self.phrases.push(compact(phrase));
        self
    }

    pub fn conscientiousness() -> Self {
        Self::new(["conscientiousness", "성실성"])
            .with_qualifier("높음")
            .with_phrase("높은 성실성")
    }

    pub fn agreeableness() -> Self {
        Self::new(["agreeableness", "친화성", "우호성"])
            .with_qualifier("높음")
            .with_phrase("높은 친화성")
            .with_phrase("높은 우호성")
    }

    fn qualifier_follows(&self, rest: &str) -> bool {
        let rest = rest.trim_start_matches(|c: char| {
            c.is_whitespace() || matches!(c, ':' | '-' | '=' | '_' | '(' | '/')
        });
        self.qualifiers.iter().any(|qualifier| {
            rest.strip_prefix(qualifier.as_str())
                .is_some_and(|after| !after.starts_with(char::is_alphanumeric))
        })
    }
}

impl MarkerMatcher for HighMarker {
    fn matches(&self, value: &str) -> bool {
        let lowered = value.to_lowercase();

        let named = self.names.iter().any(|name| {
            lowered
                .match_indices(name.as_str())
                .any(|(start, _)| self.qualifier_follows(&lowered[start + name.len()..]))
        });
        if named {
            return true;
        }

        let compacted = compact(&lowered);
        self.phrases
            .iter()
            .any(|phrase| !phrase.is_empty() && compacted.contains(phrase.as_str()))
    }
}

fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The pair of markers the personality scorer looks for.
#[derive(Clone)]
pub struct PersonalityMarkers {
    pub conscientiousness: Arc<dyn MarkerMatcher>,
    pub agreeableness: Arc<dyn MarkerMatcher>,
}

impl PersonalityMarkers {
    pub fn new(
        conscientiousness: Arc<dyn MarkerMatcher>,
        agreeableness: Arc<dyn MarkerMatcher>,
    ) -> Self {
        Self {
            conscientiousness,
            agreeableness,
        }
    }
}

impl Default for PersonalityMarkers {
    fn default() -> Self {
        Self {
            conscientiousness: Arc::new(HighMarker::conscientiousness()),
            agreeableness: Arc::new(HighMarker::agreeableness()),
        }
    }
}

impl fmt::Debug for PersonalityMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalityMarkers").finish_non_exhaustive()
    }
}
