use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for platform users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier wrapper for project teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only snapshot of a person who may be recommended to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: UserId,
    pub name: String,
    pub contact: String,
    pub region: Option<String>,
    pub job_field: Option<String>,
    pub skills_raw: Option<String>,
}

impl Candidate {
    /// Skills as entered, split on commas with surrounding whitespace removed.
    pub fn skills(&self) -> Vec<String> {
        self.skills_raw
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|skill| !skill.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Lower-cased skill set used for every comparison.
    pub fn normalized_skills(&self) -> BTreeSet<String> {
        self.skills()
            .iter()
            .map(|skill| normalize_skill(skill))
            .collect()
    }
}

pub(crate) fn normalize_skill(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Team under evaluation together with its accepted members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: TeamId,
    pub name: String,
    pub region: Option<String>,
    pub members: BTreeSet<UserId>,
}

impl TeamSnapshot {
    pub fn is_member(&self, user: UserId) -> bool {
        self.members.contains(&user)
    }
}

/// Membership state as recorded by the team store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Accepted,
    Pending,
    Rejected,
}

impl MembershipStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "accepted" => Some(Self::Accepted),
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

/// Trait categories the engine understands. Anything else is carried as `Other` and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraitCategory {
    Belbin,
    Big5,
    Other(String),
}

impl TraitCategory {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "belbin" => Self::Belbin,
            "big5" | "big_five" | "bigfive" => Self::Big5,
            _ => Self::Other(value.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Belbin => "belbin",
            Self::Big5 => "big5",
            Self::Other(raw) => raw,
        }
    }
}

impl Serialize for TraitCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TraitCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A single categorized trait row for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitTag {
    pub user_id: UserId,
    pub category: TraitCategory,
    pub value: String,
}

impl TraitTag {
    pub fn new(user_id: UserId, category: &str, value: impl Into<String>) -> Self {
        Self {
            user_id,
            category: TraitCategory::parse(category),
            value: value.into(),
        }
    }
}

/// Canonical Belbin team-role vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BelbinRole {
    Plant,
    Implementer,
    CompleterFinisher,
    Coordinator,
    Shaper,
    ResourceInvestigator,
    Teamworker,
    MonitorEvaluator,
    Specialist,
}

impl BelbinRole {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Plant,
            Self::Implementer,
            Self::CompleterFinisher,
            Self::Coordinator,
            Self::Shaper,
            Self::ResourceInvestigator,
            Self::Teamworker,
            Self::MonitorEvaluator,
            Self::Specialist,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plant => "Plant",
            Self::Implementer => "Implementer",
            Self::CompleterFinisher => "Completer Finisher",
            Self::Coordinator => "Coordinator",
            Self::Shaper => "Shaper",
            Self::ResourceInvestigator => "Resource Investigator",
            Self::Teamworker => "Teamworker",
            Self::MonitorEvaluator => "Monitor Evaluator",
            Self::Specialist => "Specialist",
        }
    }

    /// Parses a role label, ignoring case, spacing, hyphens and underscores.
    pub fn parse(value: &str) -> Option<Self> {
        let key: String = value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        Self::ordered().into_iter().find(|role| {
            let canonical: String = role
                .label()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            canonical == key
        })
    }
}

impl fmt::Display for BelbinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-user trait values the engine consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTraits {
    pub belbin: Vec<String>,
    pub big5: Vec<String>,
}

impl UserTraits {
    pub fn has_belbin(&self) -> bool {
        !self.belbin.is_empty()
    }

    pub fn has_big5(&self) -> bool {
        !self.big5.is_empty()
    }

    /// Canonical roles held, deduplicated; unrecognized labels are skipped.
    pub fn roles(&self) -> BTreeSet<BelbinRole> {
        self.belbin
            .iter()
            .filter_map(|value| BelbinRole::parse(value))
            .collect()
    }
}

/// Trait snapshot grouped by user, materialized once per request.
#[derive(Debug, Clone, Default)]
pub struct TraitIndex {
    by_user: BTreeMap<UserId, UserTraits>,
}

impl TraitIndex {
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a TraitTag>,
    {
        let mut by_user: BTreeMap<UserId, UserTraits> = BTreeMap::new();
        for tag in tags {
            match tag.category {
                TraitCategory::Belbin => by_user
                    .entry(tag.user_id)
                    .or_default()
                    .belbin
                    .push(tag.value.clone()),
                TraitCategory::Big5 => by_user
                    .entry(tag.user_id)
                    .or_default()
                    .big5
                    .push(tag.value.clone()),
                TraitCategory::Other(_) => {}
            }
        }
        Self { by_user }
    }

    pub fn get(&self, user: UserId) -> Option<&UserTraits> {
        self.by_user.get(&user)
    }

    /// Traits for `user`, or an empty record when nothing is on file.
    pub fn traits_for(&self, user: UserId) -> UserTraits {
        self.by_user.get(&user).cloned().unwrap_or_default()
    }
}

/// Caller supplied recruitment requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub required_job_field: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub desired_roles: Vec<String>,
    #[serde(default = "default_emphasis", deserialize_with = "lenient_flag")]
    pub emphasize_conscientiousness: bool,
    #[serde(default = "default_emphasis", deserialize_with = "lenient_flag")]
    pub emphasize_agreeableness: bool,
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<i64>,
}

fn default_emphasis() -> bool {
    true
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(raw) => Some(raw),
        _ => None,
    })
}

/// Arrays keep their string entries, a bare string is split on commas, anything else is empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(entry) => Some(entry),
                _ => None,
            })
            .collect(),
        serde_json::Value::String(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

/// Booleans and `"true"`/`"false"` strings are honoured; anything else keeps the emphasis on.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::String(raw) => !raw.trim().eq_ignore_ascii_case("false"),
        _ => default_emphasis(),
    })
}

/// Accepts integers, floats and numeric strings; anything else falls back to the default limit.
fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        serde_json::Value::String(raw) => {
            let trimmed = raw.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    })
}

impl Default for ScoringRequest {
    fn default() -> Self {
        Self {
            required_job_field: None,
            required_skills: Vec::new(),
            desired_roles: Vec::new(),
            emphasize_conscientiousness: true,
            emphasize_agreeableness: true,
            limit: None,
        }
    }
}

impl ScoringRequest {
    /// Required skills trimmed, lower-cased and deduplicated; blanks are dropped.
    pub fn normalized_skills(&self) -> BTreeSet<String> {
        self.required_skills
            .iter()
            .map(|skill| normalize_skill(skill))
            .filter(|skill| !skill.is_empty())
            .collect()
    }

    /// The required job field, ignoring blank input.
    pub fn job_field(&self) -> Option<&str> {
        self.required_job_field
            .as_deref()
            .map(str::trim)
            .filter(|field| !field.is_empty())
    }
}
