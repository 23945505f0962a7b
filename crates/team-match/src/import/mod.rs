//! CSV-backed snapshot of teams, users, memberships and traits.
//!
//! The directory layout is four files: `teams.csv`, `users.csv`, `memberships.csv`
//! and `traits.csv`. Row order in `users.csv` becomes the candidate retrieval order.

mod parser;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::recommendation::domain::{
    Candidate, MembershipStatus, TeamId, TeamSnapshot, TraitTag, UserId,
};
use crate::recommendation::repository::{DirectoryError, TeamDirectory, TraitStore};
use parser::{MembershipRow, TeamRow, TraitRow, UserRow};

#[derive(Debug)]
pub enum ImportError {
    Io { path: PathBuf, source: std::io::Error },
    Csv(csv::Error),
    UnknownStatus { team_id: u64, user_id: u64, status: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ImportError::Csv(err) => write!(f, "invalid dataset CSV data: {}", err),
            ImportError::UnknownStatus {
                team_id,
                user_id,
                status,
            } => write!(
                f,
                "membership of user {} in team {} has unknown status '{}'",
                user_id, team_id, status
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io { source, .. } => Some(source),
            ImportError::Csv(err) => Some(err),
            ImportError::UnknownStatus { .. } => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// In-memory snapshot served to the recommendation service.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    teams: BTreeMap<TeamId, TeamSnapshot>,
    candidates: Vec<Candidate>,
    traits: Vec<TraitTag>,
}

impl Dataset {
    pub fn new(teams: Vec<TeamSnapshot>, candidates: Vec<Candidate>, traits: Vec<TraitTag>) -> Self {
        Self {
            teams: teams.into_iter().map(|team| (team.id, team)).collect(),
            candidates,
            traits,
        }
    }

    pub fn teams(&self) -> impl Iterator<Item = &TeamSnapshot> {
        self.teams.values()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }
}

impl TeamDirectory for Dataset {
    fn team(&self, id: TeamId) -> Result<Option<TeamSnapshot>, DirectoryError> {
        Ok(self.teams.get(&id).cloned())
    }

    fn candidate_pool(&self) -> Result<Vec<Candidate>, DirectoryError> {
        Ok(self.candidates.clone())
    }
}

impl TraitStore for Dataset {
    fn traits_for(&self, users: &[UserId]) -> Result<Vec<TraitTag>, DirectoryError> {
        let wanted: BTreeSet<UserId> = users.iter().copied().collect();
        Ok(self
            .traits
            .iter()
            .filter(|tag| wanted.contains(&tag.user_id))
            .cloned()
            .collect())
    }
}

pub struct DatasetImporter;

impl DatasetImporter {
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Dataset, ImportError> {
        let dir = dir.as_ref();
        let open = |name: &str| {
            let path = dir.join(name);
            std::fs::File::open(&path).map_err(|source| ImportError::Io { path, source })
        };

        Self::from_readers(
            open("teams.csv")?,
            open("users.csv")?,
            open("memberships.csv")?,
            open("traits.csv")?,
        )
    }

    pub fn from_readers<T, U, M, R>(
        teams: T,
        users: U,
        memberships: M,
        traits: R,
    ) -> Result<Dataset, ImportError>
    where
        T: Read,
        U: Read,
        M: Read,
        R: Read,
    {
        let team_rows: Vec<TeamRow> = parser::parse_rows(teams)?;
        let user_rows: Vec<UserRow> = parser::parse_rows(users)?;
        let membership_rows: Vec<MembershipRow> = parser::parse_rows(memberships)?;
        let trait_rows: Vec<TraitRow> = parser::parse_rows(traits)?;

        let mut members: BTreeMap<u64, BTreeSet<UserId>> = BTreeMap::new();
        for row in membership_rows {
            let status =
                MembershipStatus::parse(&row.status).ok_or_else(|| ImportError::UnknownStatus {
                    team_id: row.team_id,
                    user_id: row.user_id,
                    status: row.status.clone(),
                })?;
            if status == MembershipStatus::Accepted {
                members
                    .entry(row.team_id)
                    .or_default()
                    .insert(UserId(row.user_id));
            }
        }

        let teams = team_rows
            .into_iter()
            .map(|row| TeamSnapshot {
                id: TeamId(row.id),
                name: row.name,
                region: row.region,
                members: members.remove(&row.id).unwrap_or_default(),
            })
            .collect();

        let candidates = user_rows
            .into_iter()
            .map(|row| Candidate {
                id: UserId(row.id),
                name: row.name,
                contact: row.contact,
                region: row.region,
                job_field: row.job_field,
                skills_raw: row.skills,
            })
            .collect();

        let traits = trait_rows
            .into_iter()
            .map(|row| TraitTag::new(UserId(row.user_id), &row.category, row.value))
            .collect();

        Ok(Dataset::new(teams, candidates, traits))
    }
}
