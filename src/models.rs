use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Organization,
    User,
}

impl AccountKind {
    /// Path segment of the listing endpoint for this kind of account.
    pub fn endpoint_prefix(self) -> &'static str {
        match self {
            AccountKind::Organization => "orgs",
            AccountKind::User => "users",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Organization => f.write_str("organization"),
            AccountKind::User => f.write_str("user"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedKind {
    Probe,
    Organization,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub kind: AccountKind,
}

/// One entry of a `/repos` listing page. Only the clone URL is used.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoListItem {
    pub clone_url: Option<String>,
}

/// Body of `GET /orgs/{name}`.
#[derive(Debug, Deserialize)]
pub struct OrgProbe {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Cloned,
    Updated,
    CloneFailed(String),
    UpdateFailed(String),
}

#[derive(Debug, Clone)]
pub struct SyncEntry {
    pub name: String,
    pub path: PathBuf,
    pub outcome: SyncOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub entries: Vec<SyncEntry>,
}

impl SyncReport {
    pub fn cloned(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Cloned))
    }

    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Updated))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                SyncOutcome::CloneFailed(_) | SyncOutcome::UpdateFailed(_)
            )
        })
    }

    fn count(&self, pred: impl Fn(&SyncOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
