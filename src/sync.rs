use crate::error::{FetchError, Result};
use crate::git_ops::Vcs;
use crate::models::{SyncEntry, SyncOutcome, SyncReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Local directory name for a clone URL: the last path segment without `.git`.
pub fn repo_dir_name(clone_url: &str) -> String {
    let trimmed = clone_url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

pub fn ensure_account_dir(base: &Path, account_name: &str) -> Result<PathBuf> {
    let path = base.join(account_name);
    fs::create_dir_all(&path).map_err(|source| FetchError::AccountDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Pulls repositories that already have a directory and clones the rest.
/// Failures are logged and recorded; they never stop the loop.
pub fn sync_repos(vcs: &dyn Vcs, account_dir: &Path, clone_urls: &[String]) -> SyncReport {
    let mut report = SyncReport::default();

    for url in clone_urls {
        let name = repo_dir_name(url);
        let path = account_dir.join(&name);

        let outcome = if path.is_dir() {
            info!("updating {name}");
            match vcs.pull(&path) {
                Ok(()) => SyncOutcome::Updated,
                Err(err) => {
                    warn!("could not update {name}: {err:#}");
                    SyncOutcome::UpdateFailed(format!("{err:#}"))
                }
            }
        } else {
            info!("cloning {name}");
            match vcs.clone_repo(url, &path) {
                Ok(()) => SyncOutcome::Cloned,
                Err(err) => {
                    warn!("could not clone {name}: {err:#}");
                    SyncOutcome::CloneFailed(format!("{err:#}"))
                }
            }
        };

        report.entries.push(SyncEntry {
            name,
            path,
            outcome,
        });
    }

    report
}
