use crate::error::{FetchError, Result};
use crate::gh_ops::{self, Transport};
use crate::git_ops::Vcs;
use crate::models::{ForcedKind, SyncReport};
use crate::sync;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub name: String,
    pub forced: ForcedKind,
    /// Directory that receives `<name>/`.
    pub base_dir: PathBuf,
}

/// Classifies the account, collects every clone URL, then syncs them under
/// `<base_dir>/<name>`. Only the listing phase and directory creation can fail.
pub fn run_fetch(
    transport: &dyn Transport,
    vcs: &dyn Vcs,
    options: &FetchOptions,
) -> Result<SyncReport> {
    let account = gh_ops::classify(transport, &options.name, options.forced);
    info!("{} is a {}", account.name, account.kind);

    let clone_urls = gh_ops::list_clone_urls(transport, &account)?;
    if clone_urls.is_empty() {
        return Err(FetchError::NoRepositories {
            name: account.name,
            kind: account.kind,
        });
    }
    info!("found {} repositories", clone_urls.len());

    let account_dir = sync::ensure_account_dir(&options.base_dir, &account.name)?;
    Ok(sync::sync_repos(vcs, &account_dir, &clone_urls))
}
