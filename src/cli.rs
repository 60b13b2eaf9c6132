use crate::config::{self, Settings};
use crate::fetch::{self, FetchOptions};
use crate::gh_ops::{GitHubClient, DEFAULT_API_URL};
use crate::git_ops::GitCli;
use crate::logging;
use crate::models::{ForcedKind, SyncOutcome, SyncReport};
use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ghfetch",
    version,
    about = "Clone or update every repository of a GitHub user or organization",
    disable_help_flag = true
)]
pub struct Cli {
    /// GitHub API token, sent as `Authorization: token TOKEN`
    #[arg(short = 't', long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Treat NAME as an organization without probing
    #[arg(short = 'o', long = "org", conflicts_with = "user")]
    pub org: bool,

    /// Treat NAME as a user without probing
    #[arg(short = 'u', long = "user")]
    pub user: bool,

    /// Directory in which NAME/ is created
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// API base URL, for GitHub Enterprise
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Log requests and git invocations
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print usage and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// GitHub user or organization name
    #[arg(required_unless_present = "help")]
    pub name: Option<String>,
}

impl Cli {
    pub fn forced_kind(&self) -> ForcedKind {
        if self.org {
            ForcedKind::Organization
        } else if self.user {
            ForcedKind::User
        } else {
            ForcedKind::Probe
        }
    }
}

/// Effective settings after CLI flags, environment and settings file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub token: Option<String>,
    pub api_url: String,
    pub git: String,
}

pub fn resolve(cli: &Cli, settings: Settings) -> Resolved {
    let token = cli
        .token
        .clone()
        .or(settings.token)
        .filter(|t| !t.trim().is_empty());
    let api_url = cli
        .api_url
        .clone()
        .or(settings.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let git = settings.git.unwrap_or_else(|| "git".to_string());
    Resolved {
        token,
        api_url,
        git,
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(name) = cli.name.clone().filter(|_| !cli.help) else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(2);
    };

    logging::init_logging(cli.verbose);

    let settings = match config::settings_path() {
        Some(path) => config::load_settings(&path)?,
        None => Settings::default(),
    };
    let resolved = resolve(&cli, settings);

    let client = GitHubClient::new(&resolved.api_url, resolved.token.as_deref())?;
    let git = GitCli::new(resolved.git);
    let options = FetchOptions {
        name,
        forced: cli.forced_kind(),
        base_dir: cli.dir.clone(),
    };

    let report = fetch::run_fetch(&client, &git, &options)?;
    print_summary(&options.name, &report);
    Ok(())
}

fn print_summary(name: &str, report: &SyncReport) {
    for entry in &report.entries {
        match &entry.outcome {
            SyncOutcome::CloneFailed(reason) | SyncOutcome::UpdateFailed(reason) => {
                eprintln!("  {}: {reason}", entry.path.display());
            }
            SyncOutcome::Cloned | SyncOutcome::Updated => {}
        }
    }
    println!(
        "{name}: {} cloned, {} updated, {} failed",
        report.cloned(),
        report.updated(),
        report.failed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ghfetch").chain(args.iter().copied()))
    }

    #[test]
    fn parses_flags_and_name() {
        let cli = parse(&["-t", "abc", "-o", "acme"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert_eq!(cli.name.as_deref(), Some("acme"));
        assert_eq!(cli.forced_kind(), ForcedKind::Organization);

        let cli = parse(&["-u", "alice"]).unwrap();
        assert_eq!(cli.forced_kind(), ForcedKind::User);

        let cli = parse(&["alice"]).unwrap();
        assert_eq!(cli.forced_kind(), ForcedKind::Probe);
        assert_eq!(cli.dir, PathBuf::from("."));
    }

    #[test]
    fn org_and_user_conflict() {
        assert!(parse(&["-o", "-u", "acme"]).is_err());
    }

    #[test]
    fn name_is_required_unless_help() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-x", "acme"]).is_err());
        let cli = parse(&["-h"]).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn cli_values_win_over_settings() {
        let cli = parse(&["-t", "from-cli", "--api-url", "https://ghe.local/api/v3", "acme"])
            .unwrap();
        let settings = Settings {
            token: Some("from-file".to_string()),
            api_url: Some("https://other/api".to_string()),
            git: Some("/opt/git/bin/git".to_string()),
        };

        let resolved = resolve(&cli, settings);
        assert_eq!(resolved.token.as_deref(), Some("from-cli"));
        assert_eq!(resolved.api_url, "https://ghe.local/api/v3");
        assert_eq!(resolved.git, "/opt/git/bin/git");
    }

    #[test]
    fn settings_fill_gaps_and_blank_tokens_are_dropped() {
        let cli = Cli {
            token: Some("  ".to_string()),
            org: false,
            user: false,
            dir: PathBuf::from("."),
            api_url: None,
            verbose: false,
            help: false,
            name: Some("acme".to_string()),
        };

        let resolved = resolve(&cli, Settings::default());
        assert_eq!(resolved.token, None);
        assert_eq!(resolved.api_url, DEFAULT_API_URL);
        assert_eq!(resolved.git, "git");

        let cli = Cli { token: None, ..cli };
        let settings = Settings {
            token: Some("from-file".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            resolve(&cli, settings).token.as_deref(),
            Some("from-file")
        );
    }
}
