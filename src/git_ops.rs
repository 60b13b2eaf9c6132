use anyhow::{anyhow, Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// The version-control operations the sync phase needs.
pub trait Vcs {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()>;
    fn pull(&self, destination: &Path) -> Result<()>;
}

pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run<I, S>(&self, args: I, cwd: Option<&Path>) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<_> = args.into_iter().collect();
        let shown = args
            .iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");

        debug!("{} {shown}", self.program);
        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .with_context(|| format!("failed to run {} {shown}", self.program))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(anyhow!("{} {shown}: {stderr}", self.program));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Vcs for GitCli {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()> {
        self.run(
            [OsStr::new("clone"), OsStr::new(url), destination.as_os_str()],
            None,
        )?;
        Ok(())
    }

    fn pull(&self, destination: &Path) -> Result<()> {
        self.run(["pull"], Some(destination))?;
        Ok(())
    }
}
