//! Command-backed fetch
//!
//! Produces a payload by running an external command and capturing its stdout.

use anyhow::{bail, Context};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use fresh_cache::Fetch;

/// Environment variable through which the command learns the cache key.
pub const KEY_ENV_VAR: &str = "FRESH_CACHE_KEY";

/// Runs `program args...`; a zero exit yields stdout as the payload.
#[derive(Debug, Clone)]
pub struct CommandFetch {
    program: String,
    args: Vec<String>,
}

impl CommandFetch {
    /// Builds a fetch from `argv`, whose first element is the program.
    pub fn new(argv: Vec<String>) -> anyhow::Result<Self> {
        let mut argv = argv.into_iter();
        let program = argv.next().context("no command given")?;
        Ok(Self {
            program,
            args: argv.collect(),
        })
    }
}

#[async_trait]
impl Fetch for CommandFetch {
    async fn fetch(&self, key: &str) -> anyhow::Result<String> {
        debug!(program = %self.program, key, "running fetch command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .env(KEY_ENV_VAR, key)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to start '{}'", self.program))?;

        if !output.status.success() {
            bail!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("'{}' wrote non-UTF-8 output", self.program))
    }
}
