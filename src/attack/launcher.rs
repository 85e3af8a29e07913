// SPDX-License-Identifier: PMPL-1.0-or-later

//! Launching the external attack tool

use crate::types::Invocation;
use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs one invocation to completion.
///
/// Implementations must block until the external program has exited. The
/// program's exit status is not reported back; only a failure to launch it
/// is an error.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Spawns the program as a child process and waits for it.
///
/// stdin is closed; stdout and stderr are inherited, so the tool's output
/// interleaves with the banners.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<()> {
        debug!(command = %invocation, "spawning attack tool");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to execute {}", invocation.program))?;

        debug!(command = %invocation, ?status, "attack tool exited");
        Ok(())
    }
}

/// Prints the command line instead of running it.
pub struct DryRunLauncher<W: Write> {
    out: W,
}

impl<W: Write> DryRunLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Launcher for DryRunLauncher<W> {
    fn launch(&mut self, invocation: &Invocation) -> Result<()> {
        writeln!(self.out, "[dry-run] {}", invocation)?;
        Ok(())
    }
}
