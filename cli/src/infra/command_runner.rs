//! Infrastructure implementation of the `ProcessRunner` port.
//!
//! `TokioProcessRunner` spawns the script with tokio, inherits the action's
//! environment, and waits for it with no timeout: the lease TTL is the
//! script's concern. Script stdout/stderr lines are copied to the action's
//! own stdout/stderr as they arrive, so they show up live in the job log.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::application::ports::{ProcessRunner, ScriptInvocation};

/// Production `ProcessRunner` backed by `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessRunner;

impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<Output> {
        let program = &invocation.program;
        tracing::debug!(
            program = %program,
            args = ?invocation.args,
            env = ?invocation.env.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            "spawning script"
        );

        let mut child = tokio::process::Command::new(program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout_handle = child.stdout.take();
        let stderr_handle = child.stderr.take();

        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            forward_lines(stdout_handle, tokio::io::stdout()),
            forward_lines(stderr_handle, tokio::io::stderr()),
        );

        let status = status.with_context(|| format!("waiting for {program}"))?;
        tracing::debug!(program = %program, code = ?status.code(), "script exited");
        Ok(Output {
            status,
            stdout,
            stderr,
        })
    }
}

/// Copy `source` line by line into `sink`, returning everything read.
///
/// Lines are forwarded as raw bytes; a failed write to `sink` stops the
/// forwarding but not the capture.
async fn forward_lines<R, W>(source: Option<R>, mut sink: W) -> Vec<u8>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut captured = Vec::new();
    let Some(source) = source else {
        return captured;
    };
    let mut reader = BufReader::new(source);
    let mut line = Vec::new();
    let mut forwarding = true;
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                if forwarding {
                    forwarding = sink.write_all(&line).await.is_ok() && sink.flush().await.is_ok();
                }
                captured.extend_from_slice(&line);
            }
            Err(e) => {
                tracing::debug!(error = %e, "stopped reading script output");
                break;
            }
        }
    }
    captured
}
