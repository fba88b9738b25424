//! Account password changes through `chpasswd`.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

use deskpilot_protocols::ToolError;

use crate::requests::ChangePasswordRequest;

/// Reject credentials that would corrupt the `user:password` line.
pub fn validate_credentials(req: &ChangePasswordRequest) -> Result<(), ToolError> {
    if req.username.trim().is_empty() {
        return Err(ToolError::InvalidParameters(
            "Username must not be empty".to_string(),
        ));
    }
    if req.username.contains([':', '\n', '\r']) {
        return Err(ToolError::InvalidParameters(format!(
            "Invalid username: {:?}",
            req.username
        )));
    }
    if req.new_password.is_empty() {
        return Err(ToolError::InvalidParameters(
            "New password must not be empty".to_string(),
        ));
    }
    if req.new_password.contains(['\n', '\r']) {
        return Err(ToolError::InvalidParameters(
            "New password must be a single line".to_string(),
        ));
    }
    Ok(())
}

/// Feed `username:password` to `program` on stdin and wait for it to exit.
pub(crate) async fn run_chpasswd(
    program: &str,
    req: &ChangePasswordRequest,
    limit: Duration,
) -> Result<(), ToolError> {
    validate_credentials(req)?;

    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| ToolError::ExecutionFailed(format!("Failed to start {}: {}", program, e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ToolError::ExecutionFailed("Failed to capture stdin".to_string()))?;
    let line = format!("{}:{}\n", req.username, req.new_password);
    if let Err(e) = stdin.write_all(line.as_bytes()).await {
        // The exit status below explains an early exit better than EPIPE does.
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            return Err(ToolError::ExecutionFailed(e.to_string()));
        }
    }
    drop(stdin);

    let output = timeout(limit, child.wait_with_output())
        .await
        .map_err(|_| ToolError::Timeout(limit.as_secs()))?
        .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

    if output.status.success() {
        info!(username = %req.username, "Password changed");
        Ok(())
    } else {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(username = %req.username, code, "Password change failed");
        Err(ToolError::ExecutionFailed(format!(
            "{} failed with exit code {}\n{}",
            program,
            code,
            stderr.trim()
        )))
    }
}
