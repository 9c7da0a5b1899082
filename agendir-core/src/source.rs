//! Source subprocess protocol.
//!
//! This module handles communication with external account source
//! binaries (e.g., `agendir-source-google`) using JSON over
//! stdin/stdout.
//!
//! The protocol is language-agnostic: any executable that speaks the
//! JSON protocol can be a source. Sources manage their own credentials;
//! the CLI only asks them for account snapshots.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::account::Account;
use crate::error::{AgendirError, AgendirResult};
use crate::protocol::{Command, Request, Response};

const SOURCE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Source(String);

impl Source {
    pub fn from_name(name: &str) -> Self {
        Source(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> AgendirResult<std::path::PathBuf> {
        let binary_name = format!("agendir-source-{}", self.0);
        let binary_path = which::which(&binary_name)
            .map_err(|_| AgendirError::SourceNotInstalled(self.0.clone()))?;
        Ok(binary_path)
    }

    /// Fetch a fresh account snapshot from the source.
    pub async fn fetch_account(&self) -> AgendirResult<Account> {
        let call = self.call_raw(Command::FetchAccount, serde_json::Value::Null);
        timeout(SOURCE_TIMEOUT, call)
            .await
            .map_err(|_| AgendirError::SourceTimeout(SOURCE_TIMEOUT.as_secs()))?
    }

    /// Low-level call that sends a command with params and deserializes
    /// the response.
    async fn call_raw<P: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> AgendirResult<R> {
        let params = serde_json::to_value(params)
            .map_err(|e| AgendirError::Serialization(e.to_string()))?;
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| AgendirError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                AgendirError::Source(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        // Wait for process and collect output
        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(AgendirError::Source(format!(
                "Source exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.is_empty() {
            return Err(AgendirError::Source("Source returned no response".into()));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| AgendirError::Source(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(AgendirError::Source(error)),
        }
    }
}
