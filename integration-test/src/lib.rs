//! Test driver for argmap integration tests.
//!
//! Spawns `argdump` with a given argument list and environment, waits for it,
//! and decodes its line-oriented stdout:
//! - `option KEY` / `option KEY=VALUE`
//! - `argument TEXT`
//! - `typed KEY=VALUE`

use std::process::{Child, Command, Stdio};

/// A running argdump process.
pub struct TestSession {
    child: Child,
}

impl TestSession {
    /// Spawn `binary` with the given arguments.
    ///
    /// `env` are additional environment variables to set. `RUST_LOG` and
    /// `ARGDUMP_TYPE` are cleared first so the caller's shell cannot leak in.
    pub fn spawn(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> std::io::Result<TestSession> {
        let mut cmd = Command::new(binary);
        cmd.args(args);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("ARGDUMP_TYPE");
        for (k, v) in env {
            cmd.env(k, v);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        Ok(TestSession {
            child: cmd.spawn()?,
        })
    }

    /// Wait for the child to exit and assert the exit code.
    pub fn wait_exit(self, expected_code: i32) -> SessionOutput {
        let output = self
            .child
            .wait_with_output()
            .expect("failed to wait for child");
        let code = output.status.code().unwrap_or(-1);

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert_eq!(
            code, expected_code,
            "expected exit code {expected_code}, got {code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );

        SessionOutput { stdout, stderr }
    }
}

/// Output captured from a completed session.
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl SessionOutput {
    fn lines_with<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.stdout
            .lines()
            .filter_map(move |line| line.strip_prefix(tag)?.strip_prefix(' '))
    }

    /// `option` lines as `(key, value)`, in output order.
    pub fn options(&self) -> Vec<(String, Option<String>)> {
        self.lines_with("option").map(split_pair).collect()
    }

    /// `argument` lines, in output order.
    pub fn arguments(&self) -> Vec<String> {
        self.lines_with("argument").map(str::to_string).collect()
    }

    /// `typed` lines as `(key, converted value)`.
    pub fn typed(&self) -> Vec<(String, String)> {
        self.lines_with("typed")
            .map(split_pair)
            .map(|(k, v)| (k, v.unwrap_or_default()))
            .collect()
    }
}

// Keys never contain '=', so the first one splits.
fn split_pair(s: &str) -> (String, Option<String>) {
    match s.split_once('=') {
        Some((k, v)) => (k.to_string(), Some(v.to_string())),
        None => (s.to_string(), None),
    }
}
