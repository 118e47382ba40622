#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;
use ticketdesk::{Draft, TicketId, TicketStatus, TicketStore};

/// Runs the ticketdesk binary against an isolated config directory
pub struct TicketdeskTest {
    pub temp_dir: TempDir,
}

impl TicketdeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketdeskTest { temp_dir }
    }

    /// Write `content` as the config file used by `run`
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ticketdesk"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TICKETDESK_CONFIG", self.config_path())
            .env_remove("TICKETDESK_LOG")
            .env_remove("TICKETDESK_LOG_LEVEL")
            .output()
            .expect("Failed to execute ticketdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

pub fn draft(title: &str) -> Draft {
    Draft::new(title, "", TicketStatus::Created)
}

pub fn ids(store: &TicketStore) -> Vec<TicketId> {
    store.tickets().iter().map(|t| t.id).collect()
}
