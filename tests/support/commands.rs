//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a cardvault command isolated from the host environment.
    ///
    /// HOME points at the temp home, the working directory is the temp
    /// project, and config/password/log variables are cleared.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cardvault").expect("failed to find cardvault binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CARDVAULT_CONFIG");
        cmd.env_remove("CARDVAULT_PASSWORD");
        cmd.env_remove("CARDVAULT_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `cardvault --dry-run <args>`.
    pub fn dry_run(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("--dry-run")
            .args(args)
            .output()
            .expect("failed to run cardvault --dry-run")
    }

    /// Run `cardvault <args>` with stdin detached from any terminal.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .write_stdin("")
            .output()
            .expect("failed to run cardvault")
    }
}
