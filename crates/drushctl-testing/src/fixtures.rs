//! End-to-end CLI fixture: a temp data dir, a config.toml pointing at a
//! fake `drush` script, and an argv log for no-call assertions.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct CliFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    bin_dir: PathBuf,
    log_path: PathBuf,
}

impl Default for CliFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl CliFixture {
    /// Create the fixture with a default fake drush that logs and exits 0.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let bin_dir = temp_dir.path().join("bin");
        let log_path = temp_dir.path().join("calls.log");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        let fixture = Self {
            _temp_dir: temp_dir,
            data_dir,
            bin_dir,
            log_path,
        };

        fixture
            .install_drush("exit 0")
            .expect("Failed to install default fake drush");
        fixture
            .write_config()
            .expect("Failed to write config.toml");
        fixture
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// (Re)install the fake drush executable. The body is a shell
    /// fragment; `$1`, `$2`, ... are the drush arguments. Every call is
    /// logged as `drush <args>` before the body runs.
    pub fn install_drush(&self, body: &str) -> Result<()> {
        self.install_script("drush", body)
    }

    /// Install a fake `php` on the PATH handed to the CLI under test.
    pub fn install_php(&self, body: &str) -> Result<()> {
        self.install_script("php", body)
    }

    fn install_script(&self, name: &str, body: &str) -> Result<()> {
        // Eval snippets span lines; flatten the argv so each call logs
        // as exactly one line.
        let script = format!(
            "#!/bin/sh\n\
             logged=$(printf '%s' \"$*\" | tr '\\n' ' ')\n\
             printf '%s %s\\n' '{}' \"$logged\" >> \"{}\"\n\
             {}\n",
            name,
            self.log_path.display(),
            body
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }

        Ok(())
    }

    fn write_config(&self) -> Result<()> {
        let content = format!(
            "drush_bin = \"{}\"\ntimeout_secs = 10\n",
            self.bin_dir.join("drush").display()
        );
        fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    /// A `drushctl` command wired to this fixture's data dir and PATH.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("drushctl")
            .expect("drushctl binary should be built");
        cmd.arg("--data-dir").arg(&self.data_dir);

        let path = match std::env::var("PATH") {
            Ok(existing) => format!("{}:{}", self.bin_dir.display(), existing),
            Err(_) => self.bin_dir.display().to_string(),
        };
        cmd.env("PATH", path);
        cmd
    }

    /// Every logged external call, one `<program> <args>` line per call.
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log_path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
