//! Shared test utilities for invscan integration tests.
//!
//! Every command runs in a fresh working directory with `XDG_CONFIG_HOME`
//! pointed at an empty directory, so no user or repo `invscan.toml` leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

pub fn listing_json() -> PathBuf {
    data_dir().join("listing.json")
}

pub fn hosts_ini() -> PathBuf {
    data_dir().join("hosts.ini")
}

/// A scratch directory used as both cwd and config home.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create sandbox");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config home");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_invscan"));
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env_remove("INVSCAN_ANSIBLE_INVENTORY")
            .env_remove("INVSCAN_LOG");
        cmd
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("write sandbox file");
        path
    }

    /// Write an executable `/bin/sh` script.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write(name, &format!("#!/bin/sh\n{body}\n"));
        let mut perms = std::fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod");
        path
    }
}
