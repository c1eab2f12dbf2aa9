#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding a todo.txt file.
pub struct TodoDir {
    dir: TempDir,
}

impl TodoDir {
    /// Create a directory with a todo.txt containing `contents`.
    pub fn with_todo(contents: &str) -> std::io::Result<Self> {
        let todo = Self::empty()?;
        todo.write_file("todo.txt", contents)?;
        Ok(todo)
    }

    /// Create a directory with no todo.txt.
    pub fn empty() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn todo_path(&self) -> PathBuf {
        self.dir.path().join("todo.txt")
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_todo(&self) -> std::io::Result<String> {
        fs::read_to_string(self.todo_path())
    }

    /// The todotxt binary, run inside this directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = todotxt_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

pub fn todotxt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("todotxt").expect("binary");
    cmd.env_remove("TODOTXT_PATH");
    cmd.env_remove("RUST_LOG");
    cmd
}
