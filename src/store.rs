//! File-backed task store.
//!
//! The store is line-indexed: a task's id is its 1-based position among the
//! non-blank lines of the backing file, recomputed on every read. Ids are
//! therefore not stable across deletions.
//!
//! Writes are not guarded against other processes. Appends go straight to
//! the end of the file; deletes and completions rewrite the whole file
//! through a temporary file in the same directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::config::{Config, StoreConfig};
use crate::error::{Error, Result};
use crate::format::format;
use crate::locate::find_file;
use crate::parser::parse_line;
use crate::task::{self, Task, DATE_FORMAT};

/// Task store rooted at a search directory
#[derive(Debug, Clone)]
pub struct TaskStore {
    root: PathBuf,
    config: StoreConfig,
}

impl TaskStore {
    /// Create a store searching `root` with explicit settings.
    ///
    /// `root` may also name the backing file directly.
    pub fn new(root: impl Into<PathBuf>, config: StoreConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Create a store for `root`, reading `.todotxt.toml` there if present.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config = if root.is_dir() {
            Config::load_from_dir(&root).store
        } else {
            StoreConfig::default()
        };
        Self::new(root, config)
    }

    /// Resolve the backing file.
    pub fn locate(&self) -> Result<PathBuf> {
        if self.root.is_file() {
            return Ok(self.root.clone());
        }
        find_file(&self.root, &self.config.file_name, self.config.search_depth)?.ok_or_else(|| {
            Error::FileNotFound {
                name: self.config.file_name.clone(),
                root: self.root.clone(),
            }
        })
    }

    /// Read every task in the file. Blank lines are skipped and do not
    /// take an id.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let path = self.locate()?;
        let reader = BufReader::new(File::open(&path)?);

        let mut tasks = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut task = parse_line(&line);
            task.id = tasks.len() + 1;
            tasks.push(task);
        }

        tracing::debug!(path = %path.display(), count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Find a task by id. `Ok(None)` if the file has no such task.
    pub fn get_task(&self, id: usize) -> Result<Option<Task>> {
        Ok(self.list_tasks()?.into_iter().find(|task| task.id == id))
    }

    /// Append a task, stamping today's date as its creation date if unset.
    pub fn add_task(&self, task: Task) -> Result<Task> {
        self.add_task_on(task, task::today())
    }

    /// Append a task using `today` for whichever date the line carries.
    ///
    /// The task gets the next id (current task count + 1). The file must
    /// already exist; it is never created here. The returned task holds
    /// exactly the dates written to the file.
    pub fn add_task_on(&self, mut task: Task, today: NaiveDate) -> Result<Task> {
        let path = self.locate()?;
        let content = fs::read_to_string(&path)?;
        let count = content.lines().filter(|line| !line.trim().is_empty()).count();

        task.id = count + 1;
        let slot = if task.completed {
            &mut task.completion_date
        } else {
            &mut task.creation_date
        };
        if slot.as_deref().map_or(true, str::is_empty) {
            *slot = Some(today.format(DATE_FORMAT).to_string());
        }
        let line = format(&task);

        let mut file = OpenOptions::new().append(true).open(&path)?;
        if !content.is_empty() && !content.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{line}")?;
        file.sync_all()?;

        tracing::debug!(path = %path.display(), id = task.id, "appended task");
        Ok(task)
    }

    /// Remove the task with `id`, keeping every other line byte-for-byte.
    pub fn delete_task(&self, id: usize) -> Result<Task> {
        let path = self.locate()?;
        let content = fs::read_to_string(&path)?;
        let lines = split_lines(&content);
        let index = task_line_index(&lines, id).ok_or(Error::TaskNotFound(id))?;

        let mut removed = parse_line(lines[index].text());
        removed.id = id;

        let rewritten: String = lines
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, line)| line.raw)
            .collect();
        rewrite(&path, &rewritten)?;

        tracing::debug!(path = %path.display(), id, "deleted task");
        Ok(removed)
    }

    /// Mark the task with `id` as completed today.
    pub fn complete_task(&self, id: usize) -> Result<Task> {
        self.complete_task_on(id, task::today())
    }

    /// Mark the task with `id` as completed on `today` and rewrite its line.
    ///
    /// A task that is already completed is returned unchanged and the file
    /// is not touched.
    pub fn complete_task_on(&self, id: usize, today: NaiveDate) -> Result<Task> {
        let path = self.locate()?;
        let content = fs::read_to_string(&path)?;
        let lines = split_lines(&content);
        let index = task_line_index(&lines, id).ok_or(Error::TaskNotFound(id))?;

        let mut task = parse_line(lines[index].text());
        task.id = id;
        if !task.complete_on(today) {
            tracing::debug!(id, "task already completed");
            return Ok(task);
        }

        let replacement = format!("{}{}", format(&task), lines[index].ending());
        let rewritten: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| if i == index { replacement.as_str() } else { line.raw })
            .collect();
        rewrite(&path, &rewritten)?;

        tracing::debug!(path = %path.display(), id, "completed task");
        Ok(task)
    }
}

/// Parse a task id given as text. Ids start at 1.
pub fn parse_id(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidId(raw.to_string())),
    }
}

/// One physical line, line ending included.
struct RawLine<'a> {
    raw: &'a str,
}

impl<'a> RawLine<'a> {
    fn text(&self) -> &'a str {
        self.raw.trim_end_matches(&['\r', '\n'][..])
    }

    fn ending(&self) -> &'a str {
        &self.raw[self.text().len()..]
    }

    fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

fn split_lines(content: &str) -> Vec<RawLine<'_>> {
    content
        .split_inclusive('\n')
        .map(|raw| RawLine { raw })
        .collect()
}

/// Index of the physical line holding task `id`.
fn task_line_index(lines: &[RawLine<'_>], id: usize) -> Option<usize> {
    if id == 0 {
        return None;
    }
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_blank())
        .nth(id - 1)
        .map(|(index, _)| index)
}

/// Replace `path` with `content` via a temp file + rename, keeping the
/// original permissions.
fn rewrite(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let permissions = fs::metadata(path)?.permissions();

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;
    temp.persist(path).map_err(io::Error::from)?;
    Ok(())
}
