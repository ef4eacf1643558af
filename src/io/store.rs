//! File-backed key-value store for saved projects
//!
//! Each key is one JSON document inside the store directory. Saved projects
//! live under one key as an ordered list; recently used blocks under another.
//! A missing document reads as empty.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::catalog::RecentBlocks;
use crate::io::configuration::{STORE_PROJECTS_KEY, STORE_RECENT_BLOCKS_KEY};
use crate::io::error::{PlannerError, Result, file_system};
use crate::io::project::Project;

/// Saved projects plus recently used blocks
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    /// Backing directory; `None` keeps everything in memory
    root: Option<PathBuf>,
    projects: Vec<Project>,
    recent_blocks: RecentBlocks,
}

impl ProjectStore {
    /// Open the store rooted at `root`, reading any existing documents
    ///
    /// # Errors
    ///
    /// Returns an error if an existing document cannot be read or parsed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let projects: Vec<Project> = read_key(&root, STORE_PROJECTS_KEY)?;
        let recent_ids: Vec<String> = read_key(&root, STORE_RECENT_BLOCKS_KEY)?;
        log::debug!(
            "Opened project store at {} ({} projects)",
            root.display(),
            projects.len()
        );

        Ok(Self {
            root: Some(root),
            projects,
            recent_blocks: RecentBlocks::from_ids(recent_ids),
        })
    }

    /// Create a store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Saved projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Saved projects, most recently updated first
    pub fn projects_by_recency(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.iter().collect();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        projects
    }

    /// Look up a project by identifier
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Fetch a project or fail with `ProjectNotFound`
    ///
    /// # Errors
    ///
    /// Returns an error if no project has the given identifier
    pub fn get(&self, id: &str) -> Result<&Project> {
        self.find(id).ok_or_else(|| PlannerError::ProjectNotFound { id: id.to_string() })
    }

    /// Insert a project or replace the one with the same identifier in place
    ///
    /// # Errors
    ///
    /// Returns an error if the project list cannot be written
    pub fn upsert(&mut self, project: Project) -> Result<()> {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
        self.persist_projects()
    }

    /// Remove a project, returning it if it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the project list cannot be written
    pub fn remove(&mut self, id: &str) -> Result<Option<Project>> {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let removed = self.projects.remove(index);
        self.persist_projects()?;
        Ok(Some(removed))
    }

    /// Recently used blocks as last persisted
    pub const fn recent_blocks(&self) -> &RecentBlocks {
        &self.recent_blocks
    }

    /// Replace the recently used blocks
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written
    pub fn set_recent_blocks(&mut self, recent: RecentBlocks) -> Result<()> {
        self.recent_blocks = recent;
        match &self.root {
            Some(root) => write_key(root, STORE_RECENT_BLOCKS_KEY, &self.recent_blocks),
            None => Ok(()),
        }
    }

    fn persist_projects(&self) -> Result<()> {
        match &self.root {
            Some(root) => write_key(root, STORE_PROJECTS_KEY, &self.projects),
            None => Ok(()),
        }
    }
}

/// Location of the document holding `key`
pub fn key_path(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{key}.json"))
}

fn read_key<T: DeserializeOwned + Default>(root: &Path, key: &str) -> Result<T> {
    let path = key_path(root, key);
    if !path.exists() {
        return Ok(T::default());
    }

    let text = std::fs::read_to_string(&path).map_err(file_system(&path, "read"))?;
    serde_json::from_str(&text).map_err(|e| PlannerError::Serialization {
        path: Some(path),
        source: e,
    })
}

// Staged in a sibling file, then renamed over the document
fn write_key<T: Serialize + ?Sized>(root: &Path, key: &str, value: &T) -> Result<()> {
    std::fs::create_dir_all(root).map_err(file_system(root, "create directory"))?;

    let path = key_path(root, key);
    let staging = root.join(format!("{key}.json.tmp"));
    let json = serde_json::to_string_pretty(value).map_err(|e| PlannerError::Serialization {
        path: Some(path.clone()),
        source: e,
    })?;

    std::fs::write(&staging, json).map_err(file_system(&staging, "write"))?;
    std::fs::rename(&staging, &path).map_err(file_system(&path, "rename"))?;
    Ok(())
}
