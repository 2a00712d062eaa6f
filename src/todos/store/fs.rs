use super::TodoStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use log::debug;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_STORE_FILENAME: &str = "todos.json";

/// Keeps the whole collection in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }
        Ok(())
    }
}

impl TodoStore for FileStore {
    fn get(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            debug!("store file {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let todos: Vec<Todo> = serde_json::from_str(&content).map_err(|e| {
            TodoError::Store(format!("{} is not a valid todo file: {}", self.path.display(), e))
        })?;
        debug!("read {} todos from {}", todos.len(), self.path.display());
        Ok(todos)
    }

    fn set(&mut self, todos: Vec<Todo>) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(&todos).map_err(TodoError::Serialization)?;
        fs::write(&self.path, content).map_err(TodoError::Io)?;
        debug!("wrote {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("todos.json"));
        assert!(store.get().unwrap().is_empty());
    }

    #[test]
    fn set_then_get_preserves_order_and_labels() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("todos.json"));

        let mut second = Todo::new(4, "Second");
        second.labels.push("work".into());
        let todos = vec![Todo::new(2, "First"), second];
        store.set(todos.clone()).unwrap();

        assert_eq!(store.get().unwrap(), todos);
    }

    #[test]
    fn corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).get().unwrap_err();
        assert!(matches!(err, TodoError::Store(_)));
    }
}
