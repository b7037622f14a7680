use std::path::PathBuf;
use tokio::sync::Mutex;

use super::types::{NewTodo, StoreError, Todo, TodoPatch};

/// File-backed store over the full todo array.
///
/// Every operation loads the whole file and mutating operations rewrite it in
/// full. The mutex serializes the read-modify-write cycle, so two concurrent
/// mutations cannot lose each other's writes.
pub struct FileStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Returns every record in the store, in file order.
    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.load().await)
    }

    /// Appends a new record with the next free id and returns it.
    ///
    /// Ids are assigned as `max(existing) + 1`, so ids of remaining records
    /// stay unique even after deletions.
    pub async fn create(&self, fields: NewTodo) -> Result<Todo, StoreError> {
        let _guard = self.write_guard.lock().await;
        let mut todos = self.load().await;

        let id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            title: fields.title,
            completed: fields.completed.unwrap_or(false),
        };

        todos.push(todo.clone());
        self.persist(&todos).await?;
        Ok(todo)
    }

    /// Merges the patch over the record with the given id and returns the
    /// updated record. Fields absent from the patch keep their prior values.
    pub async fn update(&self, id: u64, patch: TodoPatch) -> Result<Todo, StoreError> {
        let _guard = self.write_guard.lock().await;
        let mut todos = self.load().await;

        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }

        let updated = todo.clone();
        self.persist(&todos).await?;
        Ok(updated)
    }

    /// Removes the record with the given id. Other records are untouched and
    /// keep their ids.
    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().await;
        let mut todos = self.load().await;

        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        todos.remove(index);
        self.persist(&todos).await
    }

    async fn load(&self) -> Vec<Todo> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            // First run has no file yet.
            Err(_) => return Vec::new(),
        };

        match serde_json::from_slice(&data) {
            Ok(todos) => todos,
            Err(e) => {
                tracing::warn!(
                    "Storage file {} is unreadable, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn persist(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(todos)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}
