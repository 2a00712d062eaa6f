use super::TodoStore;
use crate::error::Result;
use crate::model::Todo;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls made so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }
}

impl TodoStore for InMemoryStore {
    fn get(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn set(&mut self, todos: Vec<Todo>) -> Result<()> {
        self.todos = todos;
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Todos `Todo 1..=count` with ids `1..=count`.
        pub fn with_todos(mut self, count: u64) -> Self {
            for i in 1..=count {
                self.store.todos.push(Todo::new(i, format!("Todo {}", i)));
            }
            self
        }

        pub fn with_todo(mut self, id: u64, title: &str) -> Self {
            self.store.todos.push(Todo::new(id, title));
            self
        }

        pub fn with_done_todo(mut self, id: u64, title: &str) -> Self {
            let mut todo = Todo::new(id, title);
            todo.done = true;
            self.store.todos.push(todo);
            self
        }

        pub fn with_labeled_todo(mut self, id: u64, title: &str, labels: &[&str]) -> Self {
            let mut todo = Todo::new(id, title);
            todo.labels = labels.iter().map(|l| l.to_string()).collect();
            self.store.todos.push(todo);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn set_replaces_collection_and_counts_writes() {
        let mut store = StoreFixture::new().with_todos(2).build();
        assert_eq!(store.get().unwrap().len(), 2);
        assert_eq!(store.writes(), 0);

        store.set(vec![Todo::new(9, "Only")]).unwrap();
        assert_eq!(store.get().unwrap(), vec![Todo::new(9, "Only")]);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn empty_store_reads_as_empty_collection() {
        let store = InMemoryStore::new();
        assert!(store.get().unwrap().is_empty());
    }
}
