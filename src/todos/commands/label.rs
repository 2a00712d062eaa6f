use crate::commands::{position_of, AddLabelParams};
use crate::error::Result;
use crate::model::{IdArg, Todo};
use crate::store::TodoStore;
use log::{debug, info};

/// Attaches a label unless the todo already has it.
///
/// The collection is written back either way, so a store sees exactly one
/// `set` per successful `add-label`.
pub fn run<S: TodoStore + ?Sized>(store: &mut S, params: AddLabelParams) -> Result<Todo> {
    let mut todos = store.get()?;
    let index = position_of(&todos, &IdArg::from(params.id))?;
    if todos[index].add_label(params.label.as_str()) {
        info!("labeled todo {} with {:?}", params.id, params.label);
    } else {
        debug!("todo {} already labeled {:?}", params.id, params.label);
    }
    let todo = todos[index].clone();
    store.set(todos)?;
    Ok(todo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn params(id: u64, label: &str) -> AddLabelParams {
        AddLabelParams {
            id,
            label: label.into(),
        }
    }

    #[test]
    fn adds_new_label() {
        let mut store = StoreFixture::new().with_todo(1, "Todo 1").build();
        let todo = run(&mut store, params(1, "urgent")).unwrap();

        assert_eq!(todo.labels, vec!["urgent"]);
        assert_eq!(store.todos()[0].labels, vec!["urgent"]);
    }

    #[test]
    fn duplicate_label_is_ignored_but_still_written() {
        let mut store = StoreFixture::new().with_todo(1, "Todo 1").build();
        run(&mut store, params(1, "work")).unwrap();
        let todo = run(&mut store, params(1, "work")).unwrap();

        assert_eq!(todo.labels, vec!["work"]);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn keeps_insertion_order_across_labels() {
        let mut store = StoreFixture::new()
            .with_labeled_todo(1, "Todo 1", &["home"])
            .build();
        run(&mut store, params(1, "urgent")).unwrap();
        run(&mut store, params(1, "home")).unwrap();
        let todo = run(&mut store, params(1, "Urgent")).unwrap();

        assert_eq!(todo.labels, vec!["home", "urgent", "Urgent"]);
    }

    #[test]
    fn unknown_id_fails() {
        let mut store = StoreFixture::new().with_todo(1, "Todo 1").build();
        let err = run(&mut store, params(2, "urgent")).unwrap_err();

        assert_eq!(err.to_string(), "Todo with id: 2, is not found!");
        assert_eq!(store.writes(), 0);
    }
}
