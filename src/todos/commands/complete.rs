use crate::commands::{position_of, CompleteParams};
use crate::error::Result;
use crate::model::Todo;
use crate::store::TodoStore;
use log::info;

/// Marks a todo as done. Completing an already completed todo is a no-op that still writes.
pub fn run<S: TodoStore + ?Sized>(store: &mut S, params: &CompleteParams) -> Result<Todo> {
    let mut todos = store.get()?;
    let index = position_of(&todos, &params.id)?;
    todos[index].done = true;
    let todo = todos[index].clone();
    store.set(todos)?;
    info!("completed todo {}", todo.id);
    Ok(todo)
}
