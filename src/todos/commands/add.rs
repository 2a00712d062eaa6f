use crate::commands::{next_id, AddParams};
use crate::error::Result;
use crate::model::Todo;
use crate::store::TodoStore;
use log::info;

pub fn run<S: TodoStore + ?Sized>(store: &mut S, params: AddParams) -> Result<Todo> {
    let mut todos = store.get()?;
    let todo = Todo::new(next_id(&todos)?, params.title);
    todos.push(todo.clone());
    store.set(todos)?;
    info!("added todo {}", todo.id);
    Ok(todo)
}
