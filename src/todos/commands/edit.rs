use crate::commands::{position_of, EditTitleParams};
use crate::error::Result;
use crate::model::Todo;
use crate::store::TodoStore;
use log::info;

pub fn run<S: TodoStore + ?Sized>(store: &mut S, params: EditTitleParams) -> Result<Todo> {
    let mut todos = store.get()?;
    let index = position_of(&todos, &params.id)?;
    todos[index].title = params.title;
    let todo = todos[index].clone();
    store.set(todos)?;
    info!("retitled todo {}", todo.id);
    Ok(todo)
}
