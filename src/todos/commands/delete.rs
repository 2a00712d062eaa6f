use crate::commands::{position_of, DeleteParams};
use crate::error::Result;
use crate::store::TodoStore;
use log::info;

pub fn run<S: TodoStore + ?Sized>(store: &mut S, params: &DeleteParams) -> Result<()> {
    let mut todos = store.get()?;
    let index = position_of(&todos, &params.id)?;
    let removed = todos.remove(index);
    store.set(todos)?;
    info!("deleted todo {}", removed.id);
    Ok(())
}
