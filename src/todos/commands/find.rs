//! Read-only lookups. `by_id` fails when nothing matches; `by_title` and
//! `by_status` report an empty result instead.

use crate::commands::{position_of, FindByIdParams};
use crate::error::Result;
use crate::model::{Status, Todo};
use crate::store::TodoStore;

pub fn by_id<S: TodoStore + ?Sized>(store: &S, params: &FindByIdParams) -> Result<Todo> {
    let mut todos = store.get()?;
    let index = position_of(&todos, &params.id)?;
    Ok(todos.swap_remove(index))
}

/// First todo whose title equals `title` exactly.
pub fn by_title<S: TodoStore + ?Sized>(store: &S, title: &str) -> Result<Option<Todo>> {
    Ok(store.get()?.into_iter().find(|t| t.title == title))
}

pub fn by_status<S: TodoStore + ?Sized>(store: &S, status: Status) -> Result<Vec<Todo>> {
    Ok(store
        .get()?
        .into_iter()
        .filter(|t| status.matches(t))
        .collect())
}
