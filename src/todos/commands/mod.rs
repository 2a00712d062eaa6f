use crate::error::{Result, TodoError};
use crate::model::{IdArg, Todo};

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod find;
pub mod label;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddParams {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindByIdParams {
    pub id: IdArg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindByTitleParams {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteParams {
    pub id: IdArg,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditTitleParams {
    pub id: IdArg,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteParams {
    pub id: IdArg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLabelParams {
    pub id: u64,
    pub label: String,
}

/// Ids grow from the largest one in use, so gaps left by deletes are never filled.
pub fn next_id(todos: &[Todo]) -> Result<u64> {
    match todos.iter().map(|t| t.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(TodoError::IdsExhausted),
    }
}

/// Position of the todo with `id`, or the not-found error every command reports.
pub fn position_of(todos: &[Todo], id: &IdArg) -> Result<usize> {
    todos
        .iter()
        .position(|t| t.matches_id(id))
        .ok_or_else(|| TodoError::not_found(id.clone()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a dispatched command hands back to the UI: the todos it touched or
/// listed, and the lines to show, in order.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub todos: Vec<Todo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = todos;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Message contents only, as handed to a plain-text display.
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos(ids: &[u64]) -> Vec<Todo> {
        ids.iter().map(|id| Todo::new(*id, format!("Todo {}", id))).collect()
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_uses_max_not_count() {
        assert_eq!(next_id(&todos(&[2, 4])).unwrap(), 5);
        assert_eq!(next_id(&todos(&[7, 1])).unwrap(), 8);
    }

    #[test]
    fn next_id_fails_past_the_largest_id() {
        let err = next_id(&todos(&[3, u64::MAX])).unwrap_err();
        assert!(matches!(err, TodoError::IdsExhausted));
    }

    #[test]
    fn position_of_reports_missing_id() {
        let err = position_of(&todos(&[1]), &IdArg::from(2)).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id: 2, is not found!");
        assert_eq!(position_of(&todos(&[3, 1]), &IdArg::from(1)).unwrap(), 1);
    }

    #[test]
    fn not_found_echoes_the_id_as_typed() {
        let id = IdArg::parse("007").unwrap();
        let err = position_of(&todos(&[1]), &id).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id: 007, is not found!");
        assert_eq!(position_of(&todos(&[7]), &id).unwrap(), 0);
    }
}
