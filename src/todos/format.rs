use crate::model::Todo;

/// `"<id> - [x] <title>"` for done todos, `"<id> - [ ] <title>"` otherwise.
pub fn format(todo: &Todo) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    format!("{} - [{}] {}", todo.id, mark, todo.title)
}

pub fn format_list(todos: &[Todo]) -> Vec<String> {
    todos.iter().map(format).collect()
}

pub fn format_labels(todo: &Todo) -> String {
    format!("Labels: {}", todo.labels.join(", "))
}
