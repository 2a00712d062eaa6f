//! # API Facade
//!
//! The API layer is the single entry point for running a todo command by name.
//! It owns the mapping from command names to the three stages every command goes
//! through:
//!
//! 1. **validate**: raw `&[String]` arguments → typed params ([`crate::validate`])
//! 2. **execute**: params + store → domain value ([`crate::commands`])
//! 3. **render**: domain value → [`CmdResult`] lines ([`crate::format`])
//!
//! ## Registry
//!
//! Commands are looked up in a [`Registry`] rather than a `match` on the name.
//! Each built-in is a unit struct implementing [`Command`]; the registry stores
//! them behind the object-safe [`Handler`] trait so commands with different
//! parameter and output types can live side by side. New commands are added with
//! [`Registry::register`] without touching the existing ones.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout or stderr; results come back as [`CmdResult`]
//!
//! ## Generic Over TodoStore
//!
//! `TodoApi<S: TodoStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands::{
    self, AddLabelParams, AddParams, CompleteParams, DeleteParams, EditTitleParams,
    FindByIdParams, FindByTitleParams,
};
use crate::error::{Result, TodoError};
use crate::format::{format, format_labels, format_list};
use crate::model::{Status, Todo};
use crate::store::TodoStore;
use crate::validate;
use log::debug;
use std::collections::BTreeMap;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// A command that can be dispatched by name.
pub trait Command {
    type Params;
    type Output;

    fn name(&self) -> &'static str;

    /// Argument synopsis shown in help, e.g. `<id> <label>`.
    fn usage(&self) -> &'static str;

    fn validate(&self, params: &[String]) -> Result<Self::Params>;

    fn execute(&self, store: &mut dyn TodoStore, params: Self::Params) -> Result<Self::Output>;

    fn render(&self, output: Self::Output) -> CmdResult;
}

/// Type-erased [`Command`], as stored in the [`Registry`].
pub trait Handler {
    fn name(&self) -> &'static str;
    fn usage(&self) -> &'static str;
    fn handle(&self, store: &mut dyn TodoStore, params: &[String]) -> Result<CmdResult>;
}

impl<C: Command> Handler for C {
    fn name(&self) -> &'static str {
        Command::name(self)
    }

    fn usage(&self) -> &'static str {
        Command::usage(self)
    }

    fn handle(&self, store: &mut dyn TodoStore, params: &[String]) -> Result<CmdResult> {
        let validated = self.validate(params)?;
        let output = self.execute(store, validated)?;
        Ok(self.render(output))
    }
}

pub struct Registry {
    handlers: BTreeMap<&'static str, Box<dyn Handler>>,
}

impl Registry {
    /// A registry with no commands at all.
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Adds `command`, replacing any command already registered under its name.
    pub fn register<C: Command + 'static>(&mut self, command: C) -> &mut Self {
        self.handlers.insert(Command::name(&command), Box::new(command));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Handler> {
        self.handlers.get(name).map(|h| &**h)
    }

    /// `(name, usage)` pairs in name order.
    pub fn commands(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.handlers.values().map(|h| (h.name(), h.usage()))
    }

    pub fn dispatch(
        &self,
        name: &str,
        store: &mut dyn TodoStore,
        params: &[String],
    ) -> Result<CmdResult> {
        let handler = self
            .get(name)
            .ok_or_else(|| TodoError::UnknownCommand(name.to_string()))?;
        debug!("dispatching {} with {} argument(s)", name, params.len());
        handler.handle(store, params)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(ListCommand)
            .register(AddCommand)
            .register(FindByIdCommand)
            .register(FindByTitleCommand)
            .register(FindByStatusCommand)
            .register(CompleteCommand)
            .register(EditTitleCommand)
            .register(DeleteCommand)
            .register(AddLabelCommand);
        registry
    }
}

/// The main API facade for todo operations.
pub struct TodoApi<S: TodoStore> {
    store: S,
    registry: Registry,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_registry(store, Registry::default())
    }

    pub fn with_registry(store: S, registry: Registry) -> Self {
        Self { store, registry }
    }

    /// Runs `command` with its raw positional arguments.
    pub fn run<I: AsRef<str>>(&mut self, command: &str, params: &[I]) -> Result<CmdResult> {
        let params: Vec<String> = params.iter().map(|p| p.as_ref().to_string()).collect();
        self.registry.dispatch(command, &mut self.store, &params)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

// --- Built-in commands ---

pub struct ListCommand;

impl Command for ListCommand {
    type Params = ();
    type Output = Vec<Todo>;

    fn name(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        ""
    }

    fn validate(&self, _params: &[String]) -> Result<()> {
        Ok(())
    }

    fn execute(&self, store: &mut dyn TodoStore, _params: ()) -> Result<Vec<Todo>> {
        commands::list::run(&*store)
    }

    fn render(&self, todos: Vec<Todo>) -> CmdResult {
        let mut result = CmdResult::default();
        for line in format_list(&todos) {
            result.add_message(CmdMessage::info(line));
        }
        result.add_message(CmdMessage::info(format!("You have {} todos.", todos.len())));
        result.with_todos(todos)
    }
}

pub struct AddCommand;

impl Command for AddCommand {
    type Params = AddParams;
    type Output = Todo;

    fn name(&self) -> &'static str {
        "add"
    }

    fn usage(&self) -> &'static str {
        "<title>"
    }

    fn validate(&self, params: &[String]) -> Result<AddParams> {
        validate::validate_add_params(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, params: AddParams) -> Result<Todo> {
        commands::add::run(store, params)
    }

    fn render(&self, todo: Todo) -> CmdResult {
        announce("New Todo added:", todo)
    }
}

pub struct FindByIdCommand;

impl Command for FindByIdCommand {
    type Params = FindByIdParams;
    type Output = Todo;

    fn name(&self) -> &'static str {
        "find-by-id"
    }

    fn usage(&self) -> &'static str {
        "<id>"
    }

    fn validate(&self, params: &[String]) -> Result<FindByIdParams> {
        validate::validate_find_by_id_param(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, params: FindByIdParams) -> Result<Todo> {
        commands::find::by_id(&*store, &params)
    }

    fn render(&self, todo: Todo) -> CmdResult {
        announce("Find by id: ", todo)
    }
}

pub struct FindByTitleCommand;

impl Command for FindByTitleCommand {
    type Params = FindByTitleParams;
    type Output = Option<Todo>;

    fn name(&self) -> &'static str {
        "find-by-title"
    }

    fn usage(&self) -> &'static str {
        "<title>"
    }

    fn validate(&self, params: &[String]) -> Result<FindByTitleParams> {
        validate::validate_find_by_title_param(params)
    }

    fn execute(
        &self,
        store: &mut dyn TodoStore,
        params: FindByTitleParams,
    ) -> Result<Option<Todo>> {
        commands::find::by_title(&*store, &params.title)
    }

    fn render(&self, found: Option<Todo>) -> CmdResult {
        match found {
            Some(todo) => announce("Todo found:", todo),
            None => CmdResult::default()
                .with_message(CmdMessage::warning("No todo found with that title.")),
        }
    }
}

pub struct FindByStatusCommand;

impl Command for FindByStatusCommand {
    type Params = Status;
    type Output = (Status, Vec<Todo>);

    fn name(&self) -> &'static str {
        "find-by-status"
    }

    fn usage(&self) -> &'static str {
        "<done|not-done>"
    }

    fn validate(&self, params: &[String]) -> Result<Status> {
        validate::validate_status_param(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, status: Status) -> Result<(Status, Vec<Todo>)> {
        Ok((status, commands::find::by_status(&*store, status)?))
    }

    fn render(&self, (status, todos): (Status, Vec<Todo>)) -> CmdResult {
        if todos.is_empty() {
            return CmdResult::default().with_message(CmdMessage::warning(format!(
                "No todos found with status '{}'.",
                status
            )));
        }
        let mut result = CmdResult::default();
        for line in format_list(&todos) {
            result.add_message(CmdMessage::info(line));
        }
        result.with_todos(todos)
    }
}

pub struct CompleteCommand;

impl Command for CompleteCommand {
    type Params = CompleteParams;
    type Output = Todo;

    fn name(&self) -> &'static str {
        "complete"
    }

    fn usage(&self) -> &'static str {
        "<id>"
    }

    fn validate(&self, params: &[String]) -> Result<CompleteParams> {
        validate::validate_complete_todo_param(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, params: CompleteParams) -> Result<Todo> {
        commands::complete::run(store, &params)
    }

    fn render(&self, todo: Todo) -> CmdResult {
        announce("Todo completed:", todo)
    }
}

pub struct EditTitleCommand;

impl Command for EditTitleCommand {
    type Params = EditTitleParams;
    type Output = Todo;

    fn name(&self) -> &'static str {
        "edit-title"
    }

    fn usage(&self) -> &'static str {
        "<id> <new title>"
    }

    fn validate(&self, params: &[String]) -> Result<EditTitleParams> {
        validate::validate_edit_title_params(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, params: EditTitleParams) -> Result<Todo> {
        commands::edit::run(store, params)
    }

    fn render(&self, todo: Todo) -> CmdResult {
        announce("Todo title updated:", todo)
    }
}

pub struct DeleteCommand;

impl Command for DeleteCommand {
    type Params = DeleteParams;
    type Output = ();

    fn name(&self) -> &'static str {
        "delete"
    }

    fn usage(&self) -> &'static str {
        "<id>"
    }

    fn validate(&self, params: &[String]) -> Result<DeleteParams> {
        validate::validate_delete_todo_params(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, params: DeleteParams) -> Result<()> {
        commands::delete::run(store, &params)
    }

    fn render(&self, _output: ()) -> CmdResult {
        CmdResult::default().with_message(CmdMessage::success("Deletion completed"))
    }
}

pub struct AddLabelCommand;

impl Command for AddLabelCommand {
    type Params = AddLabelParams;
    type Output = Todo;

    fn name(&self) -> &'static str {
        "add-label"
    }

    fn usage(&self) -> &'static str {
        "<id> <label>"
    }

    fn validate(&self, params: &[String]) -> Result<AddLabelParams> {
        validate::validate_add_label_params(params)
    }

    fn execute(&self, store: &mut dyn TodoStore, params: AddLabelParams) -> Result<Todo> {
        commands::label::run(store, params)
    }

    fn render(&self, todo: Todo) -> CmdResult {
        let labels = format_labels(&todo);
        announce("Label added:", todo).with_message(CmdMessage::info(labels))
    }
}

/// A success header followed by the formatted todo.
fn announce(header: &str, todo: Todo) -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::success(header))
        .with_message(CmdMessage::info(format(&todo)))
        .with_todos(vec![todo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> TodoApi<InMemoryStore> {
        TodoApi::new(InMemoryStore::new())
    }

    #[test]
    fn registers_all_builtin_commands() {
        let names: Vec<_> = Registry::default().commands().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "add",
                "add-label",
                "complete",
                "delete",
                "edit-title",
                "find-by-id",
                "find-by-status",
                "find-by-title",
                "list",
            ]
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = api().run::<&str>("frobnicate", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn add_renders_header_and_todo() {
        let mut api = api();
        let result = api.run("add", &["Buy milk"]).unwrap();

        assert_eq!(result.lines(), vec!["New Todo added:", "1 - [ ] Buy milk"]);
        assert_eq!(result.todos[0].id, 1);
        assert_eq!(api.store().todos().len(), 1);
    }

    #[test]
    fn list_renders_todos_and_count() {
        let store = StoreFixture::new()
            .with_done_todo(1, "Read a book")
            .with_todo(2, "Wash up")
            .build();
        let mut api = TodoApi::new(store);
        let result = api.run::<&str>("list", &[]).unwrap();

        assert_eq!(
            result.lines(),
            vec!["1 - [x] Read a book", "2 - [ ] Wash up", "You have 2 todos."]
        );
    }

    #[test]
    fn validation_failure_never_reaches_store() {
        let mut api = api();
        let err = api.run("add", &["a", "b"]).unwrap_err();

        assert!(matches!(err, TodoError::Invalid(_)));
        assert_eq!(api.store().writes(), 0);
    }

    #[test]
    fn find_by_title_absence_is_not_an_error() {
        let mut api = api();
        let result = api.run("find-by-title", &["Missing"]).unwrap();
        assert_eq!(result.lines(), vec!["No todo found with that title."]);
        assert!(result.todos.is_empty());
    }

    #[test]
    fn find_by_status_renders_matches_or_notice() {
        let store = StoreFixture::new()
            .with_done_todo(1, "Read a book")
            .with_todo(2, "Wash up")
            .build();
        let mut api = TodoApi::new(store);

        let open = api.run("find-by-status", &["not-done"]).unwrap();
        assert_eq!(open.lines(), vec!["2 - [ ] Wash up"]);

        api.run("delete", &["1"]).unwrap();
        let done = api.run("find-by-status", &["done"]).unwrap();
        assert_eq!(done.lines(), vec!["No todos found with status 'done'."]);
    }

    #[test]
    fn full_lifecycle_through_dispatch() {
        let mut api = api();
        api.run("add", &["Buy milk"]).unwrap();
        api.run("add", &["Call mom"]).unwrap();

        let completed = api.run("complete", &["1"]).unwrap();
        assert_eq!(completed.lines(), vec!["Todo completed:", "1 - [x] Buy milk"]);

        let edited = api.run("edit-title", &["2", "Call dad"]).unwrap();
        assert_eq!(edited.lines(), vec!["Todo title updated:", "2 - [ ] Call dad"]);

        let labeled = api.run("add-label", &["2", "family"]).unwrap();
        assert_eq!(
            labeled.lines(),
            vec!["Label added:", "2 - [ ] Call dad", "Labels: family"]
        );

        let found = api.run("find-by-id", &["2"]).unwrap();
        assert_eq!(found.lines(), vec!["Find by id: ", "2 - [ ] Call dad"]);

        let deleted = api.run("delete", &["1"]).unwrap();
        assert_eq!(deleted.lines(), vec!["Deletion completed"]);

        let err = api.run("find-by-id", &["1"]).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id: 1, is not found!");
    }

    struct CountCommand;

    impl Command for CountCommand {
        type Params = ();
        type Output = usize;

        fn name(&self) -> &'static str {
            "count"
        }

        fn usage(&self) -> &'static str {
            ""
        }

        fn validate(&self, _params: &[String]) -> Result<()> {
            Ok(())
        }

        fn execute(&self, store: &mut dyn TodoStore, _params: ()) -> Result<usize> {
            Ok(store.get()?.len())
        }

        fn render(&self, count: usize) -> CmdResult {
            CmdResult::default().with_message(CmdMessage::info(count.to_string()))
        }
    }

    #[test]
    fn registry_accepts_new_commands() {
        let mut registry = Registry::default();
        registry.register(CountCommand);
        let mut api = TodoApi::with_registry(StoreFixture::new().with_todos(3).build(), registry);

        let result = api.run::<&str>("count", &[]).unwrap();
        assert_eq!(result.lines(), vec!["3"]);
    }
}
