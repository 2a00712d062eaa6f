use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", version)]
#[command(about = "A small, scriptable todo list", long_about = None)]
pub struct Cli {
    /// Command to run (defaults to `list`), followed by its arguments
    // Everything from the command name on is left to the command's validator
    #[arg(
        value_name = "COMMAND [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub argv: Vec<String>,

    /// Todo file to use (overrides TODO_STORE and the config file)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn command_name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Raw arguments after the command name.
    pub fn params(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_and_raw_params() {
        let cli = Cli::try_parse_from(["todo", "edit-title", "2", "New title"]).unwrap();
        assert_eq!(cli.command_name(), Some("edit-title"));
        assert_eq!(cli.params(), vec!["2", "New title"]);
    }

    #[test]
    fn global_flags_come_before_the_command() {
        let cli =
            Cli::try_parse_from(["todo", "-v", "--store", "/tmp/t.json", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/t.json")));
        assert_eq!(cli.command_name(), Some("list"));
        assert!(cli.params().is_empty());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command_name().is_none());
    }

    #[test]
    fn flag_lookalikes_after_the_command_are_params() {
        let cli = Cli::try_parse_from(["todo", "add", "-v"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.command_name(), Some("add"));
        assert_eq!(cli.params(), ["-v"]);

        let cli = Cli::try_parse_from(["todo", "find-by-title", "--help", "--no-color"]).unwrap();
        assert!(!cli.no_color);
        assert_eq!(cli.params(), ["--help", "--no-color"]);
    }
}
