use clap::{CommandFactory, FromArgMatches};
use colored::*;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;
use todos::api::{CmdMessage, MessageLevel, Registry, TodoApi};
use todos::config::TodoConfig;
use todos::error::{Result, TodoError};
use todos::store::fs::FileStore;

mod args;
use args::Cli;

const HOME_ENV: &str = "TODO_HOME";
const STORE_ENV: &str = "TODO_STORE";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let registry = Registry::default();
    let matches = Cli::command()
        .after_help(commands_help(&registry))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    let dirs = AppDirs::locate()?;
    let config = TodoConfig::load(&dirs.config)?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let explicit = cli
        .store
        .clone()
        .or_else(|| std::env::var_os(STORE_ENV).map(PathBuf::from));
    let store_path = config.resolve_store_path(explicit, &dirs.data);
    debug!("using store {}", store_path.display());

    let mut api = TodoApi::with_registry(FileStore::new(store_path), registry);
    let command = cli.command_name().unwrap_or("list");
    let result = api.run(command, cli.params())?;
    print_messages(&result.messages);
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

struct AppDirs {
    config: PathBuf,
    data: PathBuf,
}

impl AppDirs {
    /// `TODO_HOME` holds both config and data when set; otherwise the platform dirs.
    fn locate() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            let home = PathBuf::from(home);
            return Ok(Self {
                config: home.clone(),
                data: home,
            });
        }
        let proj_dirs = ProjectDirs::from("com", "todos", "todos").ok_or_else(|| {
            TodoError::Config(format!(
                "could not determine a home directory; set {}",
                HOME_ENV
            ))
        })?;
        Ok(Self {
            config: proj_dirs.config_dir().to_path_buf(),
            data: proj_dirs.data_dir().to_path_buf(),
        })
    }
}

fn commands_help(registry: &Registry) -> String {
    let mut help = String::from("Commands:\n");
    for (name, usage) in registry.commands() {
        help.push_str(&format!("  {:<15} {}\n", name, usage));
    }
    help
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
