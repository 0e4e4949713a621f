use checkli::api::ChecklistApi;
use checkli::commands::{CmdMessage, CmdResult, MessageLevel};
use checkli::config::CheckliConfig;
use checkli::error::Result;
use checkli::model::ListState;
use checkli::render::render_list;
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod shell;
mod styles;

use args::Cli;
use shell::ShellCommand;
use styles::SHELL_STYLES;

const LOCAL_CONFIG: &str = ".checkli.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ChecklistApi,
    line_width: usize,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let config = load_config(&cli)?;
    let mut ctx = AppContext {
        api: ChecklistApi::new(ListState::with_items(config.seed_items())),
        line_width: config.line_width,
    };

    // Initial draw, before any input arrives
    refresh(&ctx)?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        prompt()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match shell::parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => print_help(),
            Ok(command) => match dispatch(&mut ctx.api, command) {
                Ok(result) => print_messages(&result.messages),
                Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
            },
            Err(message) => print_messages(&[CmdMessage::error(message)]),
        }

        // Mutate-then-render as one protocol: every processed line ends with
        // a full redraw, whether or not anything was committed
        refresh(&ctx)?;
    }

    Ok(())
}

fn dispatch(api: &mut ChecklistApi, command: ShellCommand) -> Result<CmdResult> {
    match command {
        ShellCommand::Add(name) => api.add_item(name),
        ShellCommand::Toggle(index) => api.toggle_item(index),
        ShellCommand::Delete(index) => api.delete_item(index),
        ShellCommand::Rename(index, Some(name)) => api.rename_item(index, name),
        ShellCommand::Rename(index, None) => {
            // Bare `rename <n>` recommits the current name through the same
            // path, like an edit field losing focus without a submission
            let current = index
                .position(api.state().items.len())
                .map(|pos| api.state().items[pos].name.clone())
                .unwrap_or_default();
            api.rename_item(index, current)
        }
        ShellCommand::Hide(flag) => api.set_hide_checked(flag),
        ShellCommand::Search(term) => api.set_search_term(term.unwrap_or_default()),
        ShellCommand::List => api.list_items(),
        // handled by the shell loop before dispatch
        ShellCommand::Help | ShellCommand::Quit => Ok(CmdResult::default()),
    }
}

/// Replaces the displayed list wholesale: status line, then the rendered
/// visible items.
fn refresh(ctx: &AppContext) -> Result<()> {
    let state = ctx.api.state();

    println!();
    let mut status = Vec::new();
    if !state.search_term.is_empty() {
        status.push(format!("search: \"{}\"", state.search_term));
    }
    if state.hide_checked_items {
        status.push("checked items hidden".to_string());
    }
    if !status.is_empty() {
        println!(
            "{}",
            SHELL_STYLES
                .status
                .apply_to(format!("  [{}]", status.join(", ")))
        );
    }

    let result = ctx.api.list_items()?;
    print!(
        "{}",
        render_list(&result.listed_items, Utc::now(), ctx.line_width)
    );
    Ok(())
}

fn prompt() -> Result<()> {
    print!("{} ", SHELL_STYLES.prompt.apply_to(">"));
    io::stdout().flush()?;
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_help() {
    let text = "\
  add <name>           add an item
  check <n>            toggle the checked flag
  delete <n>           remove an item (later items shift up)
  rename <n> [name]    rename an item; without a name, recommits the current one
  hide on|off          hide or show checked items
  search [term]        show only exact name matches; bare `search` clears
  list                 redraw the list
  quit                 leave (the list is not saved)";
    println!("{}", SHELL_STYLES.help.apply_to(text));
}

fn load_config(cli: &Cli) -> Result<CheckliConfig> {
    if let Some(path) = &cli.config {
        return CheckliConfig::load(path);
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return CheckliConfig::load(&local);
    }

    if let Some(dirs) = ProjectDirs::from("com", "checkli", "checkli") {
        return CheckliConfig::load(dirs.config_dir().join("config.json"));
    }

    Ok(CheckliConfig::default())
}
