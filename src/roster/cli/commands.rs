//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place
//! that knows about terminal I/O, prompts, the system clipboard and exit
//! codes.
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging and context, dispatch
//! - `init_context()`: builds `AppContext` with API and configuration
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{print_messages, render_people_table, render_person};
use super::setup::{Cli, Commands, CopyTarget, FilterArgs, RoleArg, YesNo};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use roster::api::{ConfigAction, PersonChanges, RosterApi, RosterPaths};
use roster::clipboard::{deliver, CopyOutcome, SystemClipboard};
use roster::compose::Scope;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::PersonInput;
use roster::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

struct AppContext {
    api: RosterApi<FileStore>,
    config: RosterConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            role,
            email,
            guardian,
            passport,
        }) => handle_add(&mut ctx, name, role, email, guardian, passport),
        Some(Commands::Edit {
            id,
            name,
            role,
            email,
            guardian,
            passport,
        }) => {
            let changes = PersonChanges {
                name,
                role: role.map(Into::into),
                email,
                guardian_email: guardian,
                passport: passport.map(YesNo::into),
            };
            handle_edit(&mut ctx, &id, changes)
        }
        Some(Commands::Remove { ids, yes }) => handle_remove(&mut ctx, ids, yes),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::List { filter }) => handle_list(&ctx, &filter),
        Some(Commands::Copy { target, print }) => handle_copy(&mut ctx, target, print),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, &FilterArgs::default()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("ROSTER_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Store("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    log::debug!("Data directory: {}", data_dir.display());

    let config = RosterConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {}", e);
        RosterConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = RosterApi::new(store, RosterPaths { data_dir });

    Ok(AppContext { api, config })
}

fn handle_add(
    ctx: &mut AppContext,
    name: Vec<String>,
    role: RoleArg,
    email: Option<String>,
    guardian: Option<String>,
    passport: bool,
) -> Result<()> {
    let input = PersonInput {
        name: name.join(" "),
        role: role.into(),
        email,
        guardian_email: guardian,
        passport,
    };
    let result = ctx.api.add_person(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, changes: PersonChanges) -> Result<()> {
    let result = ctx.api.edit_person(id, changes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<String>, yes: bool) -> Result<()> {
    let ask = ctx.config.confirm_remove && !yes;
    let mut confirmed = Vec::with_capacity(ids.len());

    for id in ids {
        let label = ctx
            .api
            .people()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone());
        match label {
            Some(name) if ask => {
                if confirm(&format!("Remove this person? {} ({}) [y/N]: ", name, id))? {
                    confirmed.push(id);
                } else {
                    println!("{}", format!("Kept {}", name).dimmed());
                }
            }
            // Unknown ids go through so the command layer reports the no-op.
            _ => confirmed.push(id),
        }
    }

    if confirmed.is_empty() {
        return Ok(());
    }
    let result = ctx.api.remove_people(&confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().map_err(RosterError::Io)?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(RosterError::Io)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_person(id)?;
    for person in &result.listed_people {
        print!("{}", render_person(person));
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: &FilterArgs) -> Result<()> {
    let result = ctx.api.list_people(&filter.view_filter(), filter.query())?;
    print!("{}", render_people_table(&result.listed_people));
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, target: CopyTarget, print_only: bool) -> Result<()> {
    let result = match target {
        CopyTarget::All => ctx.api.copy_all(Scope::All)?,
        CopyTarget::Students => ctx.api.copy_all(Scope::Students)?,
        CopyTarget::Chaperones => ctx.api.copy_all(Scope::Chaperones)?,
        CopyTarget::Selected {
            ids,
            visible,
            filter,
            guardians,
        } => {
            if visible {
                ctx.api
                    .select_visible(&filter.view_filter(), filter.query())?;
            }
            if !ids.is_empty() {
                ctx.api.toggle_selected(&ids)?;
            }
            log::debug!("{} selected", ctx.api.selection().len());
            ctx.api.copy_selected(guardians)?
        }
    };

    print_messages(&result.messages);

    let Some(emails) = result.emails else {
        return Ok(());
    };

    let outcome = if print_only || !ctx.config.use_clipboard {
        CopyOutcome::Manual(emails.clone())
    } else {
        deliver(&mut SystemClipboard, &emails)
    };

    match outcome {
        CopyOutcome::Copied => {
            let count = emails.split(',').count();
            println!("{}", format!("Copied {} addresses to clipboard", count).green());
        }
        CopyOutcome::Manual(text) => {
            eprintln!("{}", "Copy:".dimmed());
            println!("{}", text);
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in RosterConfig::KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
