use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};

use super::menu::Menu;
use super::render::{Painter, render_contacts};
use crate::config::Config;
use crate::models::Contact;
use crate::store::{JsonFileStorage, RecordStore};
use crate::utils::{format_path_with_tilde, sanitize};

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(version = "0.1.0")]
#[command(
    about = "Keep a searchable book of names, phone numbers and email addresses",
    long_about = None
)]
pub struct Cli {
    /// Contacts data file (defaults to contacts.json)
    #[arg(short, long, env = "CONTACT_BOOK_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output (also disabled by a non-empty NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every contact
    List,
    /// Print contacts whose name contains QUERY (case-insensitive)
    Search {
        /// Text to look for in contact names
        query: String,
    },
    /// Show statistics about the contact book
    Stats,
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn no_color_env() -> bool {
    env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.file.clone(), cli.no_color || no_color_env());
    info!("Using contacts file {}", config.contacts_file.display());

    let mut store = RecordStore::open(JsonFileStorage::new(&config.contacts_file))?;
    let painter = Painter::new(config.color && io::stdout().is_terminal());

    match &cli.command {
        Some(Commands::List) => {
            print_contacts(&store.list(), &painter, "No contacts found.")?;
        }
        Some(Commands::Search { query }) => {
            let message = format!("No contacts match '{}'.", sanitize(query.trim()));
            print_contacts(&store.search(query), &painter, &message)?;
        }
        Some(Commands::Stats) => {
            show_stats(&store)?;
        }
        None => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&mut store, stdin.lock(), io::stdout().lock(), painter);
            menu.run()?;
        }
    }

    Ok(())
}

fn print_contacts(contacts: &[&Contact], painter: &Painter, empty: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if contacts.is_empty() {
        writeln!(stdout, "{}", empty)?;
    } else {
        writeln!(stdout, "{}", render_contacts(contacts, painter))?;
    }
    Ok(())
}

fn show_stats(store: &RecordStore<JsonFileStorage>) -> Result<()> {
    let contacts = store.list();
    let updated = contacts.iter().filter(|c| c.updated_at.is_some()).count();

    println!("Contact Book Statistics");
    println!("=======================");
    println!("Total contacts: {}", contacts.len());
    println!("  Updated since creation: {}", updated);
    println!("  Indexed name substrings: {}", store.index().len());
    println!();
    println!("Data file: {}", format_path_with_tilde(store.storage().path()));

    if let Some(oldest) = contacts.iter().map(|c| c.created_at).min() {
        println!("Oldest contact: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = contacts.iter().map(|c| c.created_at).max() {
        println!("Newest contact: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
