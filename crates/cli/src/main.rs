use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{
    CategoryTarget, EngineConfig, FilterResult, FilterSession, ResultSummary, SelectionPolicy,
    UserIntent,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const NO_RESULTS_MESSAGE: &str = "Nenhum item corresponde aos critérios de busca";

/// Search Filter - narrow an item list by name and category
#[derive(Parser)]
#[command(name = "search-filter")]
#[command(about = "Filter an item collection by free-text query and category", long_about = None)]
struct Cli {
    /// Item file (`.json` array or `id::name::category` lines); uses the built-in sample if omitted
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Engine config JSON (selection policy, placeholder)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Clicking the selected category again clears it
    #[arg(long)]
    toggle: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query and print the visible items
    Query {
        /// Text matched against item names (case-insensitive substring)
        #[arg(long, default_value = "")]
        text: String,

        /// Restrict to one category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories present in the collection
    Categories,

    /// Read query edits and category clicks from stdin
    Interactive,
}

/// One line of interactive input
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Intent(UserIntent),
    Pick(String),
    Help,
    Quit,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.items {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load items from {}", path.display()))?,
        None => Catalog::sample(),
    };

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if cli.toggle {
        config = config.with_selection_policy(SelectionPolicy::Toggle);
    }
    tracing::debug!("Selection policy: {:?}", config.selection_policy);

    let mut session = FilterSession::from_catalog(catalog, config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Query {
            text,
            category,
            json,
        } => handle_query(&mut session, text, category, json)?,
        Commands::Categories => handle_categories(&session),
        Commands::Interactive => handle_interactive(&mut session)?,
    }

    Ok(())
}

/// Handle the 'query' command
fn handle_query(
    session: &mut FilterSession,
    text: String,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    session.apply(UserIntent::QueryChanged(text));
    if let Some(category) = category {
        session.apply(UserIntent::CategoryClicked(CategoryTarget::Named(category)));
    }

    if json {
        let result = session.result();
        let output = serde_json::json!({
            "state": session.state(),
            "count": result.count(),
            "summary": result.summary(),
            "clear_visible": session.is_clear_visible(),
            "items": &result.visible_items,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_screen(session);
    }
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(session: &FilterSession) {
    for category in session.categories() {
        println!("{}", category);
    }
}

/// Handle the 'interactive' command
fn handle_interactive(session: &mut FilterSession) -> Result<()> {
    print_help();
    print_screen(session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match parse_command(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::Pick(id) => match session.select_item(&id) {
                Some(item) => println!("{} {} ({})", "Selecionado:".green(), item.name, item.category),
                None => println!("{} {}", "Item não visível:".red(), id),
            },
            ReplCommand::Intent(intent) => {
                session.apply(intent);
                print_screen(session);
            }
        }
        io::stdout().flush()?;
    }
    Ok(())
}

/// Turn one input line into a command.
///
/// Lines starting with `:` are commands; anything else replaces the query
/// text as typed, including surrounding whitespace.
fn parse_command(line: &str) -> ReplCommand {
    let Some(command) = line.strip_prefix(':') else {
        return ReplCommand::Intent(UserIntent::QueryChanged(line.to_string()));
    };

    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };
    match (name, arg) {
        ("q" | "quit", _) => ReplCommand::Quit,
        ("all", _) => ReplCommand::Intent(UserIntent::CategoryClicked(CategoryTarget::All)),
        ("cat", "") => ReplCommand::Help,
        ("cat", category) => ReplCommand::Intent(UserIntent::CategoryClicked(
            CategoryTarget::Named(category.to_string()),
        )),
        ("clear", _) => ReplCommand::Intent(UserIntent::ClearClicked),
        ("pick", id) if !id.is_empty() => ReplCommand::Pick(id.to_string()),
        _ => ReplCommand::Help,
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  <text>         set the search text");
    println!("  :cat <name>    select a category");
    println!("  :all           show all categories");
    println!("  :clear         clear search and category");
    println!("  :pick <id>     select a visible item");
    println!("  :quit          exit");
}

fn print_screen(session: &FilterSession) {
    let state = session.state();
    let result = session.result();

    println!();
    println!("{}", "Busca & Filtro".bold().blue());
    if state.query.is_empty() {
        println!("{} {}", ">".dimmed(), session.engine().placeholder().dimmed());
    } else {
        println!("{} {}", ">".dimmed(), state.query);
    }

    let mut bar = vec![category_chip("Todos", state.selected_category.is_none())];
    for category in session.categories() {
        let active = state.selected_category.as_deref() == Some(category.as_str());
        bar.push(category_chip(&category, active));
    }
    println!("{}", bar.join(" "));

    let mut header = count_line(&result);
    if session.is_clear_visible() {
        header.push_str(&format!("  {}", "[Limpar]".cyan()));
    }
    println!("{}", header);

    if result.summary() == ResultSummary::NoResults {
        println!("{}", NO_RESULTS_MESSAGE.dimmed());
        return;
    }
    for item in &result.visible_items {
        println!("  {} {} {}", item.id.green(), item.name, item.category.dimmed());
    }
}

fn category_chip(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label).on_blue().white().to_string()
    } else {
        format!("[{}]", label)
    }
}

fn count_line(result: &FilterResult<'_>) -> String {
    let noun = match result.summary() {
        ResultSummary::Singular => "resultado encontrado",
        ResultSummary::NoResults | ResultSummary::Plural => "resultados encontrados",
    };
    format!("{} {}", result.count(), noun)
}
