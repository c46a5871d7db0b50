use clap::Parser;
use colored::*;
use markhive::commands::{self, CmdMessage, MessageLevel};
use markhive::config::MarkhiveConfig;
use markhive::error::Result;
use markhive::index::SearchIndex;
use markhive::model::NoteRecord;
use markhive::server::{self, AppState};
use markhive::summary;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { notes_dir, out_dir } => handle_build(notes_dir, out_dir),
        Commands::Search { term, summary } => handle_search(summary, term),
        Commands::Serve {
            html_dir,
            summary,
            addr,
        } => handle_serve(html_dir, summary, addr),
        Commands::Export { out_dir } => handle_export(out_dir),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn handle_build(notes_dir: PathBuf, out_dir: PathBuf) -> Result<()> {
    let config = MarkhiveConfig::load(&out_dir).unwrap_or_default();
    let result = commands::build::run(&notes_dir, &out_dir, &config.note_extensions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(summary_path: PathBuf, term: String) -> Result<()> {
    let result = commands::search::run(&summary_path, &term)?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_serve(
    html_dir: PathBuf,
    summary_path: Option<PathBuf>,
    addr: Option<String>,
) -> Result<()> {
    let config = MarkhiveConfig::load(&html_dir).unwrap_or_default();
    let summary_path = summary_path.unwrap_or_else(|| html_dir.join(summary::SUMMARY_FILENAME));
    let addr = addr.unwrap_or(config.bind_addr);

    let index = SearchIndex::load(&summary_path)?;
    let state = AppState::new(index, html_dir);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(state, &addr))
}

fn handle_export(out_dir: PathBuf) -> Result<()> {
    let result = commands::export::run(&out_dir)?;
    print_messages(&result.messages);
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

const TITLE_WIDTH: usize = 40;

fn print_records(records: &[NoteRecord]) {
    for record in records {
        let title = truncate_to_width(&record.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());
        let tags = if record.tags.is_empty() {
            String::new()
        } else {
            format!("[{}]", record.tags.join(", "))
        };
        println!(
            "{}{}  {}  {}",
            title.bold(),
            " ".repeat(padding),
            record.file.cyan(),
            tags.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
