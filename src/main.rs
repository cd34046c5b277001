use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tabled::{settings::Style, Table, Tabled};

use quick_invoice::assets::STYLESHEET_FILE;
use quick_invoice::config::CONFIG_FILE;
use quick_invoice::invoice::{format_money, invoice_total};
use quick_invoice::{
    collect_all_tasks, collect_invoice_info, load_config, render_invoice, write_invoice, Assets,
    InvoiceError, Prompter, Result, Task,
};

#[derive(Parser)]
#[command(name = "quick-invoice")]
#[command(version, about = "Interactive HTML invoice generator", long_about = None)]
struct Cli {
    /// Config file, created with defaults if missing
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Stylesheet to inline (built-in styles are used if missing)
    #[arg(short, long, default_value = STYLESHEET_FILE)]
    stylesheet: PathBuf,

    /// Insert client and task text into the HTML without escaping
    #[arg(long)]
    no_escape: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let writing = Arc::new(AtomicBool::new(false));
    let writing_handler = Arc::clone(&writing);
    if let Err(e) = ctrlc::set_handler(move || {
        if cancels_on_interrupt(&writing_handler) {
            println!("\n{}", InvoiceError::Cancelled);
            std::process::exit(130);
        }
        tracing::info!("interrupt ignored while the invoice is being written");
    }) {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
    }

    match run(&cli, &writing) {
        Ok(()) => {}
        Err(InvoiceError::Cancelled) => {
            println!("\n{}", InvoiceError::Cancelled);
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("\nAn error occurred: {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "quick_invoice=warn",
        1 => "quick_invoice=info",
        _ => "quick_invoice=debug",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Ctrl+C cancels the run until the invoice write starts; after that the
/// write is allowed to finish so no staged temp file is left behind.
fn cancels_on_interrupt(writing: &AtomicBool) -> bool {
    !writing.load(Ordering::SeqCst)
}

fn run(cli: &Cli, writing: &AtomicBool) -> Result<()> {
    println!("Invoice Generator");
    println!("{}", "=".repeat(16));

    let mut config = load_config(&cli.config)?;
    if cli.no_escape {
        config.escape_html = false;
    }
    let assets = Assets::load(&cli.stylesheet, &config)?;

    let mut prompter = Prompter::stdio().with_currency(&config.currency_symbol);
    let info = collect_invoice_info(&mut prompter)?;
    let tasks = collect_all_tasks(&mut prompter, info.default_rate, info.variable_rates)?;

    print_summary(&tasks, &config.currency_symbol);

    let html = render_invoice(&info.org_name, &tasks, &config, &assets);
    writing.store(true, Ordering::SeqCst);
    let path = write_invoice(&info.org_name, &html, &config)?;

    println!("\nSuccess! Invoice generated at: {}", path.display());
    println!("\nTo create a PDF:");
    println!("1. Open the HTML file in your web browser");
    println!("2. Press Ctrl+P (Cmd+P on Mac)");
    println!("3. Select 'Save as PDF' as the destination");
    println!("4. Click 'Save'");

    Ok(())
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "RATE")]
    rate: String,
    #[tabled(rename = "SUBTOTAL")]
    subtotal: String,
}

fn print_summary(tasks: &[Task], currency_symbol: &str) {
    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| TaskRow {
            index: idx + 1,
            date: task.date.clone(),
            description: task.description.clone(),
            hours: task.hours.to_string(),
            rate: format_money(task.rate, currency_symbol),
            subtotal: format_money(task.subtotal(), currency_symbol),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!();
    println!("{table}");
    println!(
        "Total: {} across {} task(s)",
        format_money(invoice_total(tasks), currency_symbol),
        tasks.len()
    );
}
