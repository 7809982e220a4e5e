use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use pharmatrace::api::{Served, TraceApi};
use pharmatrace::config::TraceConfig;
use pharmatrace::error::{Result, TraceError};
use pharmatrace::model::{Product, TraceEvent, UserAccount};
use pharmatrace::store::ledger::{HttpTransport, LedgerStore};
use pharmatrace::store::local::LocalStore;
use std::path::PathBuf;
use std::time::Duration;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TraceApi<LedgerStore<HttpTransport>>,
    data_dir: PathBuf,
    config: TraceConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Products => handle_products(&ctx),
        Commands::AddProduct {
            name,
            price,
            qty,
            desc,
            image,
        } => handle_add_product(&ctx, &name, &price, &qty, &desc, &image),
        Commands::Trace {
            name,
            event_type,
            status,
            location,
            person,
            notes,
        } => handle_trace(&ctx, &name, &event_type, &status, location, person, notes),
        Commands::Register {
            username,
            password,
            contact,
            email,
            address,
            full_name,
        } => handle_register(&ctx, username, password, contact, email, address, full_name),
        Commands::Seed => handle_seed(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "pharmatrace", "pharmatrace")
                .ok_or_else(|| TraceError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = TraceConfig::load(&data_dir)?;
    let ledger_url = cli.ledger_url.as_ref().unwrap_or(&config.ledger_url);

    let ledger = LedgerStore::connect(ledger_url, Duration::from_secs(config.timeout_secs));
    let local = LocalStore::new(data_dir.join(&config.data_file));

    Ok(AppContext {
        api: TraceApi::new(ledger, local),
        data_dir,
        config,
    })
}

fn handle_products(ctx: &AppContext) -> Result<()> {
    // Read failures degrade to an empty listing, never an error page.
    let outcome = match ctx.api.products() {
        Ok(outcome) => outcome,
        Err(_) => {
            println!("{}", "No products available.".yellow());
            return Ok(());
        }
    };

    if outcome.served == Served::Fallback {
        println!("{}", "Ledger unreachable, showing local records.".yellow());
    }
    if outcome.value.skipped > 0 {
        println!(
            "{}",
            format!(
                "Warning: skipped {} unreadable record(s).",
                outcome.value.skipped
            )
            .yellow()
        );
    }

    if outcome.value.products.is_empty() {
        println!("{}", "No products available.".yellow());
        return Ok(());
    }

    for product in &outcome.value.products {
        print_product(product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!(
        "{}  {} ({} in stock)",
        product.name.bold(),
        format!("${}", product.price).green(),
        product.qty
    );
    println!("  {}", product.desc);
    println!(
        "  {} {}  {} {}",
        "last update:".dimmed(),
        product.last_update,
        "trace:".dimmed(),
        product.tracing_info.cyan()
    );
}

fn handle_add_product(
    ctx: &AppContext,
    name: &str,
    price: &str,
    qty: &str,
    desc: &str,
    image: &str,
) -> Result<()> {
    let today = Local::now().date_naive();
    let outcome = ctx.api.add_product(name, price, qty, desc, image, today)?;
    print_write_confirmation("Product added", outcome.served);
    Ok(())
}

fn handle_trace(
    ctx: &AppContext,
    name: &str,
    event_type: &str,
    status: &str,
    location: Option<String>,
    person: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let mut event = TraceEvent::new(event_type, status);
    if let Some(location) = location {
        event = event.with_location(location);
    }
    if let Some(person) = person {
        event = event.with_responsible(person);
    }
    if let Some(notes) = notes {
        event = event.with_notes(notes);
    }

    let today = Local::now().date_naive();
    match ctx.api.record_trace_event(name, &event, today) {
        Ok(outcome) => {
            print_write_confirmation("Tracing details updated", outcome.served);
            Ok(())
        }
        Err(e @ TraceError::RecordNotFound(_)) => Err(e),
        // Other write failures degrade to one generic message.
        Err(_) => Err(TraceError::Api(
            "Error updating tracing information".to_string(),
        )),
    }
}

fn handle_register(
    ctx: &AppContext,
    username: String,
    password: String,
    contact: String,
    email: String,
    address: String,
    full_name: Option<String>,
) -> Result<()> {
    let account = UserAccount {
        full_name: full_name.unwrap_or_else(|| username.clone()),
        username,
        password,
        contact,
        email,
        address,
    };
    let outcome = ctx.api.register_user(&account)?;
    print_write_confirmation("Registration successful", outcome.served);
    Ok(())
}

fn handle_seed(ctx: &AppContext) -> Result<()> {
    let seeded = ctx.api.seed_local()?;
    if seeded == 0 {
        println!("{}", "Local store already seeded.".yellow());
    } else {
        println!("{} {} sample products", "Seeded".green(), seeded);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("ledger-url = {}", ctx.config.ledger_url);
            println!("timeout-secs = {}", ctx.config.timeout_secs);
            println!("data-file = {}", ctx.config.data_file);
        }
        (Some("ledger-url"), None) => println!("{}", ctx.config.ledger_url),
        (Some("timeout-secs"), None) => println!("{}", ctx.config.timeout_secs),
        (Some("data-file"), None) => println!("{}", ctx.config.data_file),
        (Some(key), Some(value)) => {
            let mut config = ctx.config.clone();
            match key {
                "ledger-url" => config.ledger_url = value,
                "timeout-secs" => {
                    config.timeout_secs = value
                        .parse()
                        .map_err(|_| TraceError::Api(format!("Invalid timeout: {}", value)))?;
                }
                "data-file" => config.data_file = value,
                other => {
                    println!("Unknown config key: {}", other);
                    return Ok(());
                }
            }
            config.save(&ctx.data_dir)?;
            println!("{}", "Configuration updated".green());
        }
        (Some(other), None) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_write_confirmation(message: &str, served: Served) {
    match served {
        Served::Ledger => println!("{}", message.green()),
        Served::Fallback => println!("{} {}", message.green(), "(saved locally)".yellow()),
    }
}
