//! Personalistar CLI - Site configuration and catalog management.
//!
//! # Usage
//!
//! ```bash
//! # Write the default configuration and an empty catalog
//! ps-cli seed
//!
//! # Change the primary color
//! PERSONALISTAR_PASSWORD=... ps-cli config set theme.primaryColor "#123456"
//!
//! # Upload a logo
//! PERSONALISTAR_PASSWORD=... ps-cli config image assets.logoUrl ./logo.png
//!
//! # Add a product from a YAML form
//! PERSONALISTAR_PASSWORD=... ps-cli products add cartao.yaml
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the seed snapshot
//! - `config show|set|image` - Inspect and edit the site configuration
//! - `slides add|remove` - Manage home page banner slides
//! - `products list|add|edit|delete` - Manage the catalog
//!
//! Commands that change content log in as `--username` with the password in
//! `PERSONALISTAR_PASSWORD`, then write the snapshot back.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(author, version, about = "Personalistar CLI tools")]
struct Cli {
    /// Snapshot file holding the site configuration and catalog
    #[arg(
        long,
        global = true,
        env = "PERSONALISTAR_DATA_PATH",
        default_value = "data/personalistar.json"
    )]
    data: PathBuf,

    /// Admin login name
    #[arg(long, global = true, env = "ADMIN_USERNAME", default_value = "admin")]
    username: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default site configuration and an empty catalog
    Seed {
        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },
    /// Inspect and edit the site configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage home page banner slides
    Slides {
        #[command(subcommand)]
        action: SlidesAction,
    },
    /// Manage the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration as JSON
    Show,
    /// Set one field by dotted path, e.g. `companyInfo.phone1`
    Set { path: String, value: String },
    /// Encode an image file into an image field, e.g. `assets.logoUrl`
    Image { path: String, file: PathBuf },
}

#[derive(Subcommand)]
enum SlidesAction {
    /// Append a slide
    Add {
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        button_text: Option<String>,
        #[arg(long)]
        button_link: Option<String>,
    },
    /// Remove the slide at an index; later slides shift down
    Remove { index: usize },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Print the product table
    List,
    /// Create a product from a YAML form
    Add { file: PathBuf },
    /// Replace fields of a product from a YAML form
    Edit { id: String, file: PathBuf },
    /// Delete a product
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so it can supply argument defaults
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so command output on stdout stays machine-readable.
///
/// `LOG_FORMAT=json` switches to one JSON object per event.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "personalistar=info,ps_cli=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::new(cli.data, cli.username);
    match cli.command {
        Commands::Seed { force } => commands::seed::run(&ctx, force).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&ctx).await?,
            ConfigAction::Set { path, value } => commands::config::set(&ctx, &path, &value).await?,
            ConfigAction::Image { path, file } => {
                commands::config::image(&ctx, &path, &file).await?;
            }
        },
        Commands::Slides { action } => match action {
            SlidesAction::Add {
                image,
                title,
                subtitle,
                button_text,
                button_link,
            } => {
                let fields = commands::slides::SlideArgs {
                    image_url: image,
                    title,
                    subtitle,
                    button_text,
                    button_link,
                };
                commands::slides::add(&ctx, fields).await?;
            }
            SlidesAction::Remove { index } => commands::slides::remove(&ctx, index).await?,
        },
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&ctx).await?,
            ProductsAction::Add { file } => commands::products::add(&ctx, &file).await?,
            ProductsAction::Edit { id, file } => commands::products::edit(&ctx, &id, &file).await?,
            ProductsAction::Delete { id } => commands::products::delete(&ctx, &id).await?,
        },
    }
    Ok(())
}
