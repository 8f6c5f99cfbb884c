use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sf_core::{Pipeline, bundle, export_json, import_json, import_package};
use sf_store::{EngineConfig, Store, default_base_dir};

#[derive(Parser)]
#[command(name = "sf", about = "Space-field cognition engine CLI")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline on a prompt and persist the result
    Run {
        /// Prompt text (blank falls back to the default prompt)
        prompt: String,

        /// Skip persisting the computed package
        #[arg(long)]
        no_save: bool,
    },

    /// Show the stored package summary
    Stats,

    /// Write the stored package to a JSON file
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Validate a JSON package file and store it
    Import {
        /// Input file path
        path: PathBuf,
    },
}

fn base_dir() -> PathBuf {
    std::env::var("SF_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(default_base_dir)
}

fn open_store() -> Result<Store> {
    let base = base_dir();
    std::fs::create_dir_all(&base)
        .with_context(|| format!("failed to create {}", base.display()))?;
    Store::open(&base.join("field.db")).context("failed to open field store")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Run { prompt, no_save } => cmd_run(&cli, prompt, *no_save),
        Commands::Stats => cmd_stats(),
        Commands::Export { path } => cmd_export(path),
        Commands::Import { path } => cmd_import(path),
    }
}

fn cmd_run(cli: &Cli, prompt: &str, no_save: bool) -> Result<()> {
    let config = EngineConfig::load(&base_dir());
    let pipeline = Pipeline::new().with_params(config.layout_params());
    let result = pipeline.run(prompt);

    println!("{}", result.answer);

    if cli.verbose {
        eprintln!("--- {} ---", result.trace);
        for bullet in &result.formatted.bullets {
            eprintln!("{bullet}");
        }
        if !result.safety.is_clean() {
            eprintln!(
                "--- safety: {} tokens, {} expansions flagged ---",
                result.safety.flagged_tokens.len(),
                result.safety.flagged_expansions.len()
            );
        }
    }

    if !no_save {
        // A failed save is a warning: the in-memory result stays valid.
        match open_store().and_then(|store| {
            store
                .save_package(&result.to_package())
                .context("failed to save package")
        }) {
            Ok(()) => tracing::debug!("package saved"),
            Err(e) => tracing::warn!("could not persist package: {e:#}"),
        }
    }

    Ok(())
}

fn cmd_stats() -> Result<()> {
    let store = open_store()?;
    let Some(package) = store.load_package().context("failed to load package")? else {
        println!("(no stored field)");
        return Ok(());
    };

    println!("version:     {}", package.version);
    println!("exported_at: {}", package.exported_at);
    println!("prompt:      {}", package.prompt);
    println!("tokens:      {}", package.space_field.tokens.len());
    println!("expansions:  {}", package.space_field.expansions.len());
    println!("triangles:   {}", package.space_field.triangles.len());
    println!("edges:       {}", package.space_field.edges.len());
    Ok(())
}

fn cmd_export(path: &std::path::Path) -> Result<()> {
    let store = open_store()?;
    let Some(package) = store.load_package().context("failed to load package")? else {
        bail!("nothing to export: no stored field");
    };

    let json = export_json(&package).context("failed to serialize package")?;
    std::fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;

    println!("exported to {}", path.display());
    Ok(())
}

fn cmd_import(path: &std::path::Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // Validation first: tokens must be present and sequence-typed.
    let field = import_json(&json)
        .with_context(|| format!("invalid package in {}", path.display()))?;

    // Full packages are stored as-is; bare fields get wrapped.
    let package = match import_package(&json) {
        Ok(package) => package,
        Err(_) => bundle(field, None, None, "(imported)", "", "imported from file"),
    };

    let store = open_store()?;
    store
        .save_package(&package)
        .context("failed to store imported package")?;

    println!(
        "imported from {}. tokens={}, expansions={}, triangles={}",
        path.display(),
        package.space_field.tokens.len(),
        package.space_field.expansions.len(),
        package.space_field.triangles.len()
    );
    Ok(())
}
