#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use profitmap::{App, DataDirectory, NativeStorage, init_logging};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "profitmap")]
#[command(about = "Profit surface over ROAS and marketing spend, in the terminal")]
struct Args {
    /// Path to the data directory (default: ~/.profitmap/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Parameters as a query string, used instead of the saved ones
    #[arg(short, long)]
    query: Option<String>,

    /// Write the surface as JSON to this file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let storage = NativeStorage::new(data_dir).with_query_override(args.query);
    let mut app = App::new(Box::new(storage));

    if let Some(path) = args.export {
        app.export(&path)?;
        println!("Exported surface to {}", path.display());
        return Ok(());
    }

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
