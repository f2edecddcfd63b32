//! flextab - Entry Point

use clap::Parser;
use flextab::model::{CellValue, FilterSpec, SortSpec};
use flextab::source::{InputSource, StdinSource};
use flextab::view_state::TableViewState;
use std::path::PathBuf;
use tracing::info;

/// flextab - responsive TUI table for JSONL row data
#[derive(Parser, Debug)]
#[command(name = "flextab")]
#[command(version)]
#[command(about = "Responsive table viewer for JSONL rows with expandable detail")]
pub struct Args {
    /// Path to JSONL row file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Show N built-in sample rows instead of reading input
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Sort by this column key
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Keep only rows where KEY equals VALUE exactly
    #[arg(short = 'F', long, value_name = "KEY=VALUE")]
    pub filter: Option<String>,

    /// Side panel width in cells (folded into every column breakpoint)
    #[arg(long)]
    pub offset: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse a `key=value` filter argument.
///
/// The value side is coerced to the narrowest matching cell type so exact
/// matching works against typed cells: `hours=3` matches an integer cell,
/// `done=true` a boolean one.
fn parse_filter(spec: &str) -> Result<FilterSpec, String> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| format!("invalid filter {spec:?}: expected KEY=VALUE"))?;
    if key.is_empty() {
        return Err(format!("invalid filter {spec:?}: empty key"));
    }

    let value = if let Ok(i) = value.parse::<i64>() {
        CellValue::Int(i)
    } else if let Ok(f) = value.parse::<f64>() {
        CellValue::Float(f)
    } else if let Ok(b) = value.parse::<bool>() {
        CellValue::Bool(b)
    } else {
        CellValue::from(value)
    };

    Ok(FilterSpec::new(key, value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Propagate --no-color through the environment so every style lookup
    // agrees.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Precedence chain: Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = flextab::config::load_config_with_precedence(args.config.clone())?;
        let merged = flextab::config::merge_config(config_file);
        let with_env = flextab::config::apply_env_overrides(merged);
        flextab::config::apply_cli_overrides(with_env, args.offset, args.sample)
    };

    flextab::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let sort = args.sort.as_deref().map(|key| {
        if args.desc {
            SortSpec::descending(key)
        } else {
            SortSpec::ascending(key)
        }
    });
    let filter = args.filter.as_deref().map(parse_filter).transpose()?;

    let columns = flextab::demo::demo_columns(&config.date_format);
    let mut table = TableViewState::new(columns, config.side_panel_width);
    table.set_sort(sort);
    table.set_filter(filter);

    // --sample replaces the input source with generated rows.
    let input_source = if args.sample.is_some() {
        table.set_rows(flextab::demo::sample_rows(config.sample_rows));
        InputSource::Stdin(StdinSource::from_reader(std::io::empty()))
    } else {
        flextab::source::detect_input_source(args.file.clone())?
    };

    let styles = flextab::view::TableStyles::with_color_config(
        flextab::view::ColorConfig::from_env_and_args(args.no_color),
    );

    let mut app = flextab::view::TuiApp::new(input_source, table, styles)?;
    app.run()?;

    Ok(())
}
