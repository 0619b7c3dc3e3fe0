//! tablero: headless host for the CDMX incident dashboard.
//!
//! Usage:
//!   tablero --borough coyoacan --crime-type homicidio --from 2025-01-01 --out datos.csv
//!   tablero --today 2025-04-21 --json
//!   tablero --ipc-mode < requests.jsonl

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tablero_core::{
    clock::{Clock, FixedClock, SystemClock},
    config::DashboardConfig,
    Borough, CrimeType, Dashboard, DashboardView, FilterCriteria,
};

#[derive(Parser)]
#[command(name = "tablero", about = "Simulated crime-incident dashboard for CDMX")]
struct Cli {
    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    config: Option<String>,

    /// Override the generator seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of simulated incidents
    #[arg(long)]
    count: Option<usize>,

    /// Pin "today" (YYYY-MM-DD) for reproducible output
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Borough to include (label or slug); repeat for several. Default: all
    #[arg(long = "borough")]
    boroughs: Vec<Borough>,

    /// Crime type to include (label or slug); repeat for several. Default: all
    #[arg(long = "crime-type")]
    crime_types: Vec<CrimeType>,

    /// Select no boroughs at all
    #[arg(long, conflicts_with = "boroughs")]
    none_boroughs: bool,

    /// Select no crime types at all
    #[arg(long, conflicts_with = "crime_types")]
    none_crime_types: bool,

    /// First day of the range, inclusive
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the range, inclusive
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Write the filtered CSV here (a directory gets the configured file name)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the full view as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Read one JSON request per stdin line, answer one JSON line each
    #[arg(long)]
    ipc_mode: bool,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    Defaults,
    Filter(FilterCriteria),
    Quit,
}

#[derive(serde::Serialize)]
struct ViewSummary<'a> {
    filtered_count: usize,
    base_count:     usize,
    criteria:       &'a FilterCriteria,
    bars:           &'a [tablero_core::projection::BarGroup],
    export_size:    usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(count) = cli.count {
        config.record_count = count;
    }

    let clock: Box<dyn Clock> = match cli.today {
        Some(day) => Box::new(FixedClock(day)),
        None => Box::new(SystemClock),
    };
    let mut dashboard = Dashboard::new(config, clock)?;

    if cli.ipc_mode {
        return run_ipc_loop(&mut dashboard);
    }

    let criteria = criteria_from_cli(&cli, dashboard.default_criteria());
    let view = dashboard.render(criteria)?;

    if let Some(out) = &cli.out {
        let path = if out.is_dir() { out.join(&view.export.file_name) } else { out.clone() };
        std::fs::write(&path, &view.export.bytes[..])
            .with_context(|| format!("Cannot write {}", path.display()))?;
        log::info!("wrote {} bytes to {}", view.export.bytes.len(), path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_summary(&dashboard, &view);
    }
    Ok(())
}

fn criteria_from_cli(cli: &Cli, defaults: FilterCriteria) -> FilterCriteria {
    let selected_boroughs = if cli.none_boroughs {
        BTreeSet::new()
    } else if cli.boroughs.is_empty() {
        defaults.selected_boroughs
    } else {
        cli.boroughs.iter().copied().collect()
    };
    let selected_crime_types = if cli.none_crime_types {
        BTreeSet::new()
    } else if cli.crime_types.is_empty() {
        defaults.selected_crime_types
    } else {
        cli.crime_types.iter().copied().collect()
    };
    FilterCriteria {
        selected_boroughs,
        selected_crime_types,
        date_start: cli.from.unwrap_or(defaults.date_start),
        date_end:   cli.to.unwrap_or(defaults.date_end),
    }
}

fn run_ipc_loop(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("rejected request: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        let criteria = match request {
            IpcRequest::Quit => break,
            IpcRequest::Defaults => dashboard.default_criteria(),
            IpcRequest::Filter(criteria) => criteria,
        };
        let view = dashboard.render(criteria)?;
        let summary = ViewSummary {
            filtered_count: view.filtered_count(),
            base_count:     view.base_count,
            criteria:       &view.criteria,
            bars:           &view.bars.groups,
            export_size:    view.export_size,
        };
        writeln!(stdout, "{}", serde_json::to_string(&summary)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(dashboard: &Dashboard, view: &DashboardView) {
    let c = &view.criteria;
    println!("=== {} ===", view.title);
    println!("  today:      {}", dashboard.today());
    println!("  seed:       {}", dashboard.config.seed);
    println!("  range:      {} .. {}", c.date_start, c.date_end);
    println!("  boroughs:   {}", join_labels(c.selected_boroughs.iter().map(Borough::label)));
    println!("  crimes:     {}", join_labels(c.selected_crime_types.iter().map(CrimeType::label)));
    println!("  incidents:  {} of {}", view.filtered_count(), view.base_count);
    println!();

    println!("=== DELITOS POR ALCALDÍA ===");
    if view.bars.groups.is_empty() {
        println!("  (sin datos para los filtros seleccionados)");
    }
    for g in &view.bars.groups {
        println!("  {:<16} {:<18} {:>4}", g.borough.label(), g.crime_type.label(), g.count);
    }
    println!();
    println!(
        "  export: {} ({}, {} bytes)",
        view.export.file_name, view.export.mime, view.export_size
    );
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = labels.collect();
    if joined.is_empty() {
        "(ninguna)".into()
    } else {
        joined.join(", ")
    }
}
