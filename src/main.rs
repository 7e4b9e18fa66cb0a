use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pumpwatch::{
    render_page, Dashboard, DashboardConfig, DataSource, FallbackPolicy, FileSource, StatusPolicy,
};
use pumpwatch::ui::{Locale, ThemeName};

#[derive(Parser, Debug)]
#[command(name = "pumpwatch")]
#[command(about = "Render a pumping-test dashboard (status cards and water level chart) to HTML")]
struct Args {
    /// Spreadsheet with the sensor log (.xlsx, .xls, .ods or .csv)
    #[arg(short, long, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Output HTML file, or "-" for stdout
    #[arg(short, long, default_value = "dashboard.html")]
    output: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Skip the data file and render sample data
    #[arg(long)]
    sample: bool,

    /// How card status is judged
    #[arg(long, value_enum)]
    policy: Option<StatusPolicy>,

    /// What to show when the data file can't be used
    #[arg(long, value_enum)]
    fallback: Option<FallbackPolicy>,

    /// Page theme
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Page language
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// Seed for the sample time series
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the evaluated dashboard as JSON
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Apply command-line flags on top of the loaded configuration.
    fn apply(&self, config: &mut DashboardConfig) {
        if let Some(ref file) = self.file {
            config.data.path = file.clone();
        }
        if let Some(ref sheet) = self.sheet {
            config.data.sheet = Some(sheet.clone());
        }
        if self.sample {
            config.data.use_sample = true;
        }
        if let Some(policy) = self.policy {
            config.render.policy = policy;
        }
        if let Some(fallback) = self.fallback {
            config.data.fallback = fallback;
        }
        if let Some(theme) = self.theme {
            config.render.theme = theme;
        }
        if let Some(locale) = self.locale {
            config.render.locale = locale;
        }
        if let Some(seed) = self.seed {
            config.sample.seed = seed;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so `--output -` stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("pumpwatch={}", args.log_level))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = DashboardConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let dashboard = build_dashboard(&config);
    let html = render_page(&dashboard, &config);
    write_output(&args.output, &html)?;

    if let Some(ref export_path) = args.export {
        export_to_file(&dashboard, export_path)?;
    }

    Ok(())
}

/// Load the configured source once and assemble the dashboard.
fn build_dashboard(config: &DashboardConfig) -> Dashboard {
    let now = chrono::Local::now().naive_local();

    if config.data.use_sample {
        return Dashboard::build(None, config, now);
    }

    let mut source = FileSource::new(&config.data.path);
    if let Some(ref sheet) = config.data.sheet {
        source = source.with_sheet(sheet.clone());
    }
    Dashboard::build(Some(&mut source as &mut dyn DataSource), config, now)
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    std::fs::write(path, html)
        .with_context(|| format!("Failed to write dashboard to {}", path.display()))?;
    info!(path = %path.display(), "wrote dashboard");
    Ok(())
}

/// Export the evaluated dashboard to a JSON file.
fn export_to_file(dashboard: &Dashboard, export_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(dashboard)?;
    std::fs::write(export_path, json)
        .with_context(|| format!("Failed to write export to {}", export_path.display()))?;
    info!(path = %export_path.display(), "exported dashboard state");
    Ok(())
}
