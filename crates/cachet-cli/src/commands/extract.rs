//! Extract command - scan a results file and report the records.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{debug, info};

use cachet_core::{Record, RecordExtractor};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input results file (default: taken from configuration)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: taken from configuration)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Table,
}

impl OutputFormat {
    fn from_config(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let input = args.input.unwrap_or(config.input.path);
    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_config(&config.report.format).ok_or_else(|| {
            anyhow::anyhow!("unknown report format in config: {}", config.report.format)
        })?,
    };

    info!("Extracting records from {}", input.display());
    let records = RecordExtractor::new().extract_path(&input)?;
    debug!("{} records extracted", records.len());

    let rendered = match format {
        OutputFormat::Json => render_json(&records)?,
        OutputFormat::Csv => render_csv(&records)?,
        OutputFormat::Table => render_table(&records),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            eprintln!(
                "{} Wrote {} records to {}",
                style("✓").green(),
                records.len(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn render_json(records: &[Record]) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

fn render_csv(records: &[Record]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn render_table(records: &[Record]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>10}  {:>8}  {:>12}\n",
        style("size").bold(),
        style("stride").bold(),
        style("time").bold()
    ));

    for record in records {
        out.push_str(&format!(
            "{:>10}  {:>8}  {:>12}\n",
            record.size, record.stride, record.time
        ));
    }

    out.push_str(&format!("{} record(s)\n", records.len()));
    out
}
