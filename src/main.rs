use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use ifc2lca::export::{export_csv, export_json};
use ifc2lca::extract::extract_records;
use ifc2lca::parser::parse_ifc_file;

#[derive(Parser, Debug)]
#[command(name = "ifc2lca")]
#[command(about = "Extract DIN 276 cost groups, quantities and materials from IFC files")]
#[command(version)]
struct Args {
    /// Path to IFC file
    #[arg(required = true)]
    file: PathBuf,

    /// Path of the CSV output
    #[arg(required = true)]
    output: PathBuf,

    /// Also export the records as JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Append the DIN 276 group description as a last column
    #[arg(long)]
    labels: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let model = parse_ifc_file(&args.file)?;
    tracing::info!(
        schema = %model.schema,
        elements = model.elements.len(),
        "model loaded"
    );

    let records = extract_records(&model);
    let classified = records.iter().filter(|r| r.cost_group.is_some()).count();
    tracing::info!(
        records = records.len(),
        classified,
        "classification finished"
    );

    export_csv(&records, &args.output, args.labels)?;
    println!("Exported to CSV: {}", args.output.display());

    if let Some(json_path) = &args.json {
        export_json(&records, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}
