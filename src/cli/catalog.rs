use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{OutputFormat, TableArgs};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all RBS options in catalog order
    List {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Show details of a specific option
    Show {
        /// Gene name of the option
        #[arg(required = true)]
        name: String,

        #[command(flatten)]
        tables: TableArgs,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        #[command(flatten)]
        tables: TableArgs,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be built, the option is not
/// found, or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { tables } => run_list(&tables, format, verbose),
        CatalogCommands::Show { name, tables } => run_show(&name, &tables, format, verbose),
        CatalogCommands::Export { output, tables } => run_export(output, &tables, verbose),
    }
}

fn run_list(tables: &TableArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = tables.load(verbose)?;

    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .iter()
                .map(|o| o.name().len())
                .max()
                .unwrap_or(4)
                .max(4);
            let rbs_width = catalog
                .iter()
                .map(|o| o.rbs().len())
                .max()
                .unwrap_or(3)
                .max(3);

            println!("RBS Catalog ({} options)\n", catalog.len());
            println!(
                "{:<name_w$} {:<rbs_w$} Signature",
                "Name",
                "RBS",
                name_w = name_width,
                rbs_w = rbs_width
            );
            println!("{}", "-".repeat(name_width + rbs_width + 12));

            for option in &catalog {
                println!(
                    "{:<name_w$} {:<rbs_w$} {}",
                    option.name(),
                    option.rbs(),
                    option.first6aas(),
                    name_w = name_width,
                    rbs_w = rbs_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "name": o.name(),
                        "description": o.description(),
                        "rbs": o.rbs(),
                        "first6aas": o.first6aas(),
                        "cds_length": o.cds().len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\trbs\tfirst6aas\tcds_length");
            for o in &catalog {
                println!("{}\t{}\t{}\t{}", o.name(), o.rbs(), o.first6aas(), o.cds().len());
            }
        }
    }

    Ok(())
}

fn run_show(
    name: &str,
    tables: &TableArgs,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = tables.load(verbose)?;
    let option = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("RBS option '{name}' not found in catalog"))?;

    match format {
        OutputFormat::Text => println!("{option}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(option)?),
        OutputFormat::Tsv => {
            println!("name\tdescription\trbs\tcds\tfirst6aas");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                option.name(),
                option.description(),
                option.rbs(),
                option.cds(),
                option.first6aas()
            );
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_export(output: PathBuf, tables: &TableArgs, verbose: bool) -> anyhow::Result<()> {
    let catalog = tables.load(verbose)?;
    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;
    eprintln!(
        "Exported {} RBS options to {}",
        catalog.len(),
        output.display()
    );
    Ok(())
}
