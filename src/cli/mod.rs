//! Command-line interface for rbs-chooser.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **choose**: Choose one or more RBSs for a coding sequence
//! - **catalog**: List, show, or export the options built from the tables
//!
//! ## Usage
//!
//! ```text
//! # Best RBS for a coding sequence
//! rbs-chooser choose --genes coli_genes.txt --rbs rbs_options.txt --cds ATGGTAAGA...
//!
//! # Top three distinct choices as JSON
//! rbs-chooser --format json choose --genes coli_genes.txt --rbs rbs_options.txt \
//!     --cds-file target.fa -n 3
//!
//! # Inspect the catalog
//! rbs-chooser catalog list --genes coli_genes.txt --rbs rbs_options.txt
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::store::RbsCatalog;

pub mod catalog;
pub mod choose;

#[derive(Parser)]
#[command(name = "rbs-chooser")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Choose ribosome binding sites for coding sequences")]
#[command(
    long_about = "rbs-chooser picks a ribosome binding site for a protein coding sequence from a catalog of RBSs taken from highly expressed genes.\n\nCandidates are ranked by:\n- Fewest predicted hairpins between the RBS and the coding sequence\n- Closest N-terminal peptide between the donor gene and the target"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose RBSs for a coding sequence
    Choose(choose::ChooseArgs),

    /// Inspect the RBS catalog
    Catalog(catalog::CatalogArgs),
}

/// The two tables a catalog is built from
#[derive(Args, Clone)]
pub struct TableArgs {
    /// Gene table (gene name in column 2, coding sequence in column 7); may be gzipped
    #[arg(long, required = true)]
    pub genes: PathBuf,

    /// RBS options table (gene name, RBS sequence); may be gzipped
    #[arg(long, required = true)]
    pub rbs: PathBuf,
}

impl TableArgs {
    /// Build the catalog from both tables
    ///
    /// # Errors
    ///
    /// Returns an error if either table cannot be read or is invalid.
    pub fn load(&self, verbose: bool) -> anyhow::Result<RbsCatalog> {
        let catalog = RbsCatalog::load_from_files(&self.genes, &self.rbs)?;
        if verbose {
            eprintln!("Loaded catalog with {} RBS options", catalog.len());
        }
        Ok(catalog)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
