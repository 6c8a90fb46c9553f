//! # rbs-chooser
//!
//! Picks a ribosome binding site (RBS) for a protein coding sequence from a
//! catalog of RBSs taken from highly expressed E. coli genes.
//!
//! Each candidate RBS is placed in front of the target coding sequence and
//! scored for hairpins that could hide the ribosome landing pad. The
//! candidates with the fewest hairpins are then compared by how closely
//! their donor gene's N-terminal peptide matches the target's. Excluding
//! earlier picks yields a ranked series of distinct choices.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use std::path::Path;
//! use rbs_chooser::{RbsCatalog, RbsChooser};
//!
//! // Build the catalog once
//! let catalog = RbsCatalog::load_from_files(
//!     Path::new("coli_genes.txt"),
//!     Path::new("rbs_options.txt"),
//! )
//! .unwrap();
//!
//! let chooser = RbsChooser::new(&catalog);
//! let chosen = chooser
//!     .select("ATGGTAAGAAAACAGTTGCAGAGAGTTGAATTATCACCA", &HashSet::new())
//!     .unwrap();
//! println!("{}", chosen);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog construction from gene and RBS tables
//! - [`core`]: The `RbsOption` record and sequence helpers
//! - [`matching`]: Selection engine and hairpin scoring
//! - [`parsing`]: Typed row parsers for the input tables
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, RbsCatalog};
pub use core::RbsOption;
pub use matching::engine::{RbsChooser, Selection, SelectionError};
pub use matching::scoring::{HairpinConfig, HairpinCounter, HairpinScorer};
