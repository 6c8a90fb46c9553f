//! RBS selection engine and scoring primitives.
//!
//! - [`RbsChooser`](engine::RbsChooser): picks one catalog option for a coding sequence
//! - [`HairpinScorer`](scoring::HairpinScorer): pluggable hairpin interference score
//! - [`HairpinCounter`](scoring::HairpinCounter): default stem/loop hairpin counter
//!
//! ## Selection Algorithm
//!
//! 1. **Hairpin minimization**: every non-excluded option's RBS is prepended to
//!    the target coding sequence and scored; all options sharing the lowest
//!    score are kept in catalog order
//! 2. **Signature tie-break**: among those, the option whose signature has the
//!    smallest edit distance to the target's signature wins; the earliest
//!    option wins any remaining tie
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use std::path::Path;
//! use rbs_chooser::{RbsCatalog, RbsChooser};
//!
//! let catalog = RbsCatalog::load_from_files(
//!     Path::new("coli_genes.txt"),
//!     Path::new("rbs_options.txt"),
//! )
//! .unwrap();
//! let chooser = RbsChooser::new(&catalog);
//!
//! let cds = "ATGGTAAGAAAACAGTTGCAGAGAGTTGAATTATCACCATCGTTATATGACACAGCTTGGG";
//! let mut excluded = HashSet::new();
//!
//! let first = chooser.select(cds, &excluded).unwrap();
//! excluded.insert(first.clone());
//! let second = chooser.select(cds, &excluded).unwrap();
//! assert_ne!(first.name(), second.name());
//! ```

pub mod engine;
pub mod scoring;
