//! RBS catalog construction and storage.
//!
//! A catalog is built once from two tab-separated tables:
//!
//! - **Gene table**: column 1 is a gene name, column 6 its coding sequence
//! - **RBS options table**: column 0 is a gene name, column 1 the RBS taken
//!   from that gene
//!
//! Every RBS row becomes one [`RbsOption`](crate::core::RbsOption), in file
//! order. The resulting [`RbsCatalog`](store::RbsCatalog) is immutable and
//! can be shared freely between selections.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rbs_chooser::RbsCatalog;
//! use std::path::Path;
//!
//! let catalog = RbsCatalog::load_from_files(
//!     Path::new("coli_genes.txt"),
//!     Path::new("rbs_options.txt"),
//! )
//! .unwrap();
//!
//! for option in &catalog {
//!     println!("{}\t{}", option.name(), option.rbs());
//! }
//! ```

pub mod builder;
pub mod store;
