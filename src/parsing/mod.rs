//! Parsers for the tab-separated catalog tables.
//!
//! | Table | Column | Content |
//! |-------|--------|---------|
//! | Genes | 1 | Gene name |
//! | Genes | 6 | Coding sequence |
//! | RBS options | 0 | Gene name |
//! | RBS options | 1 | RBS sequence |
//!
//! Other columns are ignored. Rows are typed as they are read, so a short
//! row fails with a descriptive [`CatalogError`](crate::CatalogError)
//! instead of an index fault.

pub mod tsv;
