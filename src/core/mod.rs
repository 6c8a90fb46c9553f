//! Core data types for RBS selection.
//!
//! - [`RbsOption`]: a catalog entry pairing a ribosome binding site with the
//!   coding sequence it came from
//! - [`sequence`]: nucleotide normalization, translation and reverse complement
//!
//! ## Signatures
//!
//! Each option carries the translation of the first
//! [`sequence::SIGNATURE_NUCLEOTIDES`] nucleotides of its source gene. The
//! chooser compares that signature against the same prefix of the target
//! coding sequence when hairpin scores tie.

pub mod rbs_option;
pub mod sequence;

pub use rbs_option::RbsOption;
