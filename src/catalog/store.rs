use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::catalog::builder;
use crate::core::sequence::is_nucleotide_seq;
use crate::core::RbsOption;
use crate::utils::validation::is_valid_gene_name;

/// Which input table a row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Genes,
    RbsOptions,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Genes => write!(f, "gene table"),
            Self::RbsOptions => write!(f, "RBS options table"),
        }
    }
}

/// Errors raised while building a catalog. Any of them aborts construction.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row in {table} at line {line}: {reason}")]
    MalformedRow {
        table: TableKind,
        line: usize,
        reason: String,
    },

    #[error("Invalid nucleotide sequence in {table} at line {line} for gene '{gene}'")]
    InvalidSequence {
        table: TableKind,
        line: usize,
        gene: String,
    },

    #[error("Unknown gene '{gene}' referenced by {table} at line {line}")]
    UnknownGene {
        table: TableKind,
        line: usize,
        gene: String,
    },

    #[error("Duplicate RBS option '{0}'")]
    DuplicateOption(String),

    #[error("Too many rows in {table}: {count}")]
    TooManyRows { table: TableKind, count: usize },

    #[error("Catalog contains no RBS options")]
    Empty,

    #[error("Failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog export format
#[derive(Debug, Serialize)]
pub struct CatalogData<'a> {
    pub version: String,
    pub created_at: String,
    pub options: &'a [RbsOption],
}

/// An immutable, ordered catalog of RBS options.
///
/// Order is the RBS table's file order and decides residual ties during
/// selection, so it is never rearranged.
#[derive(Debug, Clone)]
pub struct RbsCatalog {
    options: Vec<RbsOption>,

    /// Index: option name -> index in options vec
    name_to_index: HashMap<String, usize>,
}

impl RbsCatalog {
    /// Build a catalog from ready-made options, keeping their order.
    ///
    /// Options are checked as if they were rows of the RBS options table:
    /// line numbers in errors are 1-based positions in `options`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MalformedRow` for an invalid name,
    /// `CatalogError::InvalidSequence` if the RBS or coding sequence is not a
    /// non-empty uppercase ACGT string, or `CatalogError::DuplicateOption` if
    /// two options share a name.
    pub fn from_options(options: Vec<RbsOption>) -> Result<Self, CatalogError> {
        let mut name_to_index = HashMap::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            validate_option(option, index + 1)?;
            if name_to_index
                .insert(option.name().to_string(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateOption(option.name().to_string()));
            }
        }
        Ok(Self {
            options,
            name_to_index,
        })
    }

    /// Build a catalog from the text of a gene table and an RBS options table.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if either table is malformed or references
    /// an unknown gene.
    pub fn from_tables(gene_text: &str, rbs_text: &str) -> Result<Self, CatalogError> {
        builder::build(gene_text, rbs_text)
    }

    /// Load both tables from disk and build the catalog.
    ///
    /// Files ending in `.gz` are decompressed transparently.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if a file cannot be read, or any error from
    /// [`RbsCatalog::from_tables`].
    pub fn load_from_files(gene_path: &Path, rbs_path: &Path) -> Result<Self, CatalogError> {
        let gene_text = read_table(gene_path)?;
        let rbs_text = read_table(rbs_path)?;
        Self::from_tables(&gene_text, &rbs_text)
    }

    /// All options in catalog order
    pub fn options(&self) -> &[RbsOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RbsOption> {
        self.options.iter()
    }

    /// Get an option by gene name
    pub fn get(&self, name: &str) -> Option<&RbsOption> {
        self.name_to_index.get(name).map(|&idx| &self.options[idx])
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            options: &self.options,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of options in catalog
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a RbsCatalog {
    type Item = &'a RbsOption;
    type IntoIter = std::slice::Iter<'a, RbsOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

fn validate_option(option: &RbsOption, line: usize) -> Result<(), CatalogError> {
    let table = TableKind::RbsOptions;
    if !is_valid_gene_name(option.name()) {
        return Err(CatalogError::MalformedRow {
            table,
            line,
            reason: format!("invalid gene name '{}'", option.name()),
        });
    }
    if !is_nucleotide_seq(option.rbs()) || !is_nucleotide_seq(option.cds()) {
        return Err(CatalogError::InvalidSequence {
            table,
            line,
            gene: option.name().to_string(),
        });
    }
    Ok(())
}

fn read_table(path: &Path) -> Result<String, std::io::Error> {
    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if is_gzip {
        let file = std::fs::File::open(path)?;
        let mut text = String::new();
        flate2::read::MultiGzDecoder::new(file).read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GENES: &str = "b0001\tgeneA\t.\t.\t.\t.\tATGGTAAGAAAACAGTTGCAGAGAGTTGCAAAA\n\
                         b0002\tgeneB\t.\t.\t.\t.\tATGGCTAGCAAAGGAGAAGAACTTTTCACTGGA\n";
    const RBS: &str = "geneB\tAAGGAGGTATAC\ngeneA\tTTAGGAGGAAAC\n";

    #[test]
    fn test_from_tables_preserves_order() {
        let catalog = RbsCatalog::from_tables(GENES, RBS).unwrap();
        let names: Vec<&str> = catalog.iter().map(RbsOption::name).collect();
        assert_eq!(names, vec!["geneB", "geneA"]);
    }

    #[test]
    fn test_get_by_name() {
        let catalog = RbsCatalog::from_tables(GENES, RBS).unwrap();
        let option = catalog.get("geneA").unwrap();
        assert_eq!(option.rbs(), "TTAGGAGGAAAC");
        assert!(catalog.get("geneZ").is_none());
    }

    #[test]
    fn test_from_options_rejects_duplicates() {
        let options = vec![
            RbsOption::new("geneA", "AGGAGG", "ATGAAA"),
            RbsOption::new("geneA", "AGGAGA", "ATGAAA"),
        ];
        let err = RbsCatalog::from_options(options).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOption(name) if name == "geneA"));
    }

    #[test]
    fn test_from_options_rejects_invalid_entries() {
        let err = RbsCatalog::from_options(vec![RbsOption::new("", "AGGAGG", "ATGAAA")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { line: 1, .. }));

        let err = RbsCatalog::from_options(vec![
            RbsOption::new("geneA", "AGGAGG", "ATGAAA"),
            RbsOption::new("geneB", "", "ATGAAA"),
        ])
        .unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidSequence { ref gene, line: 2, .. } if gene == "geneB")
        );

        let err = RbsCatalog::from_options(vec![RbsOption::new("geneA", "AGGAGG", "NNNNNNNNN")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSequence { line: 1, .. }));

        let err = RbsCatalog::from_options(vec![RbsOption::new("geneA", "aggagg", "ATGAAA")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSequence { .. }));
    }

    #[test]
    fn test_to_json() {
        let catalog = RbsCatalog::from_tables(GENES, RBS).unwrap();
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"options\""));
        assert!(json.contains("RBS from geneB gene"));
    }

    #[test]
    fn test_load_from_files_plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let gene_path = dir.path().join("genes.txt.gz");
        let rbs_path = dir.path().join("rbs_options.txt");

        let mut encoder = flate2::write::GzEncoder::new(
            std::fs::File::create(&gene_path).unwrap(),
            flate2::Compression::default(),
        );
        encoder.write_all(GENES.as_bytes()).unwrap();
        encoder.finish().unwrap();
        std::fs::write(&rbs_path, RBS).unwrap();

        let catalog = RbsCatalog::load_from_files(&gene_path, &rbs_path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RbsCatalog::load_from_files(
            Path::new("/nonexistent/genes.txt"),
            Path::new("/nonexistent/rbs.txt"),
        );
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
