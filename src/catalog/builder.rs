//! Builds an [`RbsCatalog`] from a gene table and an RBS options table.
//!
//! The gene table maps gene names to coding sequences (column 1 and
//! column 6). Each row of the RBS options table names a gene and gives the
//! RBS taken from it. Options keep the RBS table's row order.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::catalog::store::{CatalogError, RbsCatalog, TableKind};
use crate::core::{sequence, RbsOption};
use crate::parsing::tsv::{parse_gene_table, parse_rbs_table, GeneRow};

/// Build a catalog from raw table text.
///
/// Construction is all-or-nothing: the first bad row aborts it.
///
/// # Errors
///
/// Returns `CatalogError::UnknownGene` if an RBS row names a gene missing
/// from the gene table, `CatalogError::InvalidSequence` if the referenced
/// coding sequence is not ACGT, `CatalogError::DuplicateOption` if the RBS
/// table names a gene twice, `CatalogError::Empty` if no options remain,
/// or any row-level parse error.
pub fn build(gene_text: &str, rbs_text: &str) -> Result<RbsCatalog, CatalogError> {
    let genes = index_genes(parse_gene_table(gene_text)?);
    let rbs_rows = parse_rbs_table(rbs_text)?;

    let mut options = Vec::with_capacity(rbs_rows.len());
    for row in rbs_rows {
        let gene = genes
            .get(row.gene.as_str())
            .ok_or_else(|| CatalogError::UnknownGene {
                table: TableKind::RbsOptions,
                line: row.line,
                gene: row.gene.clone(),
            })?;

        let cds = sequence::normalize(&gene.cds).ok_or_else(|| CatalogError::InvalidSequence {
            table: TableKind::Genes,
            line: gene.line,
            gene: row.gene.clone(),
        })?;

        if cds.len() < sequence::SIGNATURE_NUCLEOTIDES {
            debug!(
                "Coding sequence for {} is only {} nt; signature uses whole codons only",
                row.gene,
                cds.len()
            );
        }

        options.push(RbsOption::new(row.gene, row.rbs, cds));
    }

    if options.is_empty() {
        return Err(CatalogError::Empty);
    }

    let catalog = RbsCatalog::from_options(options)?;
    info!("Built RBS catalog with {} options", catalog.len());
    Ok(catalog)
}

/// Index gene rows by name. A later row replaces an earlier one.
fn index_genes(rows: Vec<GeneRow>) -> HashMap<String, GeneRow> {
    let mut genes = HashMap::with_capacity(rows.len());
    for row in rows {
        if let Some(previous) = genes.insert(row.name.clone(), row) {
            warn!(
                "Gene '{}' appears more than once in the gene table; line {} is replaced",
                previous.name, previous.line
            );
        }
    }
    genes
}
