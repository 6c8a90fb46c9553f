use crate::catalog::store::{CatalogError, TableKind};
use crate::utils::validation::{check_row_limit, is_valid_gene_name};

/// Column holding the gene name in the gene table
pub const GENE_NAME_COLUMN: usize = 1;
/// Column holding the coding sequence in the gene table
pub const GENE_CDS_COLUMN: usize = 6;

/// Column holding the gene name in the RBS options table
pub const RBS_GENE_COLUMN: usize = 0;
/// Column holding the RBS sequence in the RBS options table
pub const RBS_SEQUENCE_COLUMN: usize = 1;

/// A row of the gene table. Name and coding sequence are kept raw; they are
/// only validated once an RBS row references the gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRow {
    pub line: usize,
    pub name: String,
    pub cds: String,
}

/// A row of the RBS options table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbsRow {
    pub line: usize,
    pub gene: String,
    pub rbs: String,
}

/// Split table text into `(line_number, line)` records.
///
/// Accepts `\n`, `\r\n` and lone `\r` terminators. Blank lines and `#`
/// comments are skipped. Line numbers are 1-based.
pub fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = text;
    let mut line_num = 0;
    std::iter::from_fn(move || {
        while !rest.is_empty() {
            let (line, next) = match rest.find(['\r', '\n']) {
                Some(pos) => {
                    let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                    (&rest[..pos], &rest[pos + skip..])
                }
                None => (rest, ""),
            };
            rest = next;
            line_num += 1;

            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            return Some((line_num, line));
        }
        None
    })
}

fn split_fields<'a>(
    line: &'a str,
    line_num: usize,
    min_fields: usize,
    table: TableKind,
) -> Result<Vec<&'a str>, CatalogError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() < min_fields {
        return Err(CatalogError::MalformedRow {
            table,
            line: line_num,
            reason: format!(
                "expected at least {min_fields} tab-separated fields, found {}",
                fields.len()
            ),
        });
    }
    Ok(fields)
}

fn checked_name(name: &str, line_num: usize, table: TableKind) -> Result<String, CatalogError> {
    if is_valid_gene_name(name) {
        Ok(name.to_string())
    } else {
        Err(CatalogError::MalformedRow {
            table,
            line: line_num,
            reason: format!("invalid gene name '{name}'"),
        })
    }
}

/// Parse gene table text into rows, in file order.
///
/// # Errors
///
/// Returns `CatalogError::MalformedRow` if a row has fewer than 7 fields, or
/// `CatalogError::TooManyRows` if the limit is exceeded.
pub fn parse_gene_table(text: &str) -> Result<Vec<GeneRow>, CatalogError> {
    let table = TableKind::Genes;
    let mut rows = Vec::new();

    for (line_num, line) in records(text) {
        let fields = split_fields(line, line_num, GENE_CDS_COLUMN + 1, table)?;

        if check_row_limit(rows.len()).is_some() {
            return Err(CatalogError::TooManyRows {
                table,
                count: rows.len(),
            });
        }

        rows.push(GeneRow {
            line: line_num,
            name: fields[GENE_NAME_COLUMN].to_string(),
            cds: fields[GENE_CDS_COLUMN].to_string(),
        });
    }

    Ok(rows)
}

/// Parse RBS options table text into rows, in file order.
///
/// The RBS sequence is uppercased and must be a non-empty ACGT string.
///
/// # Errors
///
/// Returns `CatalogError::MalformedRow` if a row has fewer than 2 fields or
/// an invalid gene name, `CatalogError::InvalidSequence` for a bad RBS, or
/// `CatalogError::TooManyRows` if the limit is exceeded.
pub fn parse_rbs_table(text: &str) -> Result<Vec<RbsRow>, CatalogError> {
    let table = TableKind::RbsOptions;
    let mut rows = Vec::new();

    for (line_num, line) in records(text) {
        let fields = split_fields(line, line_num, RBS_SEQUENCE_COLUMN + 1, table)?;
        let gene = checked_name(fields[RBS_GENE_COLUMN], line_num, table)?;

        let rbs = crate::core::sequence::normalize(fields[RBS_SEQUENCE_COLUMN]).ok_or_else(|| {
            CatalogError::InvalidSequence {
                table,
                line: line_num,
                gene: gene.clone(),
            }
        })?;

        if check_row_limit(rows.len()).is_some() {
            return Err(CatalogError::TooManyRows {
                table,
                count: rows.len(),
            });
        }

        rows.push(RbsRow {
            line: line_num,
            gene,
            rbs,
        });
    }

    Ok(rows)
}
