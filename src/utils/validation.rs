//! Centralized validation helpers for catalog tables.

/// Maximum number of data rows accepted from a single table
pub const MAX_TABLE_ROWS: usize = 1_000_000;

/// Check if adding another row would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new row.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_row_limit(rows.len()).is_some() {
///     return Err(...);
/// }
/// rows.push(new_row); // Safe to add
/// ```
#[must_use]
pub fn check_row_limit(count: usize) -> Option<String> {
    if count >= MAX_TABLE_ROWS {
        Some(format!(
            "Too many rows: adding another would exceed maximum of {MAX_TABLE_ROWS}"
        ))
    } else {
        None
    }
}

/// Validate a gene name taken from a table field.
///
/// # Examples
///
/// ```
/// use rbs_chooser::utils::validation::is_valid_gene_name;
///
/// assert!(is_valid_gene_name("yncE"));
/// assert!(is_valid_gene_name("b0001"));
/// assert!(!is_valid_gene_name(""));
/// assert!(!is_valid_gene_name("two words"));
/// ```
#[must_use]
pub fn is_valid_gene_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c.is_control())
}
