use serde::Serialize;

use crate::core::sequence;

/// One catalog entry: a ribosome binding site taken from a highly expressed
/// gene, plus the amino-acid signature of that gene's coding sequence.
///
/// Options are immutable once built. Equality and hashing cover every field,
/// which is what exclusion sets rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RbsOption {
    /// Source gene name, unique within a catalog
    name: String,

    /// Human-readable provenance
    description: String,

    /// Ribosome binding site (5' UTR) nucleotides
    rbs: String,

    /// Full coding sequence of the source gene
    cds: String,

    /// Translation of the leading coding nucleotides, used as a tie-break signature
    first6aas: String,
}

impl RbsOption {
    /// Build an option for `name`, deriving the description and signature.
    ///
    /// `rbs` and `cds` are expected to be normalized nucleotide strings.
    pub fn new(name: impl Into<String>, rbs: impl Into<String>, cds: impl Into<String>) -> Self {
        let name = name.into();
        let cds = cds.into();
        let first6aas = sequence::signature(&cds);
        Self {
            description: format!("RBS from {name} gene"),
            name,
            rbs: rbs.into(),
            cds,
            first6aas,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rbs(&self) -> &str {
        &self.rbs
    }

    pub fn cds(&self) -> &str {
        &self.cds
    }

    /// Amino-acid signature derived from the first coding nucleotides
    pub fn first6aas(&self) -> &str {
        &self.first6aas
    }
}

impl std::fmt::Display for RbsOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "description: {}", self.description)?;
        writeln!(f, "rbs: {}", self.rbs)?;
        writeln!(f, "cds: {}", self.cds)?;
        write!(f, "first6aas: {}", self.first6aas)
    }
}
