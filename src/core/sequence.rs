//! Nucleotide helpers: normalization, translation and reverse complement.

/// Number of leading coding nucleotides translated into a signature.
///
/// The catalog field is called "first 6 amino acids" but the signature is
/// built from 30 nucleotides (10 codons). Catalog data was curated against
/// that behavior, so the constant stays at 30.
pub const SIGNATURE_NUCLEOTIDES: usize = 30;

/// Standard genetic code (NCBI table 1), indexed by `16 * b1 + 4 * b2 + b3`
/// with A=0, C=1, G=2, T=3.
const STANDARD_CODE: &[u8; 64] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Returns true if `seq` is non-empty and contains only `A`, `C`, `G`, `T`.
#[must_use]
pub fn is_nucleotide_seq(seq: &str) -> bool {
    !seq.is_empty() && seq.bytes().all(|b| base_index(b).is_some())
}

/// Trim and uppercase a nucleotide string.
///
/// Returns `None` if the result is empty or contains anything outside ACGT.
#[must_use]
pub fn normalize(seq: &str) -> Option<String> {
    let upper = seq.trim().to_ascii_uppercase();
    if is_nucleotide_seq(&upper) {
        Some(upper)
    } else {
        None
    }
}

/// Translate a nucleotide string codon by codon.
///
/// Stops are reported as `*` and codons with unknown bases as `X`. A
/// trailing partial codon is ignored.
#[must_use]
pub fn translate(nucleotides: &str) -> String {
    translate_bytes(nucleotides.as_bytes())
}

fn translate_bytes(nucleotides: &[u8]) -> String {
    nucleotides
        .chunks_exact(3)
        .map(|codon| {
            let idx = codon
                .iter()
                .map(|&b| base_index(b.to_ascii_uppercase()))
                .try_fold(0usize, |acc, b| b.map(|b| acc * 4 + b));
            idx.map_or('X', |i| char::from(STANDARD_CODE[i]))
        })
        .collect()
}

/// Amino-acid signature of a coding sequence: the translation of its first
/// [`SIGNATURE_NUCLEOTIDES`] nucleotides, or of every whole codon when the
/// sequence is shorter.
///
/// The prefix is taken in bytes, so non-ASCII input translates to `X`
/// codons instead of splitting a character.
#[must_use]
pub fn signature(cds: &str) -> String {
    let bytes = cds.as_bytes();
    translate_bytes(&bytes[..bytes.len().min(SIGNATURE_NUCLEOTIDES)])
}

/// Reverse complement of DNA bytes.
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    bio::alphabets::dna::revcomp(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_signature_prefix() {
        assert_eq!(translate("ATGGTAAGAAAACAGTTGCAGAGAGTTGAA"), "MVRKQLQRVE");
    }

    #[test]
    fn test_signature_non_ascii_prefix() {
        // 'é' is two bytes and straddles the 30 nt boundary
        let cds = "ATGGTAAGAAAACAGTTGCAGAGAGTTGAé";
        assert_eq!(signature(cds), "MVRKQLQRVX");
    }

    #[test]
    fn test_translate_stops_and_unknowns() {
        assert_eq!(translate("ATGTAATGA"), "M**");
        assert_eq!(translate("ATGNNNTTT"), "MXF");
    }

    #[test]
    fn test_translate_ignores_partial_codon() {
        assert_eq!(translate("ATGGC"), "M");
        assert_eq!(translate("AT"), "");
    }

    #[test]
    fn test_signature_uses_thirty_nucleotides() {
        let cds = "ATGGTAAGAAAACAGTTGCAGAGAGTTGAATTATCACCATCG";
        let sig = signature(cds);
        assert_eq!(sig, "MVRKQLQRVE");
        assert_eq!(sig.len(), SIGNATURE_NUCLEOTIDES / 3);
    }

    #[test]
    fn test_signature_short_sequence() {
        assert_eq!(signature("ATGAAAG"), "MK");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  atgC\n"), Some("ATGC".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("ATGN"), None);
        assert_eq!(normalize("AUG"), None);
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ACGTAC"), b"GTACGT");
        assert_eq!(reverse_complement(b"AAAC"), b"GTTT");
        assert!(reverse_complement(b"").is_empty());
    }
}
