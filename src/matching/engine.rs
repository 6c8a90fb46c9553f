use std::cmp::Ordering;
use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::catalog::store::RbsCatalog;
use crate::core::{sequence, RbsOption};
use crate::matching::scoring::{edit_distance, HairpinCounter, HairpinScorer};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid coding sequence: {0}")]
    InvalidInput(String),

    #[error(
        "No viable RBS options: all {catalog_size} catalog entries are excluded. \
         Add options to the catalog or remove some exclusions."
    )]
    NoViableOption { catalog_size: usize },
}

/// Outcome of a single selection
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// The chosen catalog entry
    pub option: &'a RbsOption,

    /// Hairpin score of the option's RBS followed by the target CDS
    pub hairpin_score: f64,

    /// Edit distance between the option's signature and the target's
    pub signature_distance: u32,

    /// How many options shared the minimum hairpin score
    pub tied: usize,
}

/// Chooses RBS options from a catalog for target coding sequences.
///
/// The chooser is stateless: every call is a function of the catalog, the
/// target sequence and the caller's exclusion set.
pub struct RbsChooser<'a, S = HairpinCounter> {
    catalog: &'a RbsCatalog,
    scorer: S,
}

impl<'a> RbsChooser<'a> {
    /// Create a chooser with the default hairpin counter
    pub fn new(catalog: &'a RbsCatalog) -> Self {
        Self {
            catalog,
            scorer: HairpinCounter::default(),
        }
    }
}

impl<'a, S: HairpinScorer> RbsChooser<'a, S> {
    /// Create a chooser with a custom hairpin scorer
    pub fn with_scorer(catalog: &'a RbsCatalog, scorer: S) -> Self {
        Self { catalog, scorer }
    }

    pub fn catalog(&self) -> &'a RbsCatalog {
        self.catalog
    }

    /// Choose the best non-excluded option for `cds`.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidInput` if `cds` is empty or not a
    /// nucleotide sequence, or `SelectionError::NoViableOption` if every
    /// option is excluded.
    pub fn select(
        &self,
        cds: &str,
        excluded: &HashSet<RbsOption>,
    ) -> Result<&'a RbsOption, SelectionError> {
        self.select_detailed(cds, excluded).map(|s| s.option)
    }

    /// Choose the best non-excluded option for `cds` and report its scores.
    ///
    /// Stage 1 keeps every option whose RBS + `cds` has the minimum hairpin
    /// score, in catalog order. Stage 2 picks the tied option whose signature
    /// is closest to the signature of `cds`; the earliest one wins a tie.
    ///
    /// # Errors
    ///
    /// See [`RbsChooser::select`].
    pub fn select_detailed(
        &self,
        cds: &str,
        excluded: &HashSet<RbsOption>,
    ) -> Result<Selection<'a>, SelectionError> {
        let cds = validate_cds(cds)?;
        let target_signature = sequence::signature(&cds);

        let (candidates, hairpin_score) = self.min_hairpin_candidates(&cds, excluded);
        let Some(hairpin_score) = hairpin_score else {
            return Err(SelectionError::NoViableOption {
                catalog_size: self.catalog.len(),
            });
        };

        let mut best = candidates[0];
        let mut best_distance = edit_distance(&target_signature, best.first6aas());
        for &candidate in &candidates[1..] {
            let distance = edit_distance(&target_signature, candidate.first6aas());
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }

        debug!(
            "Selected {} (hairpin score {}, {} tied, signature distance {})",
            best.name(),
            hairpin_score,
            candidates.len(),
            best_distance
        );

        Ok(Selection {
            option: best,
            hairpin_score,
            signature_distance: best_distance,
            tied: candidates.len(),
        })
    }

    /// Choose up to `n` distinct options for `cds`, best first.
    ///
    /// Each pick is excluded from the following ones. Stops early once the
    /// catalog is exhausted. The caller's `excluded` set is not modified.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidInput` for a bad `cds`, or
    /// `SelectionError::NoViableOption` if nothing can be chosen at all.
    pub fn rank(
        &self,
        cds: &str,
        n: usize,
        excluded: &HashSet<RbsOption>,
    ) -> Result<Vec<Selection<'a>>, SelectionError> {
        let mut excluded = excluded.clone();
        let mut picks = Vec::with_capacity(n.min(self.catalog.len()));

        while picks.len() < n {
            match self.select_detailed(cds, &excluded) {
                Ok(selection) => {
                    excluded.insert(selection.option.clone());
                    picks.push(selection);
                }
                Err(SelectionError::NoViableOption { .. }) if !picks.is_empty() => break,
                Err(e) => return Err(e),
            }
        }

        Ok(picks)
    }

    /// Non-excluded options sharing the minimum hairpin score, in catalog order
    fn min_hairpin_candidates(
        &self,
        cds: &str,
        excluded: &HashSet<RbsOption>,
    ) -> (Vec<&'a RbsOption>, Option<f64>) {
        let mut candidates = Vec::new();
        let mut min_score: Option<f64> = None;
        let mut combined = String::new();
        let catalog: &'a RbsCatalog = self.catalog;

        for option in catalog {
            if excluded.contains(option) {
                continue;
            }

            combined.clear();
            combined.push_str(option.rbs());
            combined.push_str(cds);
            let score = self.scorer.score(&combined);

            match min_score.map_or(Ordering::Less, |min| score.total_cmp(&min)) {
                Ordering::Less => {
                    candidates.clear();
                    candidates.push(option);
                    min_score = Some(score);
                }
                Ordering::Equal => candidates.push(option),
                Ordering::Greater => {}
            }
        }

        (candidates, min_score)
    }
}

fn validate_cds(cds: &str) -> Result<String, SelectionError> {
    if cds.trim().is_empty() {
        return Err(SelectionError::InvalidInput(
            "coding sequence is empty".to_string(),
        ));
    }
    sequence::normalize(cds).ok_or_else(|| {
        SelectionError::InvalidInput("coding sequence must contain only A, C, G and T".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const TARGET: &str = "ATGGTAAGAAAACAGTTGCAGAGAGTTGAATTATCACCATCGTTATATGACACAGCTTGGGTGGCTATGGTGCCGGAGCGTAGTTCTTCTCAA";

    /// Signatures: MASKGEELFT, MVRKQLQRVA, MVRKQLQRVE, MVRKQLQRVE
    fn make_test_catalog() -> RbsCatalog {
        RbsCatalog::from_options(vec![
            RbsOption::new("far", "TTTAAGGAGG", "ATGGCTAGCAAAGGAGAAGAACTTTTCACTGGA"),
            RbsOption::new("near", "CCAGGAGGAA", "ATGGTAAGAAAACAGTTGCAGAGAGTTGCAAAA"),
            RbsOption::new("exact", "GGAGGAAACA", "ATGGTAAGAAAACAGTTGCAGAGAGTTGAAAAA"),
            RbsOption::new("exact2", "AAGGAGATAT", "ATGGTAAGAAAACAGTTGCAGAGAGTTGAAAAA"),
        ])
        .unwrap()
    }

    fn flat(_: &str) -> f64 {
        0.0
    }

    #[test]
    fn test_tie_break_by_signature() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);

        let selection = chooser.select_detailed(TARGET, &HashSet::new()).unwrap();
        assert_eq!(selection.option.name(), "exact");
        assert_eq!(selection.signature_distance, 0);
        assert_eq!(selection.tied, 4);
    }

    #[test]
    fn test_residual_tie_first_seen_wins() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);

        let mut excluded = HashSet::new();
        excluded.insert(catalog.get("near").unwrap().clone());
        let first = chooser.select(TARGET, &excluded).unwrap();
        assert_eq!(first.name(), "exact");

        excluded.insert(first.clone());
        let second = chooser.select(TARGET, &excluded).unwrap();
        assert_eq!(second.name(), "exact2");
    }

    #[test]
    fn test_hairpin_score_dominates_signature() {
        let catalog = make_test_catalog();
        let scorer = |seq: &str| if seq.starts_with("TTT") { 1.0 } else { 3.0 };
        let chooser = RbsChooser::with_scorer(&catalog, scorer);

        let selection = chooser.select_detailed(TARGET, &HashSet::new()).unwrap();
        assert_eq!(selection.option.name(), "far");
        assert_eq!(selection.tied, 1);
        assert!((selection.hairpin_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scorer_sees_rbs_then_target_cds() {
        let catalog = make_test_catalog();
        let scorer = |seq: &str| {
            assert!(seq.ends_with(TARGET));
            0.0
        };
        let chooser = RbsChooser::with_scorer(&catalog, scorer);
        chooser.select(TARGET, &HashSet::new()).unwrap();
    }

    #[test]
    fn test_returns_catalog_reference() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);
        let chosen = chooser.select(TARGET, &HashSet::new()).unwrap();
        assert!(std::ptr::eq(chosen, catalog.get("exact").unwrap()));
        assert!(std::ptr::eq(chooser.catalog(), &catalog));
    }

    #[test]
    fn test_empty_cds_is_rejected_before_scoring() {
        let catalog = make_test_catalog();
        let calls = Cell::new(0);
        let scorer = |_: &str| {
            calls.set(calls.get() + 1);
            0.0
        };
        let chooser = RbsChooser::with_scorer(&catalog, scorer);

        for cds in ["", "   ", "\n"] {
            let err = chooser.select(cds, &HashSet::new()).unwrap_err();
            assert!(matches!(err, SelectionError::InvalidInput(_)));
        }
        let err = chooser.select("ATGXYZ", &HashSet::new()).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidInput(_)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_lowercase_cds_is_normalized() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);
        let lower = TARGET.to_ascii_lowercase();
        assert_eq!(chooser.select(&lower, &HashSet::new()).unwrap().name(), "exact");
    }

    #[test]
    fn test_all_excluded() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);
        let excluded: HashSet<RbsOption> = catalog.iter().cloned().collect();

        let err = chooser.select(TARGET, &excluded).unwrap_err();
        assert_eq!(err, SelectionError::NoViableOption { catalog_size: 4 });
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = RbsCatalog::from_options(Vec::new()).unwrap();
        let chooser = RbsChooser::new(&catalog);
        let err = chooser.select(TARGET, &HashSet::new()).unwrap_err();
        assert!(matches!(err, SelectionError::NoViableOption { .. }));
    }

    #[test]
    fn test_nan_scores_do_not_panic() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, |_: &str| f64::NAN);
        assert!(chooser.select(TARGET, &HashSet::new()).is_ok());
    }

    #[test]
    fn test_rank_returns_distinct_options() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);

        let picks = chooser.rank(TARGET, 10, &HashSet::new()).unwrap();
        let names: Vec<&str> = picks.iter().map(|s| s.option.name()).collect();
        assert_eq!(names, vec!["exact", "exact2", "near", "far"]);
    }

    #[test]
    fn test_rank_respects_caller_exclusions() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);
        let mut excluded = HashSet::new();
        excluded.insert(catalog.get("exact").unwrap().clone());

        let picks = chooser.rank(TARGET, 2, &excluded).unwrap();
        let names: Vec<&str> = picks.iter().map(|s| s.option.name()).collect();
        assert_eq!(names, vec!["exact2", "near"]);
        assert_eq!(excluded.len(), 1);
    }

    #[test]
    fn test_rank_exhausted_catalog_errors() {
        let catalog = make_test_catalog();
        let chooser = RbsChooser::with_scorer(&catalog, flat);
        let excluded: HashSet<RbsOption> = catalog.iter().cloned().collect();
        assert!(chooser.rank(TARGET, 2, &excluded).is_err());
        assert!(chooser.rank(TARGET, 0, &excluded).unwrap().is_empty());
    }
}
