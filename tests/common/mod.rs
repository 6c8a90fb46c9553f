//! Shared fixture tables for integration tests.
#![allow(dead_code)]

/// Target used throughout the selection tests
pub const TARGET_CDS: &str = "ATGGTAAGAAAACAGTTGCAGAGAGTTGAATTATCACCATCGTTATATGACACAGCTTGGGTGGCTATGGTGCCGGAGCGTAGTTCTTCTCAA";

/// Gene table rows: locus tag, gene name, product, strand, start, end, CDS
pub const GENES: &str = "\
b1452\tyncE\tDNA-binding protein\t+\t1\t96\tATGAAAAAAATTCTCTTGGCAACCCTGCTGGCCGGTGCTCTGTTTGCGCATCAGGCAGCAGCG
b0525\tppiB\tpeptidyl-prolyl isomerase B\t-\t1\t96\tATGGTTACTTTCCACACCAATCACGGCGATATTGTCATTAAAACTTTTGACGATAAAGCTCCT
b0812\tdps\tDNA starvation protein\t-\t1\t96\tATGAGTACCGCTAAATTAGTTAAATCAAAAGCGACCAATCTGCTTTATACCCGCAACGATGTA
b0145\tdksA\tRNA polymerase-binding factor\t-\t1\t96\tATGCAAGAAGGGCAAAACCGTAAAACATCGTCCCTGAGTATTCTCGCGATCGCTGGGGTGGAA
b0781\tmoaB\tmolybdopterin protein B\t+\t1\t96\tATGAGCCAGGTAAGCACCGAATTTATTCCTACCCGCATCGCCATTCTGACCGTTTCTAACCGC
b3340\tfusA\telongation factor G\t-\t1\t96\tATGGCTCGTACAACACCCATCGCACGCTACCGTAACATCGGTATCAGTGCGCACATCGACGCC
b3987\trpoB\tRNA polymerase beta\t+\t1\t96\tATGGTTTACTCCTATACCGAGAAAAAACGTATTCGTAAGGATTTTGGTAAACGTCCACAAGTT
b0014\tdnaK\tchaperone Hsp70\t+\t1\t96\tATGGGTAAAATAATTGGTATCGACCTGGGTACTACCAACTCTTGTGTAGCGATTATGGAAGGC
";

/// RBS options table, one row per donor gene
pub const RBS_OPTIONS: &str = "\
yncE\tCTTTAAGAAGGAGATATACAT
ppiB\tTAATTCAAAAGGAGATTCCC
dps\tTACCATAAGGAGAATAAAT
dksA\tGAATACAAGGAGCAAGCC
moaB\tACGCAGAGGAGTTTATCC
fusA\tTTAAGGAGTATCATTA
rpoB\tAGCACAGGAGGAATCAGC
dnaK\tTCTTACCATTTAGGAGGTAACGC
";
