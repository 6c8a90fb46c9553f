use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{OutputFormat, TableArgs};
use crate::core::RbsOption;
use crate::matching::engine::{RbsChooser, Selection};
use crate::matching::scoring::{
    HairpinConfig, HairpinCounter, DEFAULT_MAX_LOOP, DEFAULT_MIN_LOOP, DEFAULT_STEM_LENGTH,
};

/// Number of leading CDS bases echoed in text output
const CDS_PREVIEW_LEN: usize = 18;

#[derive(Args)]
pub struct ChooseArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Coding sequence to choose an RBS for
    #[arg(long, conflicts_with = "cds_file", required_unless_present = "cds_file")]
    pub cds: Option<String>,

    /// File holding the coding sequence (raw or FASTA); use '-' for stdin
    #[arg(long)]
    pub cds_file: Option<PathBuf>,

    /// Number of distinct RBSs to choose
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Gene name of an option to exclude; may be repeated
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    // === Hairpin detection options ===
    /// Bases on each side of a hairpin stem
    #[arg(long, default_value_t = DEFAULT_STEM_LENGTH)]
    pub stem_length: usize,

    /// Fewest unpaired bases in a hairpin loop
    #[arg(long, default_value_t = DEFAULT_MIN_LOOP)]
    pub min_loop: usize,

    /// Most unpaired bases in a hairpin loop
    #[arg(long, default_value_t = DEFAULT_MAX_LOOP)]
    pub max_loop: usize,
}

/// Execute choose subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be built, an excluded name is not
/// in the catalog, or no RBS can be chosen.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ChooseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let cds = read_cds(&args)?;
    let catalog = args.tables.load(verbose)?;

    let counter = HairpinCounter::new(HairpinConfig {
        stem_length: args.stem_length,
        min_loop: args.min_loop,
        max_loop: args.max_loop,
    })?;
    let config = *counter.config();

    if verbose {
        eprintln!(
            "Hairpin detection: stem {} nt, loop {}-{} nt",
            config.stem_length, config.min_loop, config.max_loop
        );
    }

    let chooser = RbsChooser::with_scorer(&catalog, counter);

    let mut excluded: HashSet<RbsOption> = HashSet::with_capacity(args.exclude.len());
    for name in &args.exclude {
        let option = chooser
            .catalog()
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Excluded option '{name}' is not in the catalog"))?;
        excluded.insert(option.clone());
    }

    let picks = chooser.rank(&cds, args.count, &excluded)?;

    if picks.len() < args.count {
        eprintln!(
            "Warning: only {} of {} requested options are available",
            picks.len(),
            args.count
        );
    }

    match format {
        OutputFormat::Text => print_text_results(&cds, &picks, verbose),
        OutputFormat::Json => print_json_results(&picks, &config)?,
        OutputFormat::Tsv => print_tsv_results(&picks),
    }

    Ok(())
}

fn read_cds(args: &ChooseArgs) -> anyhow::Result<String> {
    if let Some(cds) = &args.cds {
        return Ok(cds.clone());
    }
    let path = args
        .cds_file
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Either --cds or --cds-file is required"))?;
    let text = read_text(path)?;
    Ok(sequence_from_text(&text))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
    }
}

/// Concatenate sequence lines, dropping FASTA headers. Only the first
/// record is used.
fn sequence_from_text(text: &str) -> String {
    let mut seq = String::new();
    let mut seen_header = false;
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('>') {
            if seen_header || !seq.is_empty() {
                break;
            }
            seen_header = true;
            continue;
        }
        seq.push_str(line);
    }
    seq
}

fn print_text_results(cds: &str, picks: &[Selection<'_>], verbose: bool) {
    let preview: String = cds.trim().chars().take(CDS_PREVIEW_LEN).collect();
    println!("CDS starts with:");
    println!("{preview}");

    for (i, pick) in picks.iter().enumerate() {
        println!();
        println!("Selected{}:", i + 1);
        println!();
        println!("{}", pick.option);
        if verbose {
            println!(
                "  └─ hairpins: {}  signature distance: {}  tied: {}",
                pick.hairpin_score, pick.signature_distance, pick.tied
            );
        }
    }
}

fn print_json_results(picks: &[Selection<'_>], config: &HairpinConfig) -> anyhow::Result<()> {
    let selections: Vec<serde_json::Value> = picks
        .iter()
        .enumerate()
        .map(|(i, pick)| {
            serde_json::json!({
                "rank": i + 1,
                "name": pick.option.name(),
                "description": pick.option.description(),
                "rbs": pick.option.rbs(),
                "first6aas": pick.option.first6aas(),
                "hairpin_score": pick.hairpin_score,
                "signature_distance": pick.signature_distance,
                "tied": pick.tied,
            })
        })
        .collect();

    let output = serde_json::json!({
        "hairpin_config": config,
        "selections": selections,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(picks: &[Selection<'_>]) {
    println!("rank\tname\trbs\tfirst6aas\thairpin_score\tsignature_distance\ttied");
    for (i, pick) in picks.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            pick.option.name(),
            pick.option.rbs(),
            pick.option.first6aas(),
            pick.hairpin_score,
            pick.signature_distance,
            pick.tied
        );
    }
}
