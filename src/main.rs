mod cli;

use clap::Parser;
use cli::Cli;
use geneconv_viz::io::summary::RunSummary;
use geneconv_viz::io::{load_fragments, write_coverage_tsv};
use geneconv_viz::plotting::themes::{CLASSIC, theme_by_name};
use geneconv_viz::plotting::{PlotOptions, plot_coverage};
use geneconv_viz::{calculate_coverage, calculate_region_stats};
use log::{info, warn};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = cli.filter();
    let region = cli.region();

    let records = load_fragments(&cli.input)?;
    let coverage = calculate_coverage(&records, &filter)?;
    let stats = calculate_region_stats(&coverage.counts, &region, cli.tail_len);

    println!(
        "Significant fragments: {} of {}",
        coverage.filtered.len(),
        records.len()
    );
    println!(
        "Duplication region {}-{}: {}% of total coverage",
        region.start, region.end, stats.dup_pct
    );
    println!(
        "Last {} bp of duplication: {}% of total coverage",
        cli.tail_len, stats.tail_pct
    );

    if let Some(path) = &cli.coverage_output {
        write_coverage_tsv(path, &coverage.counts)?;
        info!("Wrote coverage table to {}", path.display());
    }

    if let Some(path) = &cli.summary_output {
        let summary = RunSummary::new(
            &cli.input,
            &records,
            &filter,
            &coverage,
            region,
            cli.tail_len,
            stats,
        );
        summary.write_to_file(path)?;
        info!("Wrote run summary to {}", path.display());
    }

    if cli.skip_plotting {
        info!("Plotting skipped");
        return Ok(());
    }

    let theme = theme_by_name(&cli.theme).unwrap_or_else(|| {
        warn!("Unknown theme '{}', using {}", cli.theme, CLASSIC.name);
        &CLASSIC
    });
    let options = PlotOptions {
        theme,
        svg: cli.svg_output,
    };
    let written = plot_coverage(
        &coverage.counts,
        &region,
        &stats,
        cli.tail_len,
        &cli.out,
        &options,
    )?;
    println!("Success: Figure saved as {}", written.display());

    Ok(())
}
