use clap::Parser;
use indicatif::ProgressBar;

use anagram_arith::utils::logger;
use anagram_arith::{AnagramFinder, CliConfig, EnglishSpeller};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting anagram-arith CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (target, op) = match config.validated() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("❌ Argument validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Usage: anagram-arith <TARGET> [--op <OP>] with a positive TARGET and OP one of: *, +");
            std::process::exit(1);
        }
    };

    let mut finder = AnagramFinder::new(EnglishSpeller::new());

    let result = if config.progress {
        let bar = ProgressBar::new(0);
        // With fewer than two pairs the observer never fires, so the bar
        // keeps its zero length; there is nothing to draw in that case.
        let mut sized = false;
        let result = finder.find_observed(target, op, |done, total| {
            if !sized {
                bar.set_length(total as u64);
                sized = true;
            }
            bar.set_position(done as u64);
        });
        bar.finish_and_clear();
        result
    } else {
        finder.find(target, op)
    };

    let matches = match result {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("❌ Search failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "✅ Search complete: {} matches for {} under '{}'",
        matches.len(),
        target,
        op
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for found in &matches {
            println!("{}", found.render(op));
        }
    }

    Ok(())
}
