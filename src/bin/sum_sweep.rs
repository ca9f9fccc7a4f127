use clap::Parser;

use anagram_arith::utils::logger;
use anagram_arith::{AnagramFinder, EnglishSpeller, Operation, SweepConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SweepConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Sweeping sum totals up to {}", config.max);

    let max = match config.max_value() {
        Ok(max) => max,
        Err(e) => {
            tracing::error!("❌ Argument validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 The maximum sum must be a positive integer");
            std::process::exit(1);
        }
    };

    let mut finder = AnagramFinder::new(EnglishSpeller::new());
    let matches = match finder.sweep(max) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("❌ Sweep failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Sweep complete: {} matches up to {}", matches.len(), max);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for found in &matches {
            println!("{}", found.render(Operation::Add));
        }
    }

    Ok(())
}
