use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use supmatch::{edit_distance, fuzzy_match, rank, Catalog, SearchConfig};

mod cli;
use cli::display::{hit_line, row, section_bot, section_top, themed, verdict, GRAY};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("SUPMATCH_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Distance { a, b } => {
            println!("{}", edit_distance(&a, &b));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match {
            query,
            target,
            max_distance,
        } => {
            let matched = fuzzy_match(&query, &target, max_distance);
            println!("{}", verdict(matched));
            Ok(if matched {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Search {
            catalog,
            query,
            limit,
            max_distance,
            fold_diacritics,
            json,
            config,
        } => {
            let mut settings = SearchConfig::load(config.as_deref())?;
            if let Some(limit) = limit {
                settings.limit = limit;
            }
            if let Some(max_distance) = max_distance {
                settings.max_distance = max_distance;
            }
            settings.fold_diacritics |= fold_diacritics;

            run_search(&catalog, &query, &settings, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_search(path: &Path, query: &str, settings: &SearchConfig, json: bool) -> Result<()> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    let hits = rank(&catalog, query, settings.match_options(), settings.limit);

    if json {
        let out = serde_json::to_string_pretty(&hits).context("Failed to serialize hits")?;
        println!("{}", out);
        return Ok(());
    }

    section_top(&format!("{:?} in {} products", query, catalog.len()));
    if hits.is_empty() {
        row(&themed(GRAY, &[], "  no matches"));
    }
    for (i, hit) in hits.iter().enumerate() {
        row(&hit_line(i + 1, hit));
    }
    section_bot();
    Ok(())
}
