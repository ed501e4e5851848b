mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use simple_logger::SimpleLogger;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::report::render_error;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let ok = match cli.command {
        Commands::Check { files } => check(&files)?,
        Commands::Fmt { files, write } => format_files(&files, write)?,
        Commands::Tokens { file } => print_tokens(&file)?,
        Commands::Tree { file } => print_tree(&file)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse and re-render one file. Parse errors are reported on stderr and
/// come back as `None`.
fn formatted(path: &Path, source: &str) -> Option<String> {
    match cssfmt::parse(source) {
        Ok(sheet) => Some(sheet.text()),
        Err(err) => {
            eprint!("{}", render_error(path, source, &err));
            None
        }
    }
}

fn check(files: &[PathBuf]) -> Result<bool> {
    let mut ok = true;
    for path in files {
        let source = read(path)?;
        match formatted(path, &source) {
            Some(text) if text == source => log::debug!("{} is formatted", path.display()),
            Some(_) => {
                eprintln!("{}: not in canonical form", path.display());
                ok = false;
            }
            None => ok = false,
        }
    }
    Ok(ok)
}

fn format_files(files: &[PathBuf], write: bool) -> Result<bool> {
    let mut ok = true;
    for path in files {
        let source = read(path)?;
        let Some(text) = formatted(path, &source) else {
            ok = false;
            continue;
        };

        if !write {
            print!("{}", text);
        } else if text != source {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("rewrote {}", path.display());
        }
    }
    Ok(ok)
}

fn print_tokens(path: &Path) -> Result<bool> {
    let source = read(path)?;
    match cssfmt::tokenize(&source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}:{}\t{:?}", token.line, token.column, token.text);
            }
            Ok(true)
        }
        Err(err) => {
            eprint!("{}", render_error(path, &source, &err));
            Ok(false)
        }
    }
}

fn print_tree(path: &Path) -> Result<bool> {
    let source = read(path)?;
    match cssfmt::parse(&source) {
        Ok(sheet) => {
            println!("{}", serde_json::to_string_pretty(&sheet)?);
            Ok(true)
        }
        Err(err) => {
            eprint!("{}", render_error(path, &source, &err));
            Ok(false)
        }
    }
}
