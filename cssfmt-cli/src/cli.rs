use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cssfmt")]
#[command(about = "Check and reformat stylesheets into canonical form")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fail if a file does not parse or is not already formatted
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the formatted text, or rewrite the files with --write
    Fmt {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(short, long)]
        write: bool,
    },
    /// Print the tokens of a file
    Tokens { file: PathBuf },
    /// Print the parsed tree of a file as JSON
    Tree { file: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["cssfmt", "check", "a.css", "b.css"]).unwrap();
        assert!(!cli.debug);
        match cli.command {
            Commands::Check { files } => assert_eq!(files.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_fmt_write() {
        let cli = Cli::try_parse_from(["cssfmt", "fmt", "--write", "a.css", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Fmt { write: true, .. }));
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["cssfmt", "check"]).is_err());
    }
}
