use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(version)]
#[command(about = "Personal planner tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize text, an article or a note
    Summarize(SummarizeArgs),

    /// Show or change saved defaults
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Text to summarize (reads stdin if neither this nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read text from a file, `-` for stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum sentences (defaults to the saved setting)
    #[arg(short = 'n', long)]
    pub max_sentences: Option<usize>,

    /// Maximum length in characters (defaults to the saved setting)
    #[arg(short = 'l', long)]
    pub max_length: Option<usize>,

    /// Print the summary record as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the summary length after the summary
    #[arg(long)]
    pub stats: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show saved defaults
    Show,
    /// Change saved defaults
    Set {
        #[arg(long)]
        max_sentences: Option<usize>,
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Restore built-in defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["dayplan", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_summarize_text() {
        let cli = Cli::try_parse_from(["dayplan", "summarize", "Some text.", "-n", "2", "-l", "80"])
            .unwrap();
        if let Commands::Summarize(args) = cli.command {
            assert_eq!(args.text.as_deref(), Some("Some text."));
            assert_eq!(args.max_sentences, Some(2));
            assert_eq!(args.max_length, Some(80));
            assert!(!args.json);
        } else {
            panic!("Expected Summarize command");
        }
    }

    #[test]
    fn test_cli_parse_summarize_file() {
        let cli =
            Cli::try_parse_from(["dayplan", "summarize", "--file", "notes.txt", "--stats"]).unwrap();
        if let Commands::Summarize(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
            assert!(args.text.is_none());
            assert!(args.stats);
        } else {
            panic!("Expected Summarize command");
        }
    }

    #[test]
    fn test_cli_text_conflicts_with_file() {
        let cli = Cli::try_parse_from(["dayplan", "summarize", "inline", "--file", "notes.txt"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rejects_negative_limit() {
        let cli = Cli::try_parse_from(["dayplan", "summarize", "text", "--max-length", "-5"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_config_actions() {
        for args in [
            vec!["dayplan", "config"],
            vec!["dayplan", "config", "show"],
            vec!["dayplan", "config", "reset"],
            vec!["dayplan", "config", "set", "--max-sentences", "4"],
        ] {
            let cli = Cli::try_parse_from(args.clone());
            assert!(cli.is_ok(), "Failed to parse {:?}", args);
        }
    }
}
