use clap::{Args, Parser, Subcommand};

use pf_model::Notation;

#[derive(Parser)]
#[command(
    name = "pf",
    about = "Polyform — format, validate, convert, and compare structured data",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Canonically format a document
    Fmt(FmtArgs),
    /// Check documents for well-formedness
    Check(CheckArgs),
    /// Convert a document to another notation
    Convert(ConvertArgs),
    /// Show the structural delta between two documents
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct FmtArgs {
    /// Input file, or "-" for stdin
    pub path: String,
    /// Source notation; detected from the file when omitted
    #[arg(short, long)]
    pub notation: Option<Notation>,
    /// Indentation width in spaces
    #[arg(long, default_value = "2")]
    pub indent: usize,
    /// Rewrite the file in place instead of printing
    #[arg(short, long)]
    pub write: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Input files, or "-" for stdin
    #[arg(required = true)]
    pub paths: Vec<String>,
    /// Notation of every input; detected per file when omitted
    #[arg(short, long)]
    pub notation: Option<Notation>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input file, or "-" for stdin
    pub path: String,
    /// Target notation
    #[arg(long)]
    pub to: Notation,
    /// Source notation; detected from the file when omitted
    #[arg(long)]
    pub from: Option<Notation>,
    /// Output file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,
    /// Indentation width in spaces
    #[arg(long, default_value = "2")]
    pub indent: usize,
}

#[derive(Args)]
pub struct DiffArgs {
    /// Left input file
    pub left: String,
    /// Right input file
    pub right: String,
    /// Notation of both inputs; detected per file when omitted
    #[arg(short, long)]
    pub notation: Option<Notation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fmt() {
        let cli = Cli::try_parse_from(["pf", "fmt", "doc.json"]).unwrap();
        if let Command::Fmt(args) = cli.command {
            assert_eq!(args.path, "doc.json");
            assert_eq!(args.indent, 2);
            assert!(!args.write);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_fmt_write_with_indent() {
        let cli = Cli::try_parse_from(["pf", "fmt", "-w", "--indent", "4", "doc.json"]).unwrap();
        if let Command::Fmt(args) = cli.command {
            assert!(args.write);
            assert_eq!(args.indent, 4);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_fmt_explicit_notation() {
        let cli = Cli::try_parse_from(["pf", "fmt", "-n", "yaml", "data.txt"]).unwrap();
        if let Command::Fmt(args) = cli.command {
            assert_eq!(args.notation, Some(Notation::Yaml));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_check_multiple_paths() {
        let cli = Cli::try_parse_from(["pf", "check", "a.json", "b.xml"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.paths, vec!["a.json", "b.xml"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn check_requires_at_least_one_path() {
        assert!(Cli::try_parse_from(["pf", "check"]).is_err());
    }

    #[test]
    fn parse_convert() {
        let cli =
            Cli::try_parse_from(["pf", "convert", "doc.json", "--to", "yaml", "-o", "out.yaml"])
                .unwrap();
        if let Command::Convert(args) = cli.command {
            assert_eq!(args.to, Notation::Yaml);
            assert_eq!(args.output, Some("out.yaml".into()));
            assert_eq!(args.from, None);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn convert_requires_target() {
        assert!(Cli::try_parse_from(["pf", "convert", "doc.json"]).is_err());
    }

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["pf", "diff", "a.json", "b.json"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.left, "a.json");
            assert_eq!(args.right, "b.json");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn unknown_notation_is_rejected() {
        assert!(Cli::try_parse_from(["pf", "fmt", "-n", "plaintext", "x"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["pf", "--verbose", "fmt", "doc.json"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_output_format() {
        let cli = Cli::try_parse_from(["pf", "--format", "json", "diff", "a", "b"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
