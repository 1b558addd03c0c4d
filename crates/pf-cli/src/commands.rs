use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use pf_engine::{Change, ConversionRequest, Notation, SerializeOptions};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Fmt(args) => cmd_fmt(args),
        Command::Check(args) => cmd_check(args, &cli.format),
        Command::Convert(args) => cmd_convert(args),
        Command::Diff(args) => cmd_diff(args, &cli.format),
    }
}

fn cmd_fmt(args: FmtArgs) -> anyhow::Result<()> {
    let text = read_input(&args.path)?;
    let notation = resolve_notation(args.notation, &args.path, &text)?;
    let options = SerializeOptions { indent: args.indent };
    let formatted = pf_engine::format(&text, notation, &options)?;
    if args.write {
        if args.path == "-" {
            bail!("cannot write in place when reading from stdin");
        }
        fs::write(&args.path, &formatted).with_context(|| format!("writing {}", args.path))?;
        eprintln!("{} formatted {}", "✓".green().bold(), args.path.bold());
    } else {
        print!("{formatted}");
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, output: &OutputFormat) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for path in &args.paths {
        let text = read_input(path)?;
        let notation = resolve_notation(args.notation, path, &text)?;
        let result = pf_engine::validate(&text, notation);
        if !result.is_valid {
            failures += 1;
        }
        match output {
            OutputFormat::Json => {
                let line = serde_json::json!({
                    "path": path,
                    "notation": notation,
                    "is_valid": result.is_valid,
                    "error": result.error,
                });
                println!("{line}");
            }
            OutputFormat::Text => {
                if result.is_valid {
                    println!(
                        "{} {} is well-formed {}",
                        "✓".green().bold(),
                        path.bold(),
                        format!("({notation})").dimmed()
                    );
                } else {
                    println!(
                        "{} {}: {}",
                        "✗".red().bold(),
                        path.bold(),
                        result.error.as_deref().unwrap_or("invalid")
                    );
                }
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} input(s) failed validation", args.paths.len());
    }
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let text = read_input(&args.path)?;
    let from = resolve_notation(args.from, &args.path, &text)?;
    let request = ConversionRequest::new(text, from, args.to);
    let options = SerializeOptions { indent: args.indent };
    let converted = pf_engine::convert(&request, &options)?;
    match &args.output {
        Some(out_path) => {
            fs::write(out_path, &converted).with_context(|| format!("writing {out_path}"))?;
            eprintln!(
                "{} converted {} → {} ({})",
                "✓".green().bold(),
                args.path.bold(),
                out_path.bold(),
                args.to
            );
        }
        None => print!("{converted}"),
    }
    Ok(())
}

fn cmd_diff(args: DiffArgs, output: &OutputFormat) -> anyhow::Result<()> {
    let left_text = read_input(&args.left)?;
    let right_text = read_input(&args.right)?;
    let left_notation = resolve_notation(args.notation, &args.left, &left_text)?;
    let right_notation = resolve_notation(args.notation, &args.right, &right_text)?;
    let delta = pf_engine::diff(&left_text, left_notation, &right_text, right_notation)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&delta)?),
        OutputFormat::Text => {
            if delta.is_empty() {
                println!("{} no structural differences", "✓".green().bold());
                return Ok(());
            }
            for change in &delta.changes {
                match change {
                    Change::Added { path, .. } => {
                        println!("{} {}", "+".green().bold(), path)
                    }
                    Change::Removed { path, .. } => {
                        println!("{} {}", "-".red().bold(), path)
                    }
                    Change::Changed { path, old, new } => println!(
                        "{} {}: {} → {}",
                        "~".yellow().bold(),
                        path,
                        old.to_text(),
                        new.to_text()
                    ),
                    Change::KindChanged { path, old, new } => println!(
                        "{} {}: {} → {}",
                        "~".yellow().bold(),
                        path,
                        old.kind(),
                        new.kind()
                    ),
                }
            }
            println!("{} change(s)", delta.len());
        }
    }
    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

/// Resolve the notation for an input: explicit flag first, then the file
/// extension, then a content sniff on the first significant byte. The
/// engine itself never infers a notation.
fn resolve_notation(
    explicit: Option<Notation>,
    path: &str,
    text: &str,
) -> anyhow::Result<Notation> {
    if let Some(notation) = explicit {
        return Ok(notation);
    }
    if let Some(notation) = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse::<Notation>().ok())
    {
        return Ok(notation);
    }
    match text.trim_start().as_bytes().first() {
        Some(b'{') | Some(b'[') => Ok(Notation::Json),
        Some(b'<') => Ok(Notation::Xml),
        Some(_) => Ok(Notation::Yaml),
        None => bail!("cannot detect the notation of empty input; pass --notation"),
    }
}
