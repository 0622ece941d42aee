use std::io::{Read, Write};
use std::path::Path;
use std::{env, fs};

use anyhow::Context;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use catlink_core::config::{resolve_with_base, Config, Settings};
use catlink_core::traits::SearchOracle;
use catlink_core::types::{Annotation, FieldText};
use catlink_engine::{render_html, AnnotationEmitter, Linker};
use catlink_oracle::{MediaWikiOracle, StaticOracle};

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: String,
    fixtures: Option<String>,
    html: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {prog} <fields.json|-> [--fixtures <file.json>] [--html]");
    std::process::exit(1)
}

/// Parse everything after the program name. Needs no configuration, so
/// `--help` works even when config files are broken.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let (mut input, mut fixtures, mut html) = (None, None, false);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => html = true,
            "--fixtures" | "-f" => fixtures = Some(args.next().ok_or("--fixtures requires a path")?),
            "--help" | "-h" => return Ok(Command::Help),
            _ if arg == "-" || !arg.starts_with('-') => input = Some(arg),
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }
    let input = input.ok_or("missing fields input")?;
    Ok(Command::Run(Args { input, fixtures, html }))
}

fn read_fields(input: &str, base: &Path) -> anyhow::Result<Vec<FieldText>> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read fields from stdin")?;
        buf
    } else {
        let path = resolve_with_base(base, input);
        fs::read_to_string(&path).with_context(|| format!("Failed to read fields {}", path.display()))?
    };
    serde_json::from_str(&json).context("fields must be a JSON array of {id, kind, text}")
}

async fn run<O: SearchOracle>(oracle: O, settings: Settings, fields: &[FieldText], html: bool) -> anyhow::Result<()> {
    let linker = Linker::new(oracle, settings);

    let pb = ProgressBar::new(fields.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} fields ({percent}%) {msg}")?
            .progress_chars("#>-"),
    );
    let outcomes = {
        let (linker, pb) = (&linker, &pb);
        join_all(fields.iter().map(|field| async move {
            let outcome = linker.link_field(field).await;
            pb.inc(1);
            outcome
        }))
        .await
    };
    pb.finish_and_clear();

    let emitter = AnnotationEmitter::new(&linker.settings().presentation);
    let mut annotations: Vec<Annotation> = Vec::new();
    let mut stdout = std::io::stdout().lock();
    if html {
        for outcome in &outcomes {
            let start = annotations.len();
            emitter.emit_outcome(outcome, &mut annotations);
            writeln!(stdout, "{}", render_html(&outcome.segmentation.field.text, &annotations[start..]))?;
        }
    } else {
        for outcome in &outcomes {
            emitter.emit_outcome(outcome, &mut annotations);
        }
        serde_json::to_writer_pretty(&mut stdout, &annotations)?;
        writeln!(stdout)?;
    }

    let components: usize = outcomes.iter().map(|o| o.decisions.len()).sum();
    info!(fields = fields.len(), components, annotations = annotations.len(), "done");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut argv = env::args();
    let prog = argv.next().unwrap_or_else(|| "catlink".to_string());
    let args = match parse_args(argv) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => usage(&prog),
        Err(msg) => {
            eprintln!("Error: {msg}");
            usage(&prog)
        }
    };
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let settings = config.settings().clone();

    let cwd = env::current_dir()?;
    let fields = read_fields(&args.input, &cwd)?;

    match args.fixtures {
        Some(fixtures) => {
            let path = resolve_with_base(&cwd, &fixtures);
            let oracle = StaticOracle::from_json_file(&path)?;
            info!(terms = oracle.len(), fixtures = %path.display(), "using fixture oracle");
            run(oracle, settings, &fields, args.html).await
        }
        None => {
            let oracle = MediaWikiOracle::new(&settings.oracle)?;
            info!(endpoint = %settings.oracle.endpoint, "using MediaWiki oracle");
            run(oracle, settings, &fields, args.html).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
        assert_eq!(parse(&["fields.json", "-h"]), Ok(Command::Help));
    }

    #[test]
    fn run_arguments() {
        let expected = Args { input: "-".to_string(), fixtures: Some("fx.json".to_string()), html: true };
        assert_eq!(parse(&["-", "--fixtures", "fx.json", "--html"]), Ok(Command::Run(expected)));
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(parse(&["--fixtures"]).is_err());
        assert!(parse(&["--verbose", "fields.json"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
