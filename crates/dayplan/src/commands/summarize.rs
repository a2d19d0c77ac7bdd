use crate::cli::SummarizeArgs;
use anyhow::Context;
use dayplan_settings::{Paths, Settings};
use dayplan_summarize::{summarize_detailed, Summary, SummarizerConfig};
use std::io::Read;
use std::path::Path;

pub fn run(args: &SummarizeArgs) -> anyhow::Result<()> {
    let text = read_input(args.text.as_deref(), args.file.as_deref(), std::io::stdin())?;

    if text.trim().is_empty() {
        eprintln!("Please enter some text to summarize.");
        return Ok(());
    }

    let paths = Paths::new()?;
    let settings = Settings::load(&paths.settings_file())
        .with_context(|| format!("loading {}", paths.settings_file().display()))?;
    let config = resolve_limits(&settings, args.max_sentences, args.max_length);

    let summary = summarize_detailed(&text, &config)?;
    print!("{}", render(&summary, args.json, args.stats)?);
    Ok(())
}

/// Flag values win over saved defaults
pub fn resolve_limits(
    settings: &Settings,
    max_sentences: Option<usize>,
    max_length: Option<usize>,
) -> SummarizerConfig {
    SummarizerConfig::new(
        max_sentences.unwrap_or(settings.summarizer.max_sentences),
        max_length.unwrap_or(settings.summarizer.max_length),
    )
}

pub fn read_input<R: Read>(
    text: Option<&str>,
    file: Option<&Path>,
    mut stdin: R,
) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

pub fn render(summary: &Summary, json: bool, stats: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summary)? + "\n");
    }

    let mut out = format!("{}\n", summary.text);
    if stats {
        out.push_str(&format!(
            "\nSummary length: {} characters\n",
            summary.char_len()
        ));
    }
    Ok(out)
}
