use anyhow::{Context, Result};
use bmsearch::config::AppConfig;
use bmsearch::input::{self, FileText};
use bmsearch::output::{self, SearchReport};
use bmsearch::search::{BoyerMoore, ShiftStep, TraceRecorder};
use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Instant;
use termcolor::{ColorChoice, StandardStream};

macro_rules! verbose {
    ($cfg:expr, $($arg:tt)*) => {
        if $cfg.verbose {
            eprintln!("bmsearch: {}", format_args!($($arg)*));
        }
    };
}

#[derive(Parser)]
#[command(name = "bmsearch")]
#[command(about = "Exact substring search using the Boyer-Moore algorithm")]
struct Cli {
    /// Pattern to search for (prompted for when omitted)
    pattern: Option<String>,

    /// Text to search (prompted for when omitted and no --file is given)
    text: Option<String>,

    /// Search the contents of FILE instead of TEXT (repeatable)
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// ASCII case-insensitive search
    #[arg(short, long, overrides_with = "no_ignore_case")]
    ignore_case: bool,

    /// Case-sensitive search, even if enabled in config
    #[arg(long, overrides_with = "ignore_case")]
    no_ignore_case: bool,

    /// Print every shift decision
    #[arg(long, overrides_with = "no_trace")]
    trace: bool,

    /// Do not print shift decisions, even if enabled in config
    #[arg(long, overrides_with = "trace")]
    no_trace: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Report line:column for each match
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Print the text with matches highlighted
    #[arg(long)]
    highlight: bool,

    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorWhen>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Command-line flags win over config file and environment
    fn apply_to(&self, config: &mut AppConfig) {
        if self.ignore_case {
            config.ignore_case = true;
        } else if self.no_ignore_case {
            config.ignore_case = false;
        }
        if self.trace {
            config.trace = true;
        } else if self.no_trace {
            config.trace = false;
        }
        config.verbose |= self.verbose;
        if let Some(when) = self.color {
            config.color = !matches!(when, ColorWhen::Never);
        }
    }

    fn color_choice(&self, config: &AppConfig) -> ColorChoice {
        match self.color {
            Some(ColorWhen::Always) => ColorChoice::Always,
            Some(ColorWhen::Never) => ColorChoice::Never,
            _ if config.color && io::stdout().is_terminal() => ColorChoice::Auto,
            _ => ColorChoice::Never,
        }
    }
}

/// Outcome of searching one input
struct Searched {
    source: Option<PathBuf>,
    text: Text,
    positions: Vec<usize>,
    trace: Option<Vec<ShiftStep>>,
}

enum Text {
    Inline(String),
    File(FileText),
}

impl Text {
    fn bytes(&self) -> &[u8] {
        match self {
            Text::Inline(s) => s.as_bytes(),
            Text::File(f) => &f[..],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    cli.apply_to(&mut config);

    let (pattern, text) = read_missing_input(&cli)?;
    let folded = input::fold_case(pattern.as_bytes(), config.ignore_case);

    // An empty pattern is reported as "not found", not as a failure.
    let started = Instant::now();
    let matcher = match BoyerMoore::new(&folded) {
        Ok(bm) => {
            verbose!(
                config,
                "tables built in {:?} (period {}, {} distinct bytes)",
                started.elapsed(),
                bm.good_suffix_tables().full_match_shift(),
                bm.bad_char_table().distinct_bytes()
            );
            Some(bm)
        }
        Err(e) => {
            verbose!(config, "{}", e);
            None
        }
    };
    verbose!(config, "pattern: {} bytes", pattern.len());

    let results = match text {
        Some(text) => vec![search_one(
            None,
            Text::Inline(text),
            matcher.as_ref(),
            &config,
        )],
        None => search_files(&cli.files, matcher.as_ref(), &config)?,
    };

    let mut stdout = StandardStream::stdout(cli.color_choice(&config));

    if cli.json {
        let reports: Vec<SearchReport> = results
            .into_iter()
            .map(|r| to_report(r, &pattern, cli.line_numbers))
            .collect();
        output::print_json(&mut stdout, &reports)?;
        return Ok(());
    }

    for result in &results {
        let bytes = result.text.bytes();
        let source = result.source.as_deref();

        if let Some(steps) = &result.trace {
            output::print_trace(&mut stdout, steps)?;
        }

        if cli.highlight && !result.positions.is_empty() {
            if input::is_binary(bytes) {
                verbose!(config, "not highlighting binary input");
            } else {
                output::print_highlighted(&mut stdout, bytes, &result.positions, pattern.len())?;
            }
        }

        if cli.line_numbers {
            output::print_line_columns(&mut stdout, source, bytes, &result.positions)?;
        } else {
            output::print_positions(&mut stdout, source, &result.positions)?;
        }
    }

    Ok(())
}

/// Fill in pattern and text from stdin prompts where the command line left
/// them out. Returns `None` for the text when files are searched instead.
fn read_missing_input(cli: &Cli) -> Result<(String, Option<String>)> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();

    let text = if cli.text.is_some() || !cli.files.is_empty() {
        cli.text.clone()
    } else {
        let line = input::prompt_line(&mut stdin, &mut stdout, "Enter the text: ")?;
        Some(line.unwrap_or_default())
    };

    let pattern = match &cli.pattern {
        Some(p) => p.clone(),
        None => input::prompt_line(&mut stdin, &mut stdout, "Enter the pattern to find: ")?
            .unwrap_or_default(),
    };

    Ok((pattern, text))
}

fn search_one(
    source: Option<PathBuf>,
    text: Text,
    matcher: Option<&BoyerMoore>,
    config: &AppConfig,
) -> Searched {
    let started = Instant::now();
    let haystack = input::fold_case(text.bytes(), config.ignore_case);

    let (positions, trace) = match matcher {
        Some(bm) if config.trace => {
            let mut recorder = TraceRecorder::new();
            let positions = bm.find_all_observed(&haystack, &mut recorder);
            (positions, Some(recorder.steps))
        }
        Some(bm) => (bm.find_all(&haystack), None),
        None => (Vec::new(), None),
    };

    verbose!(
        config,
        "{}: {} bytes, {} matches in {:?}",
        source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<text>".to_string()),
        haystack.len(),
        positions.len(),
        started.elapsed()
    );

    drop(haystack);
    Searched {
        source,
        text,
        positions,
        trace,
    }
}

fn search_file(path: &Path, matcher: Option<&BoyerMoore>, config: &AppConfig) -> Result<Searched> {
    let text = input::load_file(path)?;
    Ok(search_one(
        Some(path.to_path_buf()),
        Text::File(text),
        matcher,
        config,
    ))
}

#[cfg(feature = "parallel")]
fn search_files(
    files: &[PathBuf],
    matcher: Option<&BoyerMoore>,
    config: &AppConfig,
) -> Result<Vec<Searched>> {
    use rayon::prelude::*;

    let threads = config.effective_threads().min(files.len().max(1));
    verbose!(config, "searching {} files on {} threads", files.len(), threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to start search threads")?;

    pool.install(|| {
        files
            .par_iter()
            .map(|path| search_file(path, matcher, config))
            .collect()
    })
}

#[cfg(not(feature = "parallel"))]
fn search_files(
    files: &[PathBuf],
    matcher: Option<&BoyerMoore>,
    config: &AppConfig,
) -> Result<Vec<Searched>> {
    verbose!(config, "searching {} files", files.len());
    files
        .iter()
        .map(|path| search_file(path, matcher, config))
        .collect()
}

fn to_report(result: Searched, pattern: &str, line_numbers: bool) -> SearchReport {
    let bytes = result.text.bytes();
    SearchReport {
        source: result.source.as_ref().map(|p| p.display().to_string()),
        pattern: pattern.to_string(),
        text_len: bytes.len(),
        line_columns: line_numbers.then(|| output::line_columns(bytes, &result.positions)),
        positions: result.positions,
        trace: result.trace,
    }
}
