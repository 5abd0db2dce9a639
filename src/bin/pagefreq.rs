/// Word and phrase frequency audit for a list of URLs.
///
/// Usage:
///   pagefreq [--url <URL>]... [--top K] [--json] [FILE|-]...
///
/// URL lists are read one URL per line from each FILE, or from stdin when no
/// FILE and no --url is given. Blank lines are skipped. Each URL is fetched,
/// analyzed and printed before the next one is fetched.
///
/// Output (stdout): one text section per URL, or one JSON object per line with --json.
/// Exit status: 0 when every URL was analyzed, 1 when any failed, 2 on unreadable input.
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use pagefreq::{
    analyze_batch, render_failure, render_json, render_json_failure, render_text, Config,
    HttpFetcher, PagefreqError,
};

#[derive(Parser, Debug)]
#[command(name = "pagefreq")]
#[command(about = "Count words by page region and top phrases for a list of URLs")]
struct Args {
    /// Files containing one URL per line ("-" for stdin)
    #[arg()]
    inputs: Vec<PathBuf>,

    /// URL to analyze; may be repeated. Processed before file input.
    #[arg(short = 'u', long = "url")]
    urls: Vec<String>,

    /// Entries shown per category and phrase list
    #[arg(
        short = 't',
        long = "top",
        default_value_t = 10,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top: usize,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Emit one JSON object per URL instead of text sections
    #[arg(long = "json")]
    json: bool,

    /// Log fetch and analysis details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("pagefreq=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging(_verbose: bool) {}

/// Concatenate the URL block from --url values and input files.
fn read_url_block(args: &Args) -> Result<String, PagefreqError> {
    let mut block = args.urls.join("\n");
    let read_stdin = args.inputs.is_empty() && args.urls.is_empty();

    let mut push = |text: &str| {
        if !block.is_empty() {
            block.push('\n');
        }
        block.push_str(text);
    };

    if read_stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        push(&buf);
    }
    for path in &args.inputs {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            push(&buf);
        } else {
            let text = fs::read_to_string(path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot read {}: {e}", path.display()))
            })?;
            push(&text);
        }
    }
    Ok(block)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let block = match read_url_block(&args) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut config = Config::default()
        .with_top_k(args.top)
        .with_timeout(Duration::from_secs(args.timeout));
    if let Some(ua) = &args.user_agent {
        config = config.with_user_agent(ua.as_str());
    }

    let fetcher = match HttpFetcher::new(&config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut ok = 0usize;
    let mut failed = 0usize;

    for analysis in analyze_batch(&fetcher, &block) {
        let line = match &analysis.result {
            Ok(report) => {
                ok += 1;
                if args.json {
                    render_json(report, config.top_k)
                } else {
                    Ok(render_text(report, config.top_k))
                }
            }
            Err(err) => {
                failed += 1;
                if args.json {
                    render_json_failure(&analysis.url, err)
                } else {
                    Ok(render_failure(&analysis.url, err))
                }
            }
        };
        match line {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("error: cannot encode result for {}: {e}", analysis.url);
                return ExitCode::from(2);
            }
        }
    }

    if !args.json {
        eprintln!("Done: {ok} ok, {failed} errors  (total {})", ok + failed);
    }

    if failed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
