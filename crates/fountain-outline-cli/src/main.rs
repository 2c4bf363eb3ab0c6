use anyhow::{Context, Result, bail};
use fountain_outline_config::Config;
use fountain_outline_engine::{ParsedScript, parse_str};
use std::{env, path::PathBuf, process};

const USAGE: &str = "Usage: fountain-outline-cli <script.fountain> [--lines|--tokens|--regions] [--config <path>]";

/// Which view of the parse to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum View {
    /// `index category text` per line.
    #[default]
    Lines,
    /// `index tokenName` per line, as a highlighter sees it.
    Tokens,
    /// `kind start..end` per folding region.
    Regions,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    script: PathBuf,
    view: View,
    config: Option<PathBuf>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut script = None;
    let mut view = View::default();
    let mut config = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lines" => view = View::Lines,
            "--tokens" => view = View::Tokens,
            "--regions" => view = View::Regions,
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ if script.is_some() => bail!("more than one script given"),
            _ => script = Some(PathBuf::from(&arg)),
        }
    }

    Ok(Args {
        script: script.context("no script given")?,
        view,
        config,
    })
}

fn render(script: &ParsedScript, view: View) -> String {
    let mut out = String::new();
    match view {
        View::Lines => {
            for (line, category) in script.lines.iter().zip(&script.categories) {
                let category = format!("{category:?}");
                out.push_str(&format!("{:>4} {category:<18} {}\n", line.index, line.text));
            }
        }
        View::Tokens => {
            for classified in script.classified() {
                out.push_str(&format!("{} {}\n", classified.index, classified.category));
            }
        }
        View::Regions => {
            for region in &script.regions {
                out.push_str(&format!("{region}\n"));
            }
        }
    }
    out
}

fn run(args: Args) -> Result<String> {
    let config = Config::load_or_default(args.config.as_deref())?;
    log::debug!("parser options: {:?}", config.parser);

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;

    let script = parse_str(&text, &config.parser);
    log::info!(
        "{}: {} lines, {} regions",
        args.script.display(),
        script.line_count(),
        script.regions.len()
    );

    Ok(render(&script, args.view))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match run(args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            log::error!("{e:#}");
            process::exit(1);
        }
    }
}
