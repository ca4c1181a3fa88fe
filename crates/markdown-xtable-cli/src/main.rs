use anyhow::{Context, Result, bail};
use markdown_xtable_config::Config;
use markdown_xtable_engine::{TableOptions, dump, parse_str, render_html};
use std::{env, fs, path::PathBuf, process};

#[derive(Debug, Default)]
struct Args {
    tokens: bool,
    config: Option<PathBuf>,
    file: PathBuf,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut parsed = Args::default();
    let mut file = None;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--tokens" => parsed.tokens = true,
            "--config" => parsed.config = Some(PathBuf::from(rest.next()?)),
            flag if flag.starts_with("--") => return None,
            path if file.is_none() => file = Some(PathBuf::from(path)),
            _ => return None,
        }
    }
    parsed.file = file?;
    Some(parsed)
}

fn load_options(explicit: Option<&PathBuf>) -> Result<TableOptions> {
    let config = match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => config,
            None => bail!("config file '{}' not found", path.display()),
        },
        None => {
            let config_path = Config::config_path();
            log::debug!("Config path: {}", config_path.display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(config.table)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("markdown-xtable-cli", String::as_str);
    let Some(args) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} [--tokens] [--config PATH] <FILE>");
        process::exit(1);
    };

    let options = load_options(args.config.as_ref())?;
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;

    let doc = parse_str(&source, &options);
    for diagnostic in &doc.diagnostics {
        eprintln!("{diagnostic}");
    }

    if args.tokens {
        print!("{}", dump(&doc.tokens));
    } else {
        print!("{}", render_html(&doc.tokens));
    }
    Ok(())
}
