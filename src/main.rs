use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

use aozora_rubifier::{config::RubifierConfig, rubifier::Rubifier};

struct Args {
    inputs: Vec<String>,
    output_path: Option<String>,
    config_path: Option<String>,
    shift_jis: bool,
    tokens: bool,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("o", "output", "output directory", "DIR");
    opts.optopt("c", "config", "config file (JSON)", "FILE");
    opts.optflag("", "sjis", "decode input as Shift_JIS");
    opts.optflag("", "tokens", "print tokens as JSON instead of HTML");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    Ok(Args {
        inputs: matches.free.clone(),
        output_path: matches.opt_str("o"),
        config_path: matches.opt_str("c"),
        shift_jis: matches.opt_present("sjis"),
        tokens: matches.opt_present("tokens"),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = get_args()?;

    let config = match &args.config_path {
        Some(path) => RubifierConfig::load(Path::new(path))?,
        None => RubifierConfig::default(),
    };
    let rubifier = Rubifier::new(config);

    if args.inputs.is_empty() {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        let source = decode(&bytes, args.shift_jis)?;

        let output = process(&rubifier, &source, args.tokens)?;
        io::stdout().write_all(output.as_bytes())?;
        return Ok(());
    }

    let output_root = match &args.output_path {
        Some(path) => {
            let root = PathBuf::from(path);
            fs::create_dir_all(&root)
                .with_context(|| format!("Failed to create output directory: {}", path))?;
            Some(root)
        }
        None => None,
    };

    let pb = create_progress_bar(args.inputs.len() as u64);
    for input in args.inputs.iter().progress_with(pb) {
        (|| {
            let input_path = PathBuf::from(input);
            ensure!(input_path.exists(), "File not found: {}", input_path.display());

            let bytes = fs::read(&input_path)?;
            let source = decode(&bytes, args.shift_jis)?;
            let output = process(&rubifier, &source, args.tokens)?;

            match &output_root {
                Some(root) => {
                    let file_stem = input_path
                        .file_stem()
                        .context("Input has no file name")?
                        .to_string_lossy();
                    let extension = if args.tokens { "json" } else { "html" };
                    fs::write(root.join(format!("{}.{}", file_stem, extension)), output)?;
                }
                None => io::stdout().write_all(output.as_bytes())?,
            }

            Ok(())
        })()
        .with_context(|| format!("Failed to process: {}", input))?;
    }

    Ok(())
}

fn decode(bytes: &[u8], shift_jis: bool) -> Result<String> {
    if shift_jis {
        // 青空文庫のテキストは Shift_JIS で配布されている
        let (txt, _, had_errors) = encoding_rs::SHIFT_JIS.decode(bytes);
        ensure!(!had_errors, "Invalid Shift_JIS sequence");
        Ok(txt.into_owned())
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not UTF-8")
    }
}

fn process(rubifier: &Rubifier, source: &str, tokens: bool) -> Result<String> {
    if tokens {
        Ok(serde_json::to_string_pretty(&rubifier.tokenize(source))?)
    } else {
        Ok(rubifier.convert(source))
    }
}

fn create_progress_bar(len: u64) -> ProgressBar {
    if len <= 1 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
