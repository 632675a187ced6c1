// src/main.rs
use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use elit_tokenizer::{
    Decoder, EnglishTokenizer, InputFormat, Result, Tokenizer, TokenizerConfig, TokenizerError,
    WhitespaceTokenizer,
};

const USAGE: &str = "usage: elit_tokenizer <filename> [--format raw|line] [--whitespace] \
                     [--disable kind,...] [--threads N] [--output FILE]";

struct Options {
    filename: String,
    format: InputFormat,
    whitespace: bool,
    config: TokenizerConfig,
    threads: Option<usize>,
    output: Option<String>,
}

enum Command {
    Run(Options),
    Help,
}

impl Options {
    fn parse(args: &[String]) -> Result<Command> {
        let mut filename = None;
        let mut format = InputFormat::default();
        let mut whitespace = false;
        let mut config = TokenizerConfig::default();
        let mut threads = None;
        let mut output = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--format" => format = value(&mut iter, arg)?.parse()?,
                "--whitespace" => whitespace = true,
                "--disable" => config.disable_list(value(&mut iter, arg)?)?,
                "--threads" => {
                    let n = value(&mut iter, arg)?;
                    let n = n
                        .parse::<usize>()
                        .map_err(|_| TokenizerError::Usage(format!("invalid thread count '{}'", n)))?;
                    threads = Some(n);
                }
                "--output" => output = Some(value(&mut iter, arg)?.to_string()),
                "-h" | "--help" => return Ok(Command::Help),
                flag if flag.starts_with("--") => {
                    return Err(TokenizerError::Usage(format!("unknown option '{}'\n{}", flag, USAGE)))
                }
                name if filename.is_none() => filename = Some(name.to_string()),
                extra => {
                    return Err(TokenizerError::Usage(format!("unexpected argument '{}'\n{}", extra, USAGE)))
                }
            }
        }

        let filename = filename.ok_or_else(|| TokenizerError::Usage(USAGE.to_string()))?;
        Ok(Command::Run(Options {
            filename,
            format,
            whitespace,
            config,
            threads,
            output,
        }))
    }
}

fn value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| TokenizerError::Usage(format!("'{}' needs a value\n{}", flag, USAGE)))
}

fn run(options: Options) -> Result<()> {
    if let Some(n) = options.threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }
    info!(threads = rayon::current_num_threads(), "thread pool ready");

    let init_start = Instant::now();
    let tokenizer: Box<dyn Tokenizer> = if options.whitespace {
        Box::new(WhitespaceTokenizer::new())
    } else {
        Box::new(EnglishTokenizer::with_config(options.config)?)
    };
    info!(elapsed = ?init_start.elapsed(), whitespace = options.whitespace, "tokenizer initialized");

    let decoder = Decoder::new(tokenizer, options.format);
    let reader = BufReader::new(File::open(&options.filename)?);
    let start = Instant::now();

    let documents = match &options.output {
        Some(path) => decoder.decode_to_writer(reader, BufWriter::new(File::create(path)?))?,
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let count = decoder.decode_to_writer(reader, &mut out)?;
            out.flush()?;
            count
        }
    };

    info!(
        file = %options.filename,
        format = %decoder.format(),
        documents,
        elapsed = ?start.elapsed(),
        "tokenization complete"
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = Options::parse(&args).and_then(|command| match command {
        Command::Run(options) => run(options),
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    });
    if let Err(e) = result {
        eprintln!("elit_tokenizer: {}", e);
        process::exit(1);
    }
}
