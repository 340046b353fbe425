use cipherchain::cli::{run_cipher, RunOptions};
use cipherchain::cipher::{CipherMode, CipherType};
use cipherchain::config::{PipelineConfig, DEFAULT_CHUNKS};
use cipherchain::CipherError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERCHAIN_VERSION");
const PROFILE: &str = env!("CIPHERCHAIN_PROFILE");
const GIT_HASH: &str = env!("CIPHERCHAIN_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherchain")]
#[command(about = "Encrypt/decrypt alphanumeric text using classical ciphers", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt the input text
    #[command(alias = "e")]
    Encrypt(CipherArgs),

    /// Decrypt the input text
    #[command(alias = "d")]
    Decrypt(CipherArgs),
}

#[derive(Args)]
struct CipherArgs {
    /// Read text to be processed from FILE (stdin if not supplied)
    #[arg(short = 'i', long = "infile", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write processed text to FILE (stdout if not supplied)
    #[arg(short = 'o', long = "outfile", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Cipher to apply, repeat for a chain: caesar, playfair or vigenere
    #[arg(short = 'c', long = "cipher", value_parser = parse_cipher)]
    ciphers: Vec<CipherType>,

    /// Key for each cipher, in the same order as --cipher
    #[arg(short = 'k', long = "key", allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Number of concurrent chunks for Caesar stages
    #[arg(long, default_value_t = DEFAULT_CHUNKS)]
    chunks: usize,

    /// Load the cipher chain from a JSON file instead of --cipher/--key
    #[arg(long, value_name = "FILE", conflicts_with_all = ["ciphers", "keys"])]
    config: Option<PathBuf>,
}

fn parse_cipher(s: &str) -> Result<CipherType, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn pipeline_config(args: &CipherArgs, mode: CipherMode) -> Result<PipelineConfig, CipherError> {
    if let Some(path) = &args.config {
        let mut config = PipelineConfig::from_file(path)?;
        config.mode = mode;
        return Ok(config);
    }

    // A lone cipher defaults to Caesar with the null key
    let mut ciphers = args.ciphers.clone();
    let mut keys = args.keys.clone();
    if ciphers.len() <= 1 && keys.len() <= 1 {
        if ciphers.is_empty() {
            ciphers.push(CipherType::Caesar);
        }
        if keys.is_empty() {
            keys.push(String::new());
        }
    }

    let mut config = PipelineConfig::from_pairs(&ciphers, &keys, mode)?;
    config.chunks = args.chunks;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("cipherchain {}", get_version());
        return ExitCode::SUCCESS;
    }

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let (args, mode) = match command {
        Commands::Encrypt(args) => (args, CipherMode::Encrypt),
        Commands::Decrypt(args) => (args, CipherMode::Decrypt),
    };

    let result = pipeline_config(&args, mode).and_then(|pipeline| {
        let options = RunOptions {
            input: args.input,
            output: args.output,
            pipeline,
        };
        run_cipher(&options)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
