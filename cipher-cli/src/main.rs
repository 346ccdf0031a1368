#![deny(missing_docs)]
//! A command-line interface for the shift and digraph ciphers.

use cipher_core::{CipherConfig, Matrix, validate};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Shift cipher with a single key\ncipher-cli shift encrypt --message \"cifrul cezar\" --key1 3\n\n# Shift cipher over a keyed alphabet\ncipher-cli shift encrypt --message bruteforceattack --key1 3 --key2 cryptography\n\n# Digraph cipher\ncipher-cli playfair encrypt --message \"atac la zori\" --key criptografie\ncipher-cli playfair decrypt --message ĂRGRDÂOÂIP --key criptografie\n\n# Show the matrix for a key\ncipher-cli matrix --key criptografie"
)]
struct Cli {
    /// Path to a JSON configuration file. Built-in defaults are used if omitted.
    #[arg(long, global = true, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift (Caesar) cipher, optionally over a keyed alphabet
    Shift {
        #[command(subcommand)]
        command: ShiftCommands,
    },
    /// Playfair-style digraph cipher over a 5x6 matrix
    Playfair {
        #[command(subcommand)]
        command: PlayfairCommands,
    },
    /// Print the matrix built from a key
    Matrix {
        /// The key, at least 7 letters
        #[arg(short, long)]
        key: String,
    },
    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct ShiftArgs {
    /// The message; spaces are ignored and letters are uppercased
    #[arg(short, long)]
    message: String,

    /// Shift amount, an integer from 1 to 25
    #[arg(long, allow_negative_numbers = true)]
    key1: i64,

    /// Key that reorders the alphabet, at least 7 letters. "-" means none.
    #[arg(long)]
    key2: Option<String>,
}

#[derive(Subcommand)]
enum ShiftCommands {
    /// Encrypt a message
    Encrypt(ShiftArgs),
    /// Decrypt a message
    Decrypt(ShiftArgs),
}

#[derive(Args)]
struct PlayfairArgs {
    /// The message or ciphertext; spaces are ignored
    #[arg(short, long)]
    message: String,

    /// The key, at least 7 letters
    #[arg(short, long)]
    key: String,
}

#[derive(Subcommand)]
enum PlayfairCommands {
    /// Encrypt a message
    Encrypt(PlayfairArgs),
    /// Decrypt a ciphertext
    Decrypt(PlayfairArgs),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as JSON
    Show,
}

fn load_config(path: Option<&Path>) -> CipherConfig {
    path.map_or_else(CipherConfig::default, |path| {
        CipherConfig::load(path).unwrap_or_else(|e| {
            error!("Failed to load configuration '{}': {e}", path.display());
            std::process::exit(1);
        })
    })
}

fn run_shift(config: &CipherConfig, args: &ShiftArgs, encrypt: bool) -> cipher_core::Result<String> {
    let alphabet = &config.shift.alphabet;
    let message = validate::sanitize(&args.message);
    validate::validate_message(alphabet, &message)?;
    let key1 = validate::validate_shift(args.key1)?;

    let key2 = args
        .key2
        .as_deref()
        .map(validate::sanitize)
        .filter(|k| k != "-");
    if let Some(key2) = &key2 {
        validate::validate_key(alphabet, key2, config.min_key_length)?;
        info!("New alphabet: {}", alphabet.keyed(key2));
    }

    if encrypt {
        cipher_core::shift_encrypt(alphabet, &message, key1, key2.as_deref())
    } else {
        cipher_core::shift_decrypt(alphabet, &message, key1, key2.as_deref())
    }
}

fn run_playfair(
    config: &CipherConfig,
    args: &PlayfairArgs,
    encrypt: bool,
) -> cipher_core::Result<String> {
    validate::validate_digraph_key(config, &args.key)?;
    if encrypt {
        validate::validate_plaintext(&config.digraph, &args.message)?;
        cipher_core::digraph_encrypt(config, &args.message, &args.key)
    } else {
        validate::validate_ciphertext(&config.digraph, &args.message)?;
        cipher_core::digraph_decrypt(config, &args.message, &args.key)
    }
}

fn report(result: cipher_core::Result<String>) {
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match &cli.command {
        Commands::Shift { command } => match command {
            ShiftCommands::Encrypt(args) => report(run_shift(&config, args, true)),
            ShiftCommands::Decrypt(args) => report(run_shift(&config, args, false)),
        },
        Commands::Playfair { command } => match command {
            PlayfairCommands::Encrypt(args) => report(run_playfair(&config, args, true)),
            PlayfairCommands::Decrypt(args) => report(run_playfair(&config, args, false)),
        },
        Commands::Matrix { key } => {
            let matrix = validate::validate_digraph_key(&config, key)
                .and_then(|()| Matrix::build(&config.digraph, key));
            match matrix {
                Ok(matrix) => println!("{matrix}"),
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let json = serde_json::to_string_pretty(&config).unwrap_or_else(|e| {
                    error!("Failed to serialize configuration: {e}");
                    std::process::exit(1);
                });
                println!("{json}");
            }
        },
    }
}
