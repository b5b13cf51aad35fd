use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

mod error;
mod logging;

use error::CliError;

#[derive(Parser)]
#[command(name = "fernet", about = "Mint and open Fernet tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh secret key and print it
    GenerateKey,
    /// Encrypt a message into a token
    Encrypt {
        /// Base64url secret key
        #[arg(short, long, env = "FERNET_KEY", hide_env_values = true)]
        key: String,
        /// Read the message from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Decrypt a token back into the original message
    Decrypt {
        /// Base64url secret key
        #[arg(short, long, env = "FERNET_KEY", hide_env_values = true)]
        key: String,
        /// Reject tokens older than this many seconds
        #[arg(long)]
        ttl: Option<u64>,
        /// Read the token from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    // Initialize logging
    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        logging::init_json();
    } else {
        logging::init();
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::GenerateKey => {
            println!("{}", fernet::generate_secret());
            Ok(())
        }
        Command::Encrypt { key, input } => {
            let fernet = fernet::Fernet::new(&key)?;
            let message = read_input(input.as_deref())?;
            tracing::debug!(bytes = message.len(), "encrypting message");
            println!("{}", fernet.encrypt(&message));
            Ok(())
        }
        Command::Decrypt { key, ttl, input } => {
            let fernet = fernet::Fernet::new(&key)?;
            let raw = read_input(input.as_deref())?;
            let token = std::str::from_utf8(&raw).map_err(|_| CliError::TokenNotText)?;
            let token = token.trim_end();

            let message = match ttl {
                Some(ttl) => fernet.decrypt_with_ttl(token, ttl)?,
                None => fernet.decrypt(token)?,
            };
            tracing::debug!(bytes = message.len(), "token opened");
            std::io::stdout().write_all(&message)?;
            Ok(())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
