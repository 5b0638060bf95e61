//! Command-line decryptor for the shuffle-block cipher.
//!
//! Usage: `sbdecrypt <password> <ciphertext-file> <plaintext-file>`
//!
//! There is no authentication tag: a wrong password silently produces
//! garbage output with a garbage length.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use sbcrypt::SbCrypt;

/// Decrypts a file produced by sbencrypt.
#[derive(Parser)]
#[command(name = "sbdecrypt", version)]
struct Cli {
    /// Password used when the file was encrypted.
    password: String,
    /// Ciphertext input file.
    input: PathBuf,
    /// Plaintext output file (created or truncated).
    output: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        println!("{:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::try_parse()?;

    let infile = File::open(&cli.input)
        .with_context(|| format!("cannot open input file {}", cli.input.display()))?;
    let outfile = File::create(&cli.output)
        .with_context(|| format!("cannot open output file {}", cli.output.display()))?;

    let mut reader = BufReader::new(infile);
    let mut writer = BufWriter::new(outfile);
    SbCrypt::new(&cli.password).decrypt_stream(&mut reader, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("cannot finish writing {}", cli.output.display()))?;
    Ok(())
}
