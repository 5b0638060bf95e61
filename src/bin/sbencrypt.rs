//! Command-line encryptor for the shuffle-block cipher.
//!
//! Usage: `sbencrypt <password> <plaintext-file> <ciphertext-file>`

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use sbcrypt::SbCrypt;

/// Encrypts a file with the shuffle-block chaining cipher.
#[derive(Parser)]
#[command(name = "sbencrypt", version)]
struct Cli {
    /// Password hashed into the keystream seed; never stored anywhere.
    password: String,
    /// Plaintext input file.
    input: PathBuf,
    /// Ciphertext output file (created or truncated).
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
    SbCrypt::new(&cli.password).encrypt_stream(&mut reader, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("cannot finish writing {}", cli.output.display()))?;
    Ok(())
}
