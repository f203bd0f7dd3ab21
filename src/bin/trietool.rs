use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use byteorder::{BigEndian, LittleEndian};
use clap::{Parser, Subcommand};
use dictrie::{TrieBlob, TrieCursor};
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "trietool", about = "Query a serialized dictionary trie")]
struct Args {
    /// File holding the serialized trie words
    file: PathBuf,

    /// Words are stored big-endian (default: little-endian)
    #[arg(long)]
    big_endian: bool,

    /// Word offset of the root node
    #[arg(long, default_value_t = 0)]
    offset: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up whole keys and print their values
    Query {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Feed a key one code point at a time and print every step
    Walk { key: String },
}

fn load(args: &Args) -> Result<TrieBlob, Box<dyn Error>> {
    let mut file = File::open(&args.file)?;
    let blob = if args.big_endian {
        TrieBlob::from_reader::<BigEndian, _>(&mut file)?
    } else {
        TrieBlob::from_reader::<LittleEndian, _>(&mut file)?
    };
    blob.check_offset(args.offset)?;
    info!(
        file = %args.file.display(),
        words = blob.len(),
        offset = args.offset,
        "loaded trie"
    );
    Ok(blob)
}

/// Prints one line per key. Returns false if any key was missing.
fn query(cursor: &mut TrieCursor<'_>, keys: &[String], out: &mut impl Write) -> io::Result<bool> {
    let mut all_found = true;
    for key in keys {
        cursor.reset();
        if cursor.contains_next_str(key) {
            writeln!(out, "{key}\t{}", cursor.value())?;
        } else {
            debug!(key = %key, "key not found");
            writeln!(out, "{key}\tnot found")?;
            all_found = false;
        }
    }
    Ok(all_found)
}

/// Prints the outcome of each code point. Returns false once the walk fails.
fn walk(cursor: &mut TrieCursor<'_>, key: &str, out: &mut impl Write) -> io::Result<bool> {
    for c in key.chars() {
        if !cursor.next_for_code_point(u32::from(c)) {
            writeln!(out, "{c}\tno match")?;
            return Ok(false);
        }
        if cursor.contains() {
            writeln!(out, "{c}\tmatch value={}", cursor.value())?;
        } else {
            writeln!(out, "{c}\tmatch")?;
        }
    }
    Ok(true)
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let blob = load(args)?;
    let mut cursor = blob.cursor(args.offset);
    let mut out = io::stdout().lock();
    let ok = match &args.command {
        Command::Query { keys } => query(&mut cursor, keys, &mut out)?,
        Command::Walk { key } => walk(&mut cursor, key, &mut out)?,
    };
    Ok(ok)
}

/// Warnings and errors only, unless `directives` names its own levels.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!(error = %err, "trietool failed");
            eprintln!("trietool: {err}");
            ExitCode::from(2)
        }
    }
}
