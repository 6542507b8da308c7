use std::{io::Write, str::FromStr};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use randstr::{random_str, salt, Charset, DEFAULT_LENGTH, DEFAULT_SALT_LENGTH};

/// Print random passwords or salts drawn from the OS secure random source.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct RandstrArgs {
    /// Number of characters [default: 12, or 8 with --salt]
    length: Option<usize>,

    /// Character set: default, alphanumeric or shellsafe.
    #[arg(short, long, default_value_t = Charset::Default.name().to_string())]
    charset: String,

    /// Print an alphanumeric salt instead of a password.
    #[arg(short, long, conflicts_with = "charset")]
    salt: bool,

    /// How many values to print, one per line.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

fn init_logger() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Warn);

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                chrono::Local::now().format("%T%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Entry point of program.
fn main() -> Result<()> {
    init_logger();
    let args = RandstrArgs::parse();

    if !args.salt && args.charset.parse::<Charset>().is_err() {
        log::warn!("unknown charset '{}', using default", args.charset);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        let value = if args.salt {
            salt(args.length.unwrap_or(DEFAULT_SALT_LENGTH))?
        } else {
            random_str(args.length.unwrap_or(DEFAULT_LENGTH), &args.charset)?
        };
        writeln!(out, "{}", value)?;
    }

    Ok(())
}
