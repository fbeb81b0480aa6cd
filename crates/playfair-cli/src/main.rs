//! Command-line interface for `playfair-core`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use playfair_core::{
    prepare_plaintext, CipherConfig, InputPolicy, PlayfairCipher, DEFAULT_EXCLUDED,
    DEFAULT_PADDING,
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Playfair cipher CLI.
#[derive(Parser)]
#[command(
    name = "playfair",
    version,
    author,
    about = "Encode and decode text with the Playfair digraph cipher"
)]
struct Cli {
    #[command(flatten)]
    table: TableArgs,
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableArgs {
    /// Letter left out of the 5x5 table.
    #[arg(long, value_name = "LETTER", default_value_t = DEFAULT_EXCLUDED, global = true)]
    excluded: char,
    /// Letter used to split doubled letters and pad odd-length text.
    #[arg(long, value_name = "LETTER", default_value_t = DEFAULT_PADDING, global = true)]
    padding: char,
    /// Drop characters the table cannot hold instead of failing on them.
    #[arg(long, default_value_t = false, global = true)]
    strip: bool,
}

impl TableArgs {
    fn config(&self) -> CipherConfig {
        CipherConfig {
            excluded: self.excluded,
            padding: self.padding,
            policy: if self.strip {
                InputPolicy::Strip
            } else {
                InputPolicy::Reject
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode plaintext.
    Encode {
        /// Keyword the table is derived from.
        #[arg(short, long)]
        keyword: String,
        /// Text to encode.
        text: String,
    },
    /// Decode ciphertext (padding letters are left in place).
    Decode {
        /// Keyword the table is derived from.
        #[arg(short, long)]
        keyword: String,
        /// Text to decode; must have an even number of letters.
        text: String,
    },
    /// Print the normalised keyword and the table it produces.
    Table {
        /// Keyword the table is derived from.
        #[arg(short, long)]
        keyword: String,
    },
    /// Run a local demo: random keyword and plaintext, encode, decode back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of plaintext letters to generate.
        #[arg(long, default_value_t = 24)]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.table.config();
    match cli.command {
        Commands::Encode { keyword, text } => cmd_encode(config, &keyword, &text),
        Commands::Decode { keyword, text } => cmd_decode(config, &keyword, &text),
        Commands::Table { keyword } => cmd_table(config, &keyword),
        Commands::Demo { seed, length } => cmd_demo(config, seed, length),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_cipher(config: CipherConfig, keyword: &str) -> Result<PlayfairCipher> {
    let mut cipher = PlayfairCipher::with_config(config).context("configure cipher")?;
    cipher.set_keyword(keyword);
    if cipher.keyword().is_empty() && !keyword.is_empty() {
        log::warn!("keyword {keyword:?} has no usable letters; using the plain alphabet");
    }
    Ok(cipher)
}

fn cmd_encode(config: CipherConfig, keyword: &str, text: &str) -> Result<()> {
    let cipher = build_cipher(config, keyword)?;
    let encoded = cipher.encode(text).context("encode text")?;
    print!("{encoded}");
    Ok(())
}

fn cmd_decode(config: CipherConfig, keyword: &str, text: &str) -> Result<()> {
    let cipher = build_cipher(config, keyword)?;
    let decoded = cipher.decode(text).context("decode text")?;
    print!("{decoded}");
    Ok(())
}

fn cmd_table(config: CipherConfig, keyword: &str) -> Result<()> {
    let cipher = build_cipher(config, keyword)?;
    println!("keyword: {}", cipher.keyword());
    println!("{}", cipher.grid());
    Ok(())
}

fn cmd_demo(config: CipherConfig, seed: Option<u64>, length: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let probe = PlayfairCipher::with_config(config).context("configure cipher")?;
    let letters: Vec<char> = probe.alphabet().letters().collect();

    let keyword_len = rng.gen_range(4..=10);
    let keyword = random_letters(&mut rng, &letters, keyword_len);
    let plaintext = random_letters(&mut rng, &letters, length);

    let cipher = build_cipher(config, &keyword)?;
    let ciphertext = cipher.encode(&plaintext).context("encode demo plaintext")?;
    let decrypted = cipher.decode(&ciphertext).context("decode demo ciphertext")?;

    let plain_letters: Vec<char> = plaintext.chars().collect();
    let expected: String = prepare_plaintext(&plain_letters, config.padding_letter())
        .into_iter()
        .collect();

    println!("demo keyword: {}", cipher.keyword());
    println!("{}", cipher.grid());
    println!("plaintext: {plaintext}");
    println!("ciphertext: {ciphertext}");
    println!("decrypted: {decrypted}");
    if decrypted != expected {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn random_letters(rng: &mut impl RngCore, letters: &[char], len: usize) -> String {
    (0..len)
        .map(|_| letters[rng.gen_range(0..letters.len())])
        .collect()
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
