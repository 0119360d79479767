use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "wordbits-cmd")]
#[command(about = "Command-line utility for encoding and transforming bit vectors")]
#[command(version)]
struct Cli {
    /// Radix of the text encoding (2-36)
    #[arg(long, global = true, default_value_t = wordbits::text_format::DEFAULT_RADIX)]
    radix: u32,

    /// Increase log verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a vector from raw words and print its text encoding
    Encode {
        /// Length of the vector in bits
        #[arg(long)]
        len: String,

        /// Storage word, least significant first (decimal, 0x hex or 0b binary)
        #[arg(short, long)]
        word: Vec<String>,
    },

    /// Decode an encoded vector and print a JSON summary
    Decode {
        /// Encoded vector
        text: String,
    },

    /// Flip every bit of an encoded vector
    Not {
        /// Encoded vector
        text: String,
    },

    /// Shift an encoded vector toward higher bit indices
    Shift {
        /// Encoded vector
        text: String,

        /// Number of bit positions to shift by
        amount: usize,
    },

    /// Combine two encoded vectors word by word
    Combine {
        /// Bitwise operation to apply
        #[arg(value_enum)]
        op: commands::transform::BinaryOp,

        /// Left operand (receives the result)
        left: String,

        /// Right operand
        right: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Encode { len, word } => commands::encode::run(&len, &word, cli.radix),
        Commands::Decode { text } => commands::decode::run(&text, cli.radix),
        Commands::Not { text } => commands::transform::run_not(&text, cli.radix),
        Commands::Shift { text, amount } => {
            commands::transform::run_shift(&text, amount, cli.radix)
        }
        Commands::Combine { op, left, right } => {
            commands::transform::run_combine(op, &left, &right, cli.radix)
        }
    }
}
