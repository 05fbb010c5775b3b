use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};

/// Upper bound on identifiers produced by a single invocation.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `cuid2` binary.
///
/// Every tunable can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cuid2",
    version,
    about = "Generate and validate CUID2-style identifiers"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print freshly generated identifiers, one per line.
    Generate {
        /// Number of identifiers to generate.
        ///
        /// Environment variable: `CUID2_COUNT`
        #[arg(short = 'n', long, env = "CUID2_COUNT", default_value_t = 1)]
        count: usize,

        /// Number of threads to spread generation across.
        ///
        /// Values above `count` are clamped.
        ///
        /// Environment variable: `CUID2_THREADS`
        #[arg(short, long, env = "CUID2_THREADS", default_value_t = 1)]
        threads: usize,

        /// Source of random bytes.
        ///
        /// Environment variable: `CUID2_RNG`
        #[arg(long, value_enum, env = "CUID2_RNG", default_value_t = RngKind::Os)]
        rng: RngKind,
    },

    /// Check candidates, printing `<id>\tvalid|invalid` for each.
    ///
    /// Exits with status 1 if any candidate is invalid.
    Validate {
        /// Suppress output; only the exit status reports the result.
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Candidate identifiers.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Which random source backs generation.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngKind {
    /// The operating system CSPRNG, read on every identifier.
    Os,
    /// The thread-local ChaCha CSPRNG from `rand`.
    Thread,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub count: usize,
    pub threads: usize,
    pub rng: RngKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateConfig {
    pub quiet: bool,
    pub ids: Vec<String>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliConfig {
    Generate(GenerateConfig),
    Validate(ValidateConfig),
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match args.command {
            Command::Generate {
                count,
                threads,
                rng,
            } => {
                if count == 0 {
                    bail!("CUID2_COUNT must be greater than 0");
                }
                if count > MAX_COUNT {
                    bail!("CUID2_COUNT ({count}) exceeds the maximum of {MAX_COUNT}");
                }
                if threads == 0 {
                    bail!("CUID2_THREADS must be greater than 0");
                }

                Ok(Self::Generate(GenerateConfig {
                    count,
                    threads: threads.min(count),
                    rng,
                }))
            }
            Command::Validate { quiet, ids } => Ok(Self::Validate(ValidateConfig { quiet, ids })),
        }
    }
}
