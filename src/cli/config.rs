use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use snowuid::{UidConfig, DEFAULT_EPOCH};

/// Command-line arguments for the `snowuid` binary.
///
/// Every option can also be set through the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snowuid",
    version,
    about = "Generate and inspect 16 character Snowflake-style uids"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate uids, one per line
    Gen(GenArgs),
    /// Decode a uid and print its fields
    Parse(ParseArgs),
}

/// Settings shared by every command. A uid can only be read back with the
/// epoch and layout it was generated with.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Custom epoch in Unix seconds.
    ///
    /// Environment variable: `SNOWUID_EPOCH`
    #[arg(long, env = "SNOWUID_EPOCH", default_value_t = DEFAULT_EPOCH, allow_negative_numbers = true)]
    pub epoch: i64,

    /// Static tag byte. Selects the tagged layout (1 byte tag, 2 byte counter).
    ///
    /// Environment variable: `SNOWUID_TAG`
    #[arg(long, env = "SNOWUID_TAG")]
    pub tag: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct GenArgs {
    /// Number of uids to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Counter starting point; the first uid carries `counter + 1`.
    ///
    /// Environment variable: `SNOWUID_COUNTER`
    #[arg(long, env = "SNOWUID_COUNTER", default_value_t = 0)]
    pub counter: u32,

    #[command(flatten)]
    pub context: ContextArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// The 16 character uid to decode
    pub uid: String,

    #[command(flatten)]
    pub context: ContextArgs,
}

impl ContextArgs {
    fn config(&self, counter: u32) -> UidConfig {
        let builder = UidConfig::builder().epoch(self.epoch).counter(counter);
        match self.tag {
            Some(tag) => builder.tag(tag).build(),
            None => builder.build(),
        }
    }
}

impl TryFrom<&GenArgs> for UidConfig {
    type Error = anyhow::Error;

    fn try_from(args: &GenArgs) -> Result<Self, Self::Error> {
        let now = chrono::Utc::now().timestamp();
        if args.context.epoch > now {
            bail!(
                "SNOWUID_EPOCH ({}) is in the future (now = {})",
                args.context.epoch,
                now
            );
        }
        if now - args.context.epoch > i64::from(u32::MAX) {
            bail!(
                "SNOWUID_EPOCH ({}) is too far in the past for a 32-bit timestamp",
                args.context.epoch
            );
        }
        Ok(args.context.config(args.counter))
    }
}

impl From<&ParseArgs> for UidConfig {
    fn from(args: &ParseArgs) -> Self {
        args.context.config(0)
    }
}
