use clap::{Parser, Subcommand, ValueEnum};
use intentscout_core::Provider;
use intentscout_pipeline::EncoderKind;

#[derive(Parser)]
#[command(name = "intentscout")]
#[command(version)]
#[command(about = "Find gaps in a customer-support intent taxonomy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cluster messages and ask the reasoning model to judge each cluster
    Run(RunArgs),

    /// Summarize an existing report
    Report {
        /// Path to a report written by `run`
        path: String,
    },

    /// Print version information
    Version,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Input JSON with customer messages
    #[arg(short, long, default_value = "inputs_for_assignment.json")]
    pub input: String,

    /// Where to write the report
    #[arg(short, long, default_value = "final_report.json")]
    pub output: String,

    /// Number of clusters
    #[arg(short = 'k', long, default_value_t = 10)]
    pub clusters: usize,

    /// Sample messages sent per cluster
    #[arg(short = 'm', long, default_value_t = 5)]
    pub sample_size: usize,

    /// Minimum pause between reasoning calls, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub interval_ms: u64,

    /// Partitioning seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// File holding the current intent map (built-in map if omitted)
    #[arg(short, long)]
    pub taxonomy: Option<String>,

    /// Reasoning provider
    #[arg(short, long, value_enum, default_value_t = ProviderArg::Gemini)]
    pub provider: ProviderArg,

    /// Model name (provider default if omitted)
    #[arg(long)]
    pub model: Option<String>,

    /// Embedding backend
    #[arg(short, long, value_enum, default_value_t = EncoderArg::Fastembed)]
    pub encoder: EncoderArg,

    /// Top-level key holding the message records
    #[arg(long, default_value = "customer_messages")]
    pub records_key: String,

    /// Per-record key holding the message text
    #[arg(long, default_value = "current_human_message")]
    pub text_field: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Gemini,
    Anthropic,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Gemini => Provider::Gemini,
            ProviderArg::Anthropic => Provider::Anthropic,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncoderArg {
    /// all-MiniLM-L6-v2, downloaded on first use
    #[value(alias = "minilm")]
    Fastembed,
    /// Offline feature hashing
    Hashing,
}

impl From<EncoderArg> for EncoderKind {
    fn from(arg: EncoderArg) -> Self {
        match arg {
            EncoderArg::Fastembed => EncoderKind::FastEmbed,
            EncoderArg::Hashing => EncoderKind::Hashing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["intentscout", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_run_defaults() {
        let cli = Cli::try_parse_from(["intentscout", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.input, "inputs_for_assignment.json");
        assert_eq!(args.output, "final_report.json");
        assert_eq!(args.clusters, 10);
        assert_eq!(args.sample_size, 5);
        assert_eq!(args.interval_ms, 2000);
        assert_eq!(args.seed, 42);
        assert_eq!(args.provider, ProviderArg::Gemini);
        assert_eq!(args.encoder, EncoderArg::Fastembed);
    }

    #[test]
    fn test_cli_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "intentscout",
            "run",
            "--input",
            "logs.json",
            "-k",
            "4",
            "--provider",
            "anthropic",
            "--encoder",
            "hashing",
        ])
        .unwrap();
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.input, "logs.json");
            assert_eq!(args.clusters, 4);
            assert_eq!(args.provider, ProviderArg::Anthropic);
            assert_eq!(args.encoder, EncoderArg::Hashing);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_provider_and_encoder() {
        assert!(Cli::try_parse_from(["intentscout", "run", "--provider", "llama"]).is_err());
        assert!(Cli::try_parse_from(["intentscout", "run", "--encoder", "bert"]).is_err());
    }

    #[test]
    fn test_cli_encoder_alias() {
        let cli = Cli::try_parse_from(["intentscout", "run", "-e", "minilm"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(EncoderKind::from(args.encoder), EncoderKind::FastEmbed);
    }

    #[test]
    fn test_cli_parse_report() {
        let cli = Cli::try_parse_from(["intentscout", "report", "final_report.json"]).unwrap();
        if let Commands::Report { path } = cli.command {
            assert_eq!(path, "final_report.json");
        } else {
            panic!("Expected Report command");
        }
    }
}
