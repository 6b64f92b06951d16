use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "content-api", version, about = "Property listings API with content balance auditing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default).
    Serve,
    /// Audit listing and story content once and exit non-zero if the mix is out of balance.
    Audit {
        /// JSON content bundle; defaults to CONTENT_DATA_PATH (env or .env), then the built-in seed content.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Print the audit as JSON instead of a summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["content-api"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_audit_flags() {
        let cli =
            Cli::try_parse_from(["content-api", "audit", "--data", "content.json", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Audit { data, json }) => {
                assert_eq!(data, Some(PathBuf::from("content.json")));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
