use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_MERGE_OUTPUT: &str = "merged_SBOM.json";

/// Export and merge CycloneDX SBOMs for every project in an organization
#[derive(Parser, Debug)]
#[command(name = "sbom-export")]
#[command(version)]
#[command(about = "Export and merge CycloneDX SBOMs for every project in an organization", long_about = None)]
pub struct Cli {
    /// Organization id (overrides SBOM_EXPORT_ORG_ID and the config file)
    #[arg(long, global = true)]
    pub org: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every project in the organization with its SBOM-support classification
    Projects,

    /// Fetch one project's SBOM into the current directory
    Fetch {
        /// Project identifier
        project_id: String,
    },

    /// Fetch every project's SBOM into a timestamped directory
    Export {
        /// Skip projects whose type has no SBOM support
        #[arg(long)]
        skip_unsupported: bool,
    },

    /// Merge every *.json SBOM in a directory into one aggregate document
    Merge {
        /// Directory containing the SBOM files
        dir: PathBuf,

        /// Output file for the merged document
        #[arg(short, long, default_value = DEFAULT_MERGE_OUTPUT)]
        output: PathBuf,
    },

    /// Classify, export and merge in one run
    Run {
        /// Skip projects whose type has no SBOM support
        #[arg(long)]
        skip_unsupported: bool,

        /// Output file for the merged document
        #[arg(short, long, default_value = DEFAULT_MERGE_OUTPUT)]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
