use anyhow::Result;
use clap::{Parser, Subcommand};
use mend::commands::{check, repair, version_sync};
use mend::registry::DocumentType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mend")]
#[command(about = "Validation and repair for machine-managed markdown reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a managed document and list its structural issues
    Check {
        /// Path to the document
        path: PathBuf,

        /// Document type to validate against
        #[arg(short = 't', long, value_enum)]
        doc_type: DocumentType,

        /// Emit the issue list as JSON
        #[arg(long)]
        json: bool,

        /// Extra workspace paths to screen for credential files
        #[arg(long = "scan", num_args = 0..)]
        scan: Vec<String>,
    },

    /// Repair broken managed sections from a template document
    Repair {
        /// Path to the document
        path: PathBuf,

        /// Well-formed template of the same document type
        #[arg(short = 'T', long)]
        template: PathBuf,

        /// Document type to repair
        #[arg(short = 't', long, value_enum)]
        doc_type: DocumentType,

        /// Save the repaired document in place (default: print to stdout)
        #[arg(short, long)]
        write: bool,

        /// Emit the full repair result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check (and optionally fix) version mentions across release docs
    VersionSync {
        /// Canonical version string from the package manifest
        #[arg(short = 'p', long)]
        package_version: String,

        /// Path to the readme
        #[arg(long)]
        readme: PathBuf,

        /// Path to the changelog
        #[arg(long)]
        changelog: PathBuf,

        /// Path to the marketplace readme variant (badge-checked)
        #[arg(long)]
        ext_readme: Option<PathBuf>,

        /// Rewrite mismatched mentions in place
        #[arg(long)]
        fix: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            doc_type,
            json,
            scan,
        } => check::execute(path, doc_type, json, scan),
        Commands::Repair {
            path,
            template,
            doc_type,
            write,
            json,
        } => repair::execute(path, template, doc_type, write, json),
        Commands::VersionSync {
            package_version,
            readme,
            changelog,
            ext_readme,
            fix,
        } => version_sync::execute(package_version, readme, changelog, ext_readme, fix),
    }
}
