use std::path::PathBuf;

use clap::{Parser, Subcommand};
use codevariants::ValidationMode;
use codevariants_registry::ExampleRef;

#[derive(Parser, Debug)]
#[command(name = "codevariants")]
#[command(about = "Check and inspect per-environment component examples")]
#[command(version = codevariants::version())]
/// Command-line arguments.
pub struct Cli {
    /// Directory of component tables, one JSON file per component
    /// [env: CODEVARIANTS_CONTENT_DIR]
    #[arg(long, short = 'c', global = true, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Coverage policy: strict or lenient [env: CODEVARIANTS_MODE]
    #[arg(long, short = 'm', global = true)]
    pub mode: Option<ValidationMode>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate all content and fail on any problem (release gate)
    Check,
    /// List components, or the scenarios of one component
    List {
        /// Component whose scenarios to list
        component: Option<String>,
    },
    /// Print the bodies of one scenario
    Show {
        /// `component/scenario[:environment]`, e.g. `Backdrop/default:react`
        reference: ExampleRef,
    },
    /// Write the published registry as JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Map example file names to component scenarios
    Resolve {
        /// File names such as `button-group-with-segmented-buttons.tsx`
        #[arg(required = true)]
        file_names: Vec<String>,
    },
}
