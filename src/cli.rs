use clap::Parser;
use specswitch_core::{ConfigOverrides, PrefixMatch};
use std::path::PathBuf;

/// Jump between a source file and its spec file, creating the spec if missing
#[derive(Parser, Debug)]
#[command(name = "specswitch", version)]
pub struct Cli {
    /// File currently open in the editor
    #[arg(env = "SPECSWITCH_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Workspace folder (repeatable). Default: nearest ancestor holding `.git`,
    /// else the current directory
    #[arg(long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Test folder candidate, in priority order (repeatable)
    #[arg(long = "test-folder", value_name = "NAME")]
    pub test_folders: Vec<String>,

    /// Source extension without the dot (repeatable)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Treat any directory whose name starts with the test folder name as a test directory
    #[arg(long)]
    pub raw_prefix: bool,

    /// Program that displays the file; receives the path as its last argument.
    /// Without it the path is printed on stdout
    #[arg(long, env = "SPECSWITCH_OPEN_WITH", value_name = "PROGRAM")]
    pub open_with: Option<String>,

    /// Print the alternate path without creating or opening anything
    #[arg(long)]
    pub print_only: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            test_folders: self.test_folders.clone(),
            extensions: self.extensions.clone(),
            prefix_match: self.raw_prefix.then_some(PrefixMatch::Raw),
        }
    }
}
