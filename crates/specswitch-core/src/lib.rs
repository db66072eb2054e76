pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod mapper;
pub mod opener;

pub use command::{
    activate, deactivate, Command, CommandRegistry, Outcome, Plan, Registration, Resolution,
    SkipReason, SwitchToSpec, SWITCH_TO_SPEC,
};
pub use config::{Config, ConfigOverrides, Convention, PrefixMatch, CONFIG_FILE};
pub use error::{Result, SwitchError};
pub use host::{normalize_path, Host, HostError, Workspace};
pub use mapper::{alternate_path, locate_test_folder};
pub use opener::{ensure_and_open, ensure_exists};
