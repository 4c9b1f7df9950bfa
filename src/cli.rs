//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::filter::Filter;

/// Show your ClickUp tasks as a sorted table, from a local cache of the
/// team → space → folder → list hierarchy.
///
/// Repeating a filter option shows tasks matching any of its values; different
/// options must all match. Names compare case-insensitively.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "tasks", version)]
pub struct Cli {
    /// Refetch everything from ClickUp before displaying
    #[arg(long)]
    pub sync: bool,

    /// Only tasks from this team
    #[arg(short = 't', long = "team", value_name = "NAME")]
    pub teams: Vec<String>,

    /// Only tasks from this space
    #[arg(short = 's', long = "space", value_name = "NAME")]
    pub spaces: Vec<String>,

    /// Only tasks from this folder
    #[arg(short = 'f', long = "folder", value_name = "NAME")]
    pub folders: Vec<String>,

    /// Only tasks from this list
    #[arg(short = 'l', long = "list", value_name = "NAME")]
    pub lists: Vec<String>,

    /// Only tasks with this name
    #[arg(short = 'n', long = "task", value_name = "NAME")]
    pub tasks: Vec<String>,

    /// Use this config file instead of the default locations
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delete the local cache before doing anything else
    #[arg(long)]
    pub clear_cache: bool,

    /// Write a default config file to the user config directory and exit
    #[arg(long)]
    pub init_config: bool,

    /// Print progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn filter(&self) -> Filter {
        Filter {
            teams: self.teams.clone(),
            spaces: self.spaces.clone(),
            folders: self.folders.clone(),
            lists: self.lists.clone(),
            tasks: self.tasks.clone(),
        }
    }
}
