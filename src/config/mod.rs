use clap::{Parser, Subcommand};

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "hero-cli")]
#[command(about = "A CLI for browsing and editing a remote hero collection")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000/heroes")]
    pub base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every hero in the collection
    List,
    /// Fetch a single hero by id
    Get { id: u64 },
    /// Create a hero with the given name
    Add { name: String },
    /// Rename an existing hero
    Update { id: u64, name: String },
    /// Delete a hero by id
    Delete { id: u64 },
    /// Search heroes by name
    Search { term: String },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}
