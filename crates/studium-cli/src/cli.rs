//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use studium_catalog::CatalogKind;

/// Studium - campus catalog browser
#[derive(Parser, Debug)]
#[command(name = "studium")]
#[command(about = "Browse courses, faculty, and scholarships", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Data directory with catalog fixture files (overrides config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse a catalog with free-text search and facet filters
    Browse {
        /// Which catalog to browse
        catalog: CatalogArg,
        /// Free-text search term (case-insensitive substring match)
        #[arg(short, long)]
        search: Option<String>,
        /// Facet restriction as NAME=VALUE (repeatable)
        #[arg(short, long = "facet", value_name = "NAME=VALUE")]
        facets: Vec<String>,
    },
    /// List each facet of a catalog with its selectable values
    Facets {
        /// Which catalog to inspect
        catalog: CatalogArg,
    },
    /// Show one catalog entry in full
    Show {
        /// Which catalog to read
        catalog: CatalogArg,
        /// Entry id
        id: u32,
    },
    /// List the available catalogs
    Catalogs,
}

/// Catalog kinds accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CatalogArg {
    /// Course offerings
    Courses,
    /// Faculty directory
    Faculty,
    /// Scholarship listings
    Scholarships,
}

impl From<CatalogArg> for CatalogKind {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Courses => CatalogKind::Courses,
            CatalogArg::Faculty => CatalogKind::Faculty,
            CatalogArg::Scholarships => CatalogKind::Scholarships,
        }
    }
}
