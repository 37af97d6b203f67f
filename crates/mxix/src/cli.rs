//! Clap derive structures for the `mxix` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// mxix -- content editor for the MX-IX site
#[derive(Debug, Parser)]
#[command(
    name = "mxix",
    version,
    about = "Edit MX-IX site content and statistics from the command line",
    long_about = "Edit the locations, services, and headline statistics shown on\n\
        the MX-IX site. Content is persisted per slot under the data directory;\n\
        mutations require an admin session (`mxix admin login`) or --password.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, env = "MXIX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding persisted content (overrides config)
    #[arg(long, env = "MXIX_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (defaults to the config's `defaults.output`)
    #[arg(long, short = 'o', env = "MXIX_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output (defaults to the config's `defaults.color`)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Admin password for this invocation (instead of a saved session)
    #[arg(long, env = "MXIX_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage exchange locations
    #[command(alias = "loc", alias = "l")]
    Locations(LocationsArgs),

    /// Manage the service catalog
    #[command(alias = "svc")]
    Services(ServicesArgs),

    /// View and edit statistics
    #[command(alias = "st")]
    Stats(StatsArgs),

    /// Admin session management
    Admin(AdminArgs),

    /// Restore all content to the built-in defaults
    Reset,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LOCATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LocationsArgs {
    #[command(subcommand)]
    pub command: LocationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// List locations
    #[command(alias = "ls")]
    List {
        /// Only locations in this region (e.g. "EUROPE")
        #[arg(long, short = 'r')]
        region: Option<String>,
    },

    /// Show location details
    #[command(alias = "get")]
    Show {
        /// Location ID (e.g. "ams")
        id: String,
    },

    /// List peering networks at a location
    Asns {
        /// Location ID
        id: String,

        /// Only ACTIVE networks
        #[arg(long)]
        active: bool,
    },

    /// List data-center sites at a location
    Sites {
        /// Location ID
        id: String,

        /// Only available sites
        #[arg(long)]
        available: bool,
    },

    /// Add a location from a JSON file
    #[command(alias = "create")]
    Add {
        /// JSON file with one location ("-" for stdin)
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Replace every location with this ID
    Update {
        /// Location ID to replace
        id: String,

        /// JSON file with the replacement location ("-" for stdin)
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Remove every location with this ID
    #[command(alias = "rm")]
    Remove {
        /// Location ID
        id: String,
    },

    /// Replace the whole collection from a JSON array
    Import {
        /// JSON file with an array of locations ("-" for stdin)
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ServicesArgs {
    #[command(subcommand)]
    pub command: ServicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List services
    #[command(alias = "ls")]
    List,

    /// Show service details
    #[command(alias = "get")]
    Show {
        /// Service ID
        id: String,
    },

    /// List the items offered under a service
    Items {
        /// Service ID
        id: String,
    },

    /// Add a service from a JSON file
    #[command(alias = "create")]
    Add {
        /// JSON file with one service ("-" for stdin)
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Replace every service with this ID
    Update {
        /// Service ID to replace
        id: String,

        /// JSON file with the replacement service ("-" for stdin)
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Remove every service with this ID
    #[command(alias = "rm")]
    Remove {
        /// Service ID
        id: String,
    },

    /// Replace the whole collection from a JSON array
    Import {
        /// JSON file with an array of services ("-" for stdin)
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  STATS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

/// Per-field flags that `--from-file` replaces wholesale.
const NETWORK_FIELDS: [&str; 4] = ["latency", "latency_unit", "active_nodes", "throughput"];
const FABRIC_FIELDS: [&str; 4] = [
    "total_capacity",
    "active_routes",
    "avg_latency",
    "global_coverage",
];

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Show the editable headline and fabric statistics
    Show,

    /// Update the headline network statistics
    SetNetwork {
        /// Global latency value
        #[arg(long)]
        latency: Option<f64>,

        /// Global latency unit (e.g. "ms")
        #[arg(long)]
        latency_unit: Option<String>,

        /// Active node count
        #[arg(long)]
        active_nodes: Option<u64>,

        /// Aggregate throughput in Tbps
        #[arg(long)]
        throughput: Option<u64>,

        /// Load the full value from a JSON file instead of individual flags
        #[arg(long, short = 'F', conflicts_with_all = NETWORK_FIELDS)]
        from_file: Option<PathBuf>,
    },

    /// Update the global fabric labels
    SetFabric {
        /// e.g. "5.2 Tbps"
        #[arg(long)]
        total_capacity: Option<String>,

        /// e.g. "10,000+"
        #[arg(long)]
        active_routes: Option<String>,

        /// e.g. "<5ms"
        #[arg(long)]
        avg_latency: Option<String>,

        /// e.g. "100%"
        #[arg(long)]
        global_coverage: Option<String>,

        /// Load the full value from a JSON file instead of individual flags
        #[arg(long, short = 'F', conflicts_with_all = FABRIC_FIELDS)]
        from_file: Option<PathBuf>,
    },

    /// Show the global statistics catalog
    Catalog {
        /// Only stats in this category
        #[arg(long, short = 'c', value_enum)]
        category: Option<StatCategoryArg>,

        /// Apply a simulated live refresh
        #[arg(long)]
        live: bool,
    },

    /// Show statistics projected onto one location
    City {
        /// Location ID (e.g. "ams")
        id: String,
    },

    /// Show the 24-hour traffic series (global, or for one location)
    Traffic {
        /// Location ID; omit for the whole fabric
        id: Option<String>,
    },

    /// Show the simulated real-time capacity feed
    Capacity {
        /// Refreshes to apply before printing
        #[arg(long, short = 't', default_value = "0")]
        ticks: u32,

        /// Delay between refreshes in milliseconds; each refresh is printed
        #[arg(long, default_value = "0")]
        interval_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatCategoryArg {
    Traffic,
    Network,
    Performance,
    Geographic,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADMIN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Open an admin session (prompts unless --password is given)
    Login,

    /// Close the admin session
    Logout,

    /// Show whether an admin session is open
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value
    Set {
        /// Config key (dot-separated path, e.g., "defaults.output")
        key: String,

        /// Value to set
        value: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
