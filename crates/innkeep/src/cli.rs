//! Clap derive structures for the `innkeep` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use innkeep_api::{Role, Surface};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// innkeep -- run a hotel from the command line
#[derive(Debug, Parser)]
#[command(
    name = "innkeep",
    version,
    about = "Manage hotel rooms, reservations and guests from the command line",
    long_about = "A CLI for the innkeep hotel management REST API.\n\n\
        Speaks for either the staff back office (admin surface) or the public\n\
        booking site (guest surface). Sessions persist between invocations.",
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
    /// Server profile to use
    #[arg(long, short = 'p', env = "INNKEEP_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "INNKEEP_SERVER", global = true)]
    pub server: Option<String>,

    /// Front end to act as: admin or guest (overrides profile)
    #[arg(long, env = "INNKEEP_SURFACE", global = true)]
    pub surface: Option<Surface>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "INNKEEP_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "INNKEEP_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "INNKEEP_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Where to persist the session (overrides profile)
    #[arg(long, env = "INNKEEP_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
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

#[derive(Debug, Clone, ValueEnum)]
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
    /// Log in and persist the session
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Register a new guest account
    Register(RegisterArgs),

    /// Manage rooms
    #[command(alias = "r")]
    Rooms(RoomsArgs),

    /// Manage reservations
    #[command(alias = "res")]
    Reservations(ReservationsArgs),

    /// Check guests in and out
    #[command(alias = "fd")]
    Frontdesk(FrontdeskArgs),

    /// Look up guests
    #[command(alias = "g")]
    Guests(GuestsArgs),

    /// Manage staff accounts
    Users(UsersArgs),

    /// Occupancy and revenue statistics
    Stats(StatsArgs),

    /// Create and settle payments
    #[command(alias = "pay")]
    Payments(PaymentsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SESSION
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (admin) or email (guest); defaults to the profile identity
    pub identity: Option<String>,

    /// Role to log in as (guest surface defaults to GUEST)
    #[arg(long)]
    pub role: Option<Role>,

    /// Read the password from stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long, required_unless_present = "from_file")]
    pub name: Option<String>,

    /// Email address (also the login identity)
    #[arg(long, required_unless_present = "from_file")]
    pub email: Option<String>,

    /// National ID card number
    #[arg(long)]
    pub id_card: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Register from JSON file (overrides individual flags)
    #[arg(long, short = 'F', conflicts_with_all = &["name", "email", "id_card", "phone"])]
    pub from_file: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ROOMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms
    #[command(alias = "ls")]
    List {
        /// Only rooms of this type
        #[arg(long = "type", short = 't', conflicts_with = "active")]
        room_type: Option<String>,

        /// Only rooms marked active
        #[arg(long)]
        active: bool,
    },

    /// List rooms bookable between two dates
    Available {
        /// Check-in date (YYYY-MM-DD)
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        check_out: NaiveDate,
    },

    /// Show a room
    Get {
        /// Room ID
        id: i64,
    },

    /// Create a room
    Create {
        /// Room number
        #[arg(long, required_unless_present = "from_file")]
        number: Option<String>,

        /// Room type (e.g. STANDARD, DELUXE)
        #[arg(long = "type", required_unless_present = "from_file")]
        room_type: Option<String>,

        /// Nightly price
        #[arg(long, required_unless_present = "from_file")]
        price: Option<f64>,

        /// Maximum occupancy
        #[arg(long)]
        capacity: Option<u32>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Create from JSON file (overrides individual flags)
        #[arg(long, short = 'F', conflicts_with_all = &["number", "room_type", "price"])]
        from_file: Option<PathBuf>,
    },

    /// Update a room from a JSON payload
    Update {
        /// Room ID
        id: i64,

        /// Load full update payload from JSON file
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Delete a room
    Delete {
        /// Room ID
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RESERVATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReservationsArgs {
    #[command(subcommand)]
    pub command: ReservationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReservationsCommand {
    /// List reservations
    #[command(alias = "ls")]
    List {
        /// Only reservations in this status (e.g. PENDING, CHECKED_IN)
        #[arg(long, conflicts_with = "guest")]
        status: Option<String>,

        /// Only reservations of this guest ID
        #[arg(long)]
        guest: Option<i64>,
    },

    /// List the logged-in guest's reservations
    Mine,

    /// Show a reservation
    Get {
        /// Reservation ID
        id: i64,
    },

    /// Book a room
    Create {
        /// Room ID
        #[arg(long, required_unless_present = "from_file")]
        room: Option<i64>,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long, required_unless_present = "from_file")]
        check_in: Option<NaiveDate>,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long, required_unless_present = "from_file")]
        check_out: Option<NaiveDate>,

        /// Number of guests
        #[arg(long, default_value = "1")]
        guests: u32,

        /// Guest ID (staff booking on behalf of a guest)
        #[arg(long)]
        guest_id: Option<i64>,

        /// Special requests
        #[arg(long)]
        requests: Option<String>,

        /// Create from JSON file (overrides individual flags)
        #[arg(long, short = 'F', conflicts_with_all = &["room", "check_in", "check_out"])]
        from_file: Option<PathBuf>,
    },

    /// Update a reservation from a JSON payload
    Update {
        /// Reservation ID
        id: i64,

        /// Load full update payload from JSON file
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Cancel a reservation
    Cancel {
        /// Reservation ID
        id: i64,
    },

    /// Delete a reservation record
    Delete {
        /// Reservation ID
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FRONT DESK
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FrontdeskArgs {
    #[command(subcommand)]
    pub command: FrontdeskCommand,
}

#[derive(Debug, Subcommand)]
pub enum FrontdeskCommand {
    /// Check a reservation in
    #[command(name = "check-in", alias = "in")]
    CheckIn(StayArgs),

    /// Check a reservation out
    #[command(name = "check-out", alias = "out")]
    CheckOut(StayArgs),
}

#[derive(Debug, Args)]
pub struct StayArgs {
    /// Reservation ID
    pub reservation_id: i64,

    /// Extra details as JSON (defaults to an empty object)
    #[arg(long, short = 'F')]
    pub from_file: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GUESTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GuestsArgs {
    #[command(subcommand)]
    pub command: GuestsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GuestsCommand {
    /// List guests
    #[command(alias = "ls")]
    List,

    /// Show a guest
    Get {
        /// Guest ID
        id: i64,
    },

    /// Search guests by name, phone or ID card number
    #[command(group(
        clap::ArgGroup::new("by").required(true).args(["name", "phone", "id_card"])
    ))]
    Search {
        /// Name fragment
        #[arg(long)]
        name: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Exact ID card number
        #[arg(long)]
        id_card: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List staff accounts
    #[command(alias = "ls")]
    List,

    /// Create a staff account (prompts for the password)
    Create {
        /// Login name
        #[arg(long, required_unless_present = "from_file")]
        username: Option<String>,

        /// Role
        #[arg(long, required_unless_present = "from_file")]
        role: Option<Role>,

        /// Full name
        #[arg(long)]
        full_name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Create from JSON file (overrides individual flags)
        #[arg(long, short = 'F', conflicts_with_all = &["username", "role"])]
        from_file: Option<PathBuf>,
    },

    /// Update a staff account from a JSON payload
    Update {
        /// User ID
        id: i64,

        /// Load full update payload from JSON file
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Delete a staff account
    Delete {
        /// User ID
        id: i64,
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

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Today's check-ins, check-outs, revenue and occupancy
    Today,

    /// Reservations and revenue between two dates
    Range {
        /// First day (YYYY-MM-DD)
        start: NaiveDate,

        /// Last day (YYYY-MM-DD)
        end: NaiveDate,
    },

    /// Room counts per room type
    RoomTypes,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PAYMENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PaymentsArgs {
    #[command(subcommand)]
    pub command: PaymentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PaymentsCommand {
    /// Open a payment for a reservation
    Create {
        /// Reservation ID
        reservation_id: i64,

        /// Amount to charge
        amount: f64,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },

    /// Mark a transaction paid through a simulated provider callback
    Simulate {
        /// Transaction ID returned by `payments create`
        transaction_id: String,
    },
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
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config and session file locations
    Path,

    /// Set a value on the active profile
    Set {
        /// Profile key (e.g. "server", "surface", "identity")
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
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
