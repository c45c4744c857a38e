//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod auth;
pub mod config_cmd;
pub mod frontdesk;
pub mod guests;
pub mod payments;
pub mod reservations;
pub mod rooms;
pub mod stats;
pub mod users;
pub mod util;

use innkeep_api::ApiClient;

use crate::cli::{Command, GlobalOpts};
use crate::config::ActiveProfile;
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &ApiClient,
    active: &ActiveProfile,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(client, args, active, global).await,
        Command::Logout => auth::logout(client, global),
        Command::Whoami => auth::whoami(client, active, global),
        Command::Register(args) => auth::register(client, args, global).await,
        Command::Rooms(args) => rooms::handle(client, args, global).await,
        Command::Reservations(args) => reservations::handle(client, args, global).await,
        Command::Frontdesk(args) => frontdesk::handle(client, args, global).await,
        Command::Guests(args) => guests::handle(client, args, global).await,
        Command::Users(args) => users::handle(client, args, global).await,
        Command::Stats(args) => stats::handle(client, args, global).await,
        Command::Payments(args) => payments::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
