//! Front desk command handlers.

use innkeep_api::ApiClient;

use crate::cli::{FrontdeskArgs, FrontdeskCommand, GlobalOpts, StayArgs};
use crate::error::CliError;

use super::util;

pub async fn handle(
    client: &ApiClient,
    args: FrontdeskArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::require_login(client)?;
    let desk = client.front_desk();

    match args.command {
        FrontdeskCommand::CheckIn(StayArgs {
            reservation_id,
            from_file,
        }) => {
            let details = from_file.as_deref().map(util::read_json_file).transpose()?;
            let envelope = desk.check_in(reservation_id, details.as_ref()).await?;
            util::report(
                envelope,
                &format!("Reservation {reservation_id} checked in"),
                global,
            )
        }

        FrontdeskCommand::CheckOut(StayArgs {
            reservation_id,
            from_file,
        }) => {
            let details = from_file.as_deref().map(util::read_json_file).transpose()?;
            let envelope = desk.check_out(reservation_id, details.as_ref()).await?;
            util::report(
                envelope,
                &format!("Reservation {reservation_id} checked out"),
                global,
            )
        }
    }
}
