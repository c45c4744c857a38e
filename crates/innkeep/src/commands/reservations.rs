//! Reservation command handlers.

use serde_json::{Map, Value, json};
use tabled::Tabled;

use innkeep_api::ApiClient;

use crate::cli::{GlobalOpts, ReservationsArgs, ReservationsCommand};
use crate::error::CliError;
use crate::output::{self, field, nested};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ReservationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Guest")]
    guest: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Check-out")]
    check_out: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Prefer the embedded object's display field, fall back to the raw id.
fn or_id(display: String, r: &Value, id_key: &str) -> String {
    if display.is_empty() {
        field(r, id_key)
    } else {
        display
    }
}

impl From<&Value> for ReservationRow {
    fn from(r: &Value) -> Self {
        Self {
            id: field(r, "id"),
            number: field(r, "reservationNumber"),
            guest: or_id(nested(r, "guest", "fullName"), r, "guestId"),
            room: or_id(nested(r, "room", "roomNumber"), r, "roomId"),
            check_in: field(r, "checkInDate"),
            check_out: field(r, "checkOutDate"),
            status: field(r, "status"),
            total: field(r, "totalAmount"),
        }
    }
}

fn print_reservations(list: &[Value], global: &GlobalOpts) {
    let out = output::render_list(&global.output, list, |r| ReservationRow::from(r), |r| {
        field(r, "id")
    });
    output::print_output(&out, global.quiet);
}

fn print_reservation(reservation: &Value, global: &GlobalOpts) {
    let out = output::render_single(&global.output, reservation, output::detail, |r| {
        field(r, "id")
    });
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    client: &ApiClient,
    args: ReservationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let reservations = client.reservations();

    match args.command {
        ReservationsCommand::List { status, guest } => {
            let list = match (status, guest) {
                (Some(s), _) => reservations.by_status(&s).await?,
                (None, Some(g)) => reservations.for_guest(g).await?,
                (None, None) => reservations.all().await?,
            };
            print_reservations(&list, global);
            Ok(())
        }

        ReservationsCommand::Mine => {
            util::require_login(client)?;
            let list = reservations.mine().await?;
            print_reservations(&list, global);
            Ok(())
        }

        ReservationsCommand::Get { id } => {
            let reservation = reservations.get(id).await?;
            print_reservation(&reservation, global);
            Ok(())
        }

        ReservationsCommand::Create {
            room,
            check_in,
            check_out,
            guests,
            guest_id,
            requests,
            from_file,
        } => {
            let body = if let Some(ref path) = from_file {
                util::read_json_file(path)?
            } else {
                if let (Some(a), Some(b)) = (check_in, check_out) {
                    if b <= a {
                        return Err(CliError::Validation {
                            field: "check_out".into(),
                            reason: "check-out must be after check-in".into(),
                        });
                    }
                }
                let mut body = Map::new();
                body.insert("roomId".into(), json!(room));
                body.insert("checkInDate".into(), json!(check_in));
                body.insert("checkOutDate".into(), json!(check_out));
                body.insert("numberOfGuests".into(), json!(guests));
                if let Some(guest_id) = guest_id {
                    body.insert("guestId".into(), json!(guest_id));
                }
                if let Some(requests) = requests {
                    body.insert("specialRequests".into(), json!(requests));
                }
                Value::Object(body)
            };

            let reservation = reservations.create(&body).await?;
            output::status(global, "Reservation created");
            print_reservation(&reservation, global);
            Ok(())
        }

        ReservationsCommand::Update { id, from_file } => {
            let body = util::read_json_file(&from_file)?;
            let reservation = reservations.update(id, &body).await?;
            output::status(global, &format!("Reservation {id} updated"));
            print_reservation(&reservation, global);
            Ok(())
        }

        ReservationsCommand::Cancel { id } => {
            if !util::confirm(&format!("Cancel reservation {id}?"), global.yes)? {
                return Ok(());
            }
            let result = reservations.cancel(id).await?;
            output::status(global, &format!("Reservation {id} cancelled"));
            print_reservation(&result, global);
            Ok(())
        }

        ReservationsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete reservation {id}? This removes the record."),
                global.yes,
            )? {
                return Ok(());
            }
            let envelope = reservations.delete(id).await?;
            util::report(envelope, "Reservation deleted", global)
        }
    }
}
