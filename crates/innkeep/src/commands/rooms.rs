//! Room command handlers.

use serde_json::{Map, Value, json};
use tabled::Tabled;

use innkeep_api::ApiClient;

use crate::cli::{GlobalOpts, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output::{self, field};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct RoomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Type")]
    room_type: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Value> for RoomRow {
    fn from(r: &Value) -> Self {
        Self {
            id: field(r, "id"),
            number: field(r, "roomNumber"),
            room_type: field(r, "roomType"),
            price: field(r, "price"),
            capacity: field(r, "capacity"),
            status: field(r, "status"),
        }
    }
}

fn print_rooms(rooms: &[Value], global: &GlobalOpts) {
    let out = output::render_list(&global.output, rooms, |r| RoomRow::from(r), |r| field(r, "id"));
    output::print_output(&out, global.quiet);
}

fn print_room(room: &Value, global: &GlobalOpts) {
    let out = output::render_single(&global.output, room, output::detail, |r| field(r, "id"));
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ApiClient,
    args: RoomsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let rooms = client.rooms();

    match args.command {
        RoomsCommand::List { room_type, active } => {
            let list = match (room_type, active) {
                (Some(t), _) => rooms.by_type(&t).await?,
                (None, true) => rooms.active().await?,
                (None, false) => rooms.all().await?,
            };
            print_rooms(&list, global);
            Ok(())
        }

        RoomsCommand::Available {
            check_in,
            check_out,
        } => {
            if check_out <= check_in {
                return Err(CliError::Validation {
                    field: "check_out".into(),
                    reason: "check-out must be after check-in".into(),
                });
            }
            let list = rooms.available(check_in, check_out).await?;
            print_rooms(&list, global);
            Ok(())
        }

        RoomsCommand::Get { id } => {
            let room = rooms.get(id).await?;
            print_room(&room, global);
            Ok(())
        }

        RoomsCommand::Create {
            number,
            room_type,
            price,
            capacity,
            description,
            from_file,
        } => {
            let body = if let Some(ref path) = from_file {
                util::read_json_file(path)?
            } else {
                let mut body = Map::new();
                body.insert("roomNumber".into(), json!(number));
                body.insert("roomType".into(), json!(room_type));
                body.insert("price".into(), json!(price));
                if let Some(capacity) = capacity {
                    body.insert("capacity".into(), json!(capacity));
                }
                if let Some(description) = description {
                    body.insert("description".into(), json!(description));
                }
                Value::Object(body)
            };

            let room = rooms.create(&body).await?;
            output::status(global, "Room created");
            print_room(&room, global);
            Ok(())
        }

        RoomsCommand::Update { id, from_file } => {
            let body = util::read_json_file(&from_file)?;
            let room = rooms.update(id, &body).await?;
            output::status(global, &format!("Room {id} updated"));
            print_room(&room, global);
            Ok(())
        }

        RoomsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete room {id}?"), global.yes)? {
                return Ok(());
            }
            let envelope = rooms.delete(id).await?;
            util::report(envelope, "Room deleted", global)
        }
    }
}
