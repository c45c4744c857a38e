//! Guest command handlers.

use serde_json::Value;
use tabled::Tabled;

use innkeep_api::ApiClient;

use crate::cli::{GlobalOpts, GuestsArgs, GuestsCommand};
use crate::error::CliError;
use crate::output::{self, field};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct GuestRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "ID Card")]
    id_card: String,
}

impl From<&Value> for GuestRow {
    fn from(g: &Value) -> Self {
        Self {
            id: field(g, "id"),
            name: field(g, "fullName"),
            email: field(g, "email"),
            phone: field(g, "phone"),
            id_card: field(g, "idCardNumber"),
        }
    }
}

fn print_guests(list: &[Value], global: &GlobalOpts) {
    let out = output::render_list(&global.output, list, |g| GuestRow::from(g), |g| field(g, "id"));
    output::print_output(&out, global.quiet);
}

fn print_guest(guest: &Value, global: &GlobalOpts) {
    let out = output::render_single(&global.output, guest, output::detail, |g| field(g, "id"));
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ApiClient,
    args: GuestsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let guests = client.guests();

    match args.command {
        GuestsCommand::List => {
            print_guests(&guests.all().await?, global);
            Ok(())
        }

        GuestsCommand::Get { id } => {
            print_guest(&guests.get(id).await?, global);
            Ok(())
        }

        GuestsCommand::Search {
            name,
            phone,
            id_card,
        } => {
            // clap guarantees exactly one is present
            if let Some(number) = id_card {
                let guest = guests.find_by_id_card(&number).await?;
                if guest.is_null() {
                    return Err(CliError::NotFound {
                        message: format!("No guest with ID card {number}"),
                    });
                }
                print_guest(&guest, global);
            } else if let Some(phone) = phone {
                print_guests(&guests.search_by_phone(&phone).await?, global);
            } else if let Some(name) = name {
                print_guests(&guests.search_by_name(&name).await?, global);
            }
            Ok(())
        }
    }
}
