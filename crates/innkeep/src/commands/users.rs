//! Staff account command handlers.

use secrecy::ExposeSecret;
use serde_json::{Map, Value, json};
use tabled::Tabled;

use innkeep_api::ApiClient;

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output::{self, field};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Value> for UserRow {
    fn from(u: &Value) -> Self {
        Self {
            id: field(u, "id"),
            username: field(u, "username"),
            name: field(u, "fullName"),
            role: field(u, "role"),
            active: field(u, "isActive"),
        }
    }
}

fn print_user(user: &Value, global: &GlobalOpts) {
    let out = output::render_single(&global.output, user, output::detail, |u| {
        field(u, "username")
    });
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ApiClient,
    args: UsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::require_login(client)?;
    let users = client.users();

    match args.command {
        UsersCommand::List => {
            let list = users.all().await?;
            let out = output::render_list(&global.output, &list, |u| UserRow::from(u), |u| {
                field(u, "username")
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            username,
            role,
            full_name,
            email,
            from_file,
        } => {
            let body = if let Some(ref path) = from_file {
                util::read_json_file(path)?
            } else {
                let password = util::read_password(false, "Password for the new account: ")?;
                let mut body = Map::new();
                body.insert("username".into(), json!(username));
                body.insert("password".into(), json!(password.expose_secret()));
                body.insert("role".into(), json!(role));
                if let Some(full_name) = full_name {
                    body.insert("fullName".into(), json!(full_name));
                }
                if let Some(email) = email {
                    body.insert("email".into(), json!(email));
                }
                Value::Object(body)
            };

            let user = users.create(&body).await?;
            output::status(global, "User created");
            print_user(&user, global);
            Ok(())
        }

        UsersCommand::Update { id, from_file } => {
            let body = util::read_json_file(&from_file)?;
            let user = users.update(id, &body).await?;
            output::status(global, &format!("User {id} updated"));
            print_user(&user, global);
            Ok(())
        }

        UsersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete user {id}?"), global.yes)? {
                return Ok(());
            }
            let envelope = users.delete(id).await?;
            util::report(envelope, "User deleted", global)
        }
    }
}
