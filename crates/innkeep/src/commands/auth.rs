//! Session command handlers: login, logout, whoami, register.

use std::io::IsTerminal;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value, json};

use innkeep_api::{ApiClient, SessionInfo};
use innkeep_config::ConfigError;

use crate::cli::{GlobalOpts, LoginArgs, RegisterArgs};
use crate::config::ActiveProfile;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Login ───────────────────────────────────────────────────────────

/// Password for `login`: stdin when asked, then the credential chain, then a
/// prompt when a terminal is attached.
fn login_password(from_stdin: bool, active: &ActiveProfile) -> Result<SecretString, CliError> {
    if from_stdin {
        return util::read_password(true, "");
    }
    match innkeep_config::resolve_password(&active.profile, &active.name) {
        Ok(password) => Ok(password),
        Err(ConfigError::NoCredentials { .. }) if std::io::stdin().is_terminal() => {
            util::read_password(false, "Password: ")
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn login(
    client: &ApiClient,
    args: LoginArgs,
    active: &ActiveProfile,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let LoginArgs {
        identity,
        role,
        password_stdin,
    } = args;

    let identity = match identity {
        Some(identity) => identity,
        None => innkeep_config::resolve_identity(&active.profile, &active.name)?,
    };
    let password = login_password(password_stdin, active)?;
    let role = role.or(active.profile.role);

    // Judged by this envelope; a token from an earlier session may still be held
    let envelope = client.login(&identity, &password, role).await?;
    if !envelope.success || envelope.token().is_none() {
        let message = match envelope.message() {
            "" => "server issued no token".to_owned(),
            m => m.to_owned(),
        };
        return Err(CliError::AuthFailed {
            profile: active.name.clone(),
            message,
        });
    }

    output::status(global, &format!("Logged in as {identity} ({})", client.surface()));
    Ok(())
}

// ── Logout ──────────────────────────────────────────────────────────

pub fn logout(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    client.logout()?;
    output::status(global, "Logged out");
    Ok(())
}

// ── Whoami ──────────────────────────────────────────────────────────

fn session_detail(info: &SessionInfo, profile: &str, server: &str) -> String {
    let role = info.role.map(|r| r.to_string()).unwrap_or_default();
    let identity = info.identity.clone().unwrap_or_default();
    format!(
        "Profile        {profile}\n\
         Server         {server}\n\
         Surface        {}\n\
         Authenticated  {}\n\
         Identity       {identity}\n\
         Role           {role}",
        info.surface, info.authenticated
    )
}

pub fn whoami(
    client: &ApiClient,
    active: &ActiveProfile,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let info = client.session()?;
    let server = client.base_url().to_string();
    let out = output::render_single(
        &global.output,
        &info,
        |i| session_detail(i, &active.name, &server),
        |i| i.identity.clone().unwrap_or_default(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Register ────────────────────────────────────────────────────────

fn registration_body(args: RegisterArgs) -> Result<Value, CliError> {
    if let Some(ref path) = args.from_file {
        return util::read_json_file(path);
    }

    let mut body = Map::new();
    let fields = [
        ("fullName", args.name),
        ("email", args.email),
        ("idCardNumber", args.id_card),
        ("phone", args.phone),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            body.insert(key.into(), Value::String(value));
        }
    }

    let password = util::read_password(false, "Choose a password: ")?;
    body.insert("password".into(), json!(password.expose_secret()));
    Ok(Value::Object(body))
}

pub async fn register(
    client: &ApiClient,
    args: RegisterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let body = registration_body(args)?;
    let envelope = client.register(&body).await?;
    util::report(envelope, "Guest registered", global)
}
