//! Shared helpers for command handlers.

use std::io::{BufRead, IsTerminal};
use std::path::Path;

use secrecy::SecretString;
use serde_json::Value;

use innkeep_api::{ApiClient, Envelope};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Fail early when a command needs a session and none is held.
pub fn require_login(client: &ApiClient) -> Result<(), CliError> {
    if client.is_authenticated() {
        Ok(())
    } else {
        Err(CliError::NotLoggedIn)
    }
}

/// Turn an envelope with `success: false` into an error.
pub fn expect_success(envelope: Envelope) -> Result<Envelope, CliError> {
    if envelope.success {
        Ok(envelope)
    } else {
        Err(CliError::Rejected {
            message: envelope.message().to_owned(),
        })
    }
}

/// Report an envelope-returning action: its message on stderr, its data (if
/// any) on stdout.
pub fn report(envelope: Envelope, fallback: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let envelope = expect_success(envelope)?;
    let message = match envelope.message() {
        "" => fallback,
        m => m,
    };
    output::status(global, message);

    if let Some(data) = envelope.data.as_ref().filter(|d| !d.is_null()) {
        let out = output::render_single(&global.output, data, output::detail, |d| {
            output::field(d, "id")
        });
        output::print_output(&out, global.quiet);
    }
    Ok(())
}

/// Password from stdin (first line) or an interactive prompt.
pub fn read_password(from_stdin: bool, prompt: &str) -> Result<SecretString, CliError> {
    let password = if from_stdin {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        line.trim_end_matches(['\r', '\n']).to_owned()
    } else {
        rpassword::prompt_password(prompt)?
    };

    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }
    Ok(SecretString::from(password))
}
