//! CLI configuration: thin wrapper around `innkeep_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--server, --surface, etc.).

use std::path::PathBuf;

use innkeep_api::{ClientConfig, TlsMode};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use innkeep_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config, session_path,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// A profile after CLI flag overrides, with the name it was found under.
#[derive(Debug, Clone)]
pub struct ActiveProfile {
    pub name: String,
    pub profile: Profile,
}

/// The active profile with CLI flag overrides applied.
///
/// Without a configured profile, flags alone describe the server. Naming a
/// profile explicitly that does not exist is an error.
pub fn effective_profile(global: &GlobalOpts, config: &Config) -> Result<ActiveProfile, CliError> {
    let name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&name) {
        Some(p) => p.clone(),
        None if global.profile.is_some() => {
            let mut available: Vec<_> = config.profiles.keys().cloned().collect();
            available.sort();
            return Err(CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => Profile::default(),
    };

    // Flags (and their env vars) beat profile values
    if let Some(surface) = global.surface {
        profile.surface = surface;
    }
    if let Some(ref server) = global.server {
        profile.server = Some(server.clone());
    }
    if global.insecure || (config.defaults.insecure && profile.insecure.is_none()) {
        profile.insecure = Some(true);
    }
    profile.timeout = global
        .timeout
        .or(profile.timeout)
        .or(Some(config.defaults.timeout));
    if let Some(ref path) = global.session_file {
        profile.session_file = Some(path.clone());
    }

    Ok(ActiveProfile { name, profile })
}

/// Translate the effective profile into a `ClientConfig`.
pub fn client_config(profile: &Profile) -> Result<ClientConfig, CliError> {
    let config = innkeep_config::profile_to_client_config(profile)?;
    if config.transport.tls == TlsMode::DangerAcceptInvalid {
        tracing::warn!("TLS certificate verification disabled");
    }
    Ok(config)
}

/// Session file for a profile: explicit override, else the platform data dir.
pub fn session_file(profile: &Profile) -> PathBuf {
    profile.session_file.clone().unwrap_or_else(session_path)
}
