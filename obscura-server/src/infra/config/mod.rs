//! Environment-driven configuration for the studio backend.
//!
//! `.env` is loaded first (dotenvy), then real environment variables win.
//! Loading never fails: malformed values fall back to defaults and surface
//! as warnings the caller logs after tracing is initialized.

use std::path::PathBuf;
use std::time::Duration;

use obscura_core::SmtpSettings;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STUDIO_NAME: &str = "Obscura Studio";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    /// `None` when `EMAIL_USER`/`EMAIL_PASS` are absent; inquiry submissions
    /// are then rejected as misconfigured without touching any transport.
    pub mail: Option<SmtpSettings>,
    pub cors: CorsConfig,
    pub studio_name: String,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Optional on-disk catalog document; unset means the embedded one.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Empty means permissive (the form is posted from the public site).
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub env_file_loaded: bool,
}

/// A non-fatal problem discovered while composing the configuration.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigWarning {
    fn with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

/// A composed configuration plus the warnings produced on the way.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Compose configuration from `.env` and the process environment.
    pub fn load(self) -> ConfigLoad {
        let env_file_loaded = dotenvy::dotenv().is_ok();
        let mut load = load_from(|key| {
            std::env::var(key).ok().and_then(non_blank)
        });
        load.config.metadata.env_file_loaded = env_file_loaded;
        load
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Compose configuration from an arbitrary variable source. Split out from
/// [`ConfigLoader::load`] so tests can drive it without process-global env.
fn load_from(var: impl Fn(&str) -> Option<String>) -> ConfigLoad {
    let mut warnings = Vec::new();

    let host = var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port =
        parse_or_default(&var, "SERVER_PORT", DEFAULT_PORT, &mut warnings);

    let catalog_path = var("CATALOG_PATH").map(PathBuf::from);

    let allowed_origins = var("CORS_ALLOWED_ORIGINS")
        .map(|raw| {
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let studio_name = var("STUDIO_NAME")
        .unwrap_or_else(|| DEFAULT_STUDIO_NAME.to_string());

    let mail = resolve_mail_settings(&var, &mut warnings);

    ConfigLoad {
        config: Config {
            server: ServerConfig { host, port },
            catalog: CatalogConfig { path: catalog_path },
            mail,
            cors: CorsConfig { allowed_origins },
            studio_name,
            metadata: ConfigMetadata::default(),
        },
        warnings,
    }
}

fn resolve_mail_settings(
    var: &impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<ConfigWarning>,
) -> Option<SmtpSettings> {
    let user = var("EMAIL_USER");
    let pass = var("EMAIL_PASS");

    let (user, pass) = match (user, pass) {
        (Some(user), Some(pass)) => (user, pass),
        (None, None) => {
            warnings.push(ConfigWarning::with_hint(
                "mail credentials are not configured; inquiry submissions will be rejected",
                "set EMAIL_USER and EMAIL_PASS",
            ));
            return None;
        }
        (Some(_), None) => {
            warnings.push(ConfigWarning::with_hint(
                "EMAIL_USER is set but EMAIL_PASS is missing; inquiry submissions will be rejected",
                "set EMAIL_PASS to the account's app password",
            ));
            return None;
        }
        (None, Some(_)) => {
            warnings.push(ConfigWarning::with_hint(
                "EMAIL_PASS is set but EMAIL_USER is missing; inquiry submissions will be rejected",
                "set EMAIL_USER to the sending account address",
            ));
            return None;
        }
    };

    let host =
        var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
    let port =
        parse_or_default(var, "SMTP_PORT", DEFAULT_SMTP_PORT, warnings);
    let timeout_secs = parse_or_default(
        var,
        "MAIL_TIMEOUT_SECS",
        DEFAULT_MAIL_TIMEOUT_SECS,
        warnings,
    );
    let recipient = var("INQUIRY_RECIPIENT").unwrap_or_else(|| user.clone());

    Some(SmtpSettings {
        host,
        port,
        username: user,
        password: pass,
        recipient,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    warnings: &mut Vec<ConfigWarning>,
) -> T {
    match var(key) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warnings.push(ConfigWarning::with_hint(
                    format!("{key}='{raw}' is not a valid value; using {default}"),
                    format!("set {key} to a positive integer"),
                ));
                default
            }
        },
    }
}
