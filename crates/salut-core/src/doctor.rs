//! Implementation of the `doctor` diagnostics used by the CLI.
//!
//! Each check carries an identifier, a status ("pass", "warn" or "fail")
//! and a human-readable summary. The report aggregates an overall status
//! across all checks and records the crate version.

use crate::config::{self, Config};
use crate::greet::greet;
use serde::Serialize;
use std::env;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub version: String,
    pub overall: String,
    pub checks: Vec<DoctorCheck>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DoctorCheck {
    pub id: String,
    pub status: String,
    pub summary: String,
}

fn mk(id: &str, status: &str, summary: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        id: id.to_string(),
        status: status.to_string(),
        summary: summary.into(),
    }
}

fn aggregate_overall(checks: &[DoctorCheck]) -> String {
    // fail > warn > pass
    if checks.iter().any(|c| c.status == "fail") {
        "fail".to_string()
    } else if checks.iter().any(|c| c.status == "warn") {
        "warn".to_string()
    } else {
        "pass".to_string()
    }
}

fn locale_check() -> DoctorCheck {
    // LC_ALL overrides LC_CTYPE, which overrides LANG.
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| env::var(key).ok().filter(|value| !value.is_empty()));
    match locale {
        Some(value) if value.to_ascii_lowercase().replace('-', "").contains("utf8") => {
            mk("term.utf8", "pass", format!("locale {} is UTF-8", value))
        }
        Some(value) => mk(
            "term.utf8",
            "warn",
            format!(
                "locale {} is not UTF-8; non-ASCII greetings may be garbled",
                value
            ),
        ),
        None => mk("term.utf8", "warn", "no locale set; assuming UTF-8 output"),
    }
}

/// Runs a set of diagnostics and returns a report.
///
/// All checks are local and deterministic:
/// - Loads config from `SALUT_CONFIG` or `~/.config/salut/config.toml`
/// - Renders the effective default greeting
/// - Inspects the locale environment for UTF-8 output support
pub fn doctor_check() -> DoctorReport {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    // 1) config load check; the file is optional, so absence is only a warn
    let path = config::config_path();
    let cfg_res: Result<Config, ()> = if path.exists() {
        match config::load_config() {
            Ok((cfg, path)) => match cfg.validate() {
                Ok(()) => {
                    checks.push(mk(
                        "cfg.load",
                        "pass",
                        format!("loaded config: {}", path.display()),
                    ));
                    Ok(cfg)
                }
                Err(err) => {
                    checks.push(mk(
                        "cfg.load",
                        "fail",
                        format!("config validation failed: {}", err),
                    ));
                    Err(())
                }
            },
            Err(err) => {
                checks.push(mk("cfg.load", "fail", err));
                Err(())
            }
        }
    } else {
        checks.push(mk(
            "cfg.load",
            "warn",
            format!(
                "no config at {} (set SALUT_CONFIG or create ~/.config/salut/config.toml); using built-in defaults",
                path.display()
            ),
        ));
        Ok(Config::default())
    };

    // 2) render the greeting the CLI would print with no arguments
    match &cfg_res {
        Ok(cfg) => {
            let line = greet(cfg.greeting_or_default(), cfg.name_or_default());
            checks.push(mk(
                "cfg.defaults",
                "pass",
                format!("default greeting renders as {:?}", line),
            ));
        }
        Err(()) => {
            checks.push(mk(
                "cfg.defaults",
                "warn",
                "skipped because config load failed",
            ));
        }
    }

    checks.push(locale_check());

    let overall = aggregate_overall(&checks);
    DoctorReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        overall,
        checks,
    }
}
