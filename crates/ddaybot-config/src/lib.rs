//! ddaybot-config: startup configuration resolved from the process environment.
//!
//! Everything is read once at startup. The only optional piece is the push
//! destination (`LINE_GROUP_ID`) — without it the daily push becomes a
//! logged no-op while the rest of the bot keeps running.

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("delivery window start {start} is not before end {end}")]
    EmptyWindow { start: NaiveTime, end: NaiveTime },
}

fn default_port() -> u16 {
    5000
}

fn default_target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 28).unwrap()
}

fn default_window_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

fn default_window_end() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 15, 0).unwrap()
}

fn default_recheck() -> Duration {
    Duration::from_secs(3600)
}

/// Bot configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// LINE Messaging API channel access token (bearer credential).
    pub channel_access_token: String,
    /// LINE channel secret used to verify webhook signatures.
    pub channel_secret: String,
    /// Push destination (group ID). None means pushes are skipped.
    pub group_id: Option<String>,
    /// HTTP listen port.
    pub port: u16,
    /// The D-Day the countdown counts down to.
    pub target_date: NaiveDate,
    /// Daily delivery window start (inclusive), local time.
    pub window_start: NaiveTime,
    /// Daily delivery window end (exclusive), local time.
    pub window_end: NaiveTime,
    /// Upper bound on a single scheduler sleep between re-checks.
    pub recheck_interval: Duration,
}

impl Config {
    /// Load configuration from the process environment (`.env` honored).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_access_token = lookup("LINE_CHANNEL_ACCESS_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("LINE_CHANNEL_ACCESS_TOKEN"))?;
        let channel_secret = lookup("LINE_CHANNEL_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("LINE_CHANNEL_SECRET"))?;
        let group_id = lookup("LINE_GROUP_ID").filter(|v| !v.is_empty());

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw, |v| v.parse::<u16>().ok())?,
            None => default_port(),
        };

        let target_date = match lookup("DDAY_DATE") {
            Some(raw) => parse_var("DDAY_DATE", &raw, |v| {
                NaiveDate::parse_from_str(v, "%Y-%m-%d").ok()
            })?,
            None => default_target_date(),
        };

        let window_start = match lookup("DDAY_WINDOW_START") {
            Some(raw) => parse_var("DDAY_WINDOW_START", &raw, parse_hhmm)?,
            None => default_window_start(),
        };

        let window_end = match lookup("DDAY_WINDOW_END") {
            Some(raw) => parse_var("DDAY_WINDOW_END", &raw, parse_hhmm)?,
            None => default_window_end(),
        };

        if window_start >= window_end {
            return Err(ConfigError::EmptyWindow {
                start: window_start,
                end: window_end,
            });
        }

        let recheck_interval = match lookup("DDAY_RECHECK_SECS") {
            Some(raw) => parse_var("DDAY_RECHECK_SECS", &raw, |v| {
                v.parse::<u64>().ok().filter(|s| *s > 0).map(Duration::from_secs)
            })?,
            None => default_recheck(),
        };

        if group_id.is_none() {
            tracing::warn!("LINE_GROUP_ID is not set; daily pushes will be skipped");
        }

        Ok(Self {
            channel_access_token,
            channel_secret,
            group_id,
            port,
            target_date,
            window_start,
            window_end,
            recheck_interval,
        })
    }
}

fn parse_var<T>(
    var: &'static str,
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    parse(raw.trim()).ok_or_else(|| ConfigError::InvalidVar {
        var,
        value: raw.to_string(),
        reason: "unparseable".to_string(),
    })
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}
