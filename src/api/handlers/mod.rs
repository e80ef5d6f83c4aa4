// SPDX-License-Identifier: MIT

mod health;
mod info;

pub use health::{HealthResponse, health};
pub use info::{BusinessLogic, InfoResponse, info};

use chrono::{Duration, Local, NaiveDateTime};

/// Fixed service identity reported by both endpoints
pub(crate) const SERVICE_NAME: &str = "rust-service";

/// ISO-8601 local date-time without timezone offset, second precision
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current wall-clock time formatted per [`TIMESTAMP_FORMAT`].
pub(crate) fn local_timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Current wall-clock time minus `seconds`, same format.
pub(crate) fn local_timestamp_minus(seconds: i64) -> String {
    format_timestamp(Local::now().naive_local() - Duration::seconds(seconds))
}

fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}
