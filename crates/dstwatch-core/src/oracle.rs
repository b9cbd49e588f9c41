//! DST and local-time queries against the IANA timezone database.
//!
//! Wraps `chrono-tz` behind a small trait so the change detector can be
//! tested with canned readings instead of the wall clock.

use crate::error::{Result, WatchError};
use chrono::Utc;
use chrono_tz::{OffsetComponents, Tz};

/// Answers "is DST active now" and "what is the local time now" for a zone.
pub trait DstOracle {
    /// Whether the zone currently applies a daylight-saving offset.
    fn is_dst_active(&self, zonename: &str) -> Result<bool>;

    /// Current local time in the zone, formatted `HH:MM` (24h).
    fn local_time(&self, zonename: &str) -> Result<String>;
}

/// Production oracle: wall-clock "now" plus the embedded IANA database.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOracle;

fn parse_zone(zonename: &str) -> Result<Tz> {
    zonename
        .parse()
        .map_err(|_| WatchError::UnknownTimezone(zonename.to_string()))
}

impl DstOracle for SystemOracle {
    fn is_dst_active(&self, zonename: &str) -> Result<bool> {
        let tz = parse_zone(zonename)?;
        let now = Utc::now().with_timezone(&tz);
        Ok(!now.offset().dst_offset().is_zero())
    }

    fn local_time(&self, zonename: &str) -> Result<String> {
        let tz = parse_zone(zonename)?;
        Ok(Utc::now().with_timezone(&tz).format("%H:%M").to_string())
    }
}
