//! Notification contract and message formatting.
//!
//! The transport lives in the binary crate; this module only defines what a
//! notifier must do and how the summary body is rendered.

use crate::detect::ChangedCity;
use crate::error::Result;

/// Delivers one summary message for all cities that changed in a cycle.
pub trait Notifier {
    /// Send a single notification covering `changed` (never called empty).
    ///
    /// # Errors
    /// Returns `WatchError::Delivery` if the transport rejects the send; the
    /// caller must then skip persisting the cycle's state so the same diff is
    /// re-detected and re-sent on the next cycle.
    fn notify(&self, changed: &[ChangedCity]) -> Result<()>;
}

/// Render the notification body: one line per changed city, in input order.
pub fn format_body(changed: &[ChangedCity]) -> String {
    let mut body = String::from("Hello,\n\n");
    for change in changed {
        let status = if change.dst_active { "ON" } else { "OFF" };
        body.push_str(&format!(
            "- {} ({}) turned DST {}\n",
            change.city.name, change.city.code, status
        ));
    }
    body
}
