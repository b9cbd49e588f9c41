//! Diff current DST readings against the last persisted state.
//!
//! Pure apart from the oracle's clock read: no store I/O happens here, which
//! keeps the detection logic testable in isolation.

use crate::catalog::City;
use crate::error::Result;
use crate::oracle::DstOracle;
use crate::state::DstState;

/// A city whose DST status flipped during one detection cycle, together with
/// its new status. Exists only while the notification message is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedCity {
    pub city: City,
    pub dst_active: bool,
}

/// Compare the current DST state of every catalog city against `prior`.
///
/// Cities are visited in catalog order, which fixes the listing order of the
/// notification. For each city:
///
/// - never observed before: the new state records the current reading, but
///   the city is *not* reported as changed (first observations seed the state
///   silently rather than triggering a notification burst on first run);
/// - unchanged: nothing happens;
/// - flipped: the new state records the reading and the city is reported.
///
/// Returns the changed cities in catalog order plus the full updated state
/// (a superset of `prior` covering every observed city).
///
/// # Errors
/// Returns `WatchError::UnknownTimezone` if a catalog zonename does not
/// resolve; the catalog is static, so this indicates a stale timezone
/// database rather than a runtime condition.
pub fn detect(
    catalog: &[City],
    oracle: &dyn DstOracle,
    prior: &DstState,
) -> Result<(Vec<ChangedCity>, DstState)> {
    let mut changed = Vec::new();
    let mut next = prior.clone();

    for city in catalog {
        let active = oracle.is_dst_active(city.zonename)?;

        match prior.get(city.code) {
            None => {
                next.insert(city.code.to_string(), active);
            }
            Some(&known) if known == active => {}
            Some(_) => {
                next.insert(city.code.to_string(), active);
                tracing::info!(city = city.name, dst = active, "DST status switched");
                changed.push(ChangedCity {
                    city: *city,
                    dst_active: active,
                });
            }
        }
    }

    Ok((changed, next))
}
