//! # dstwatch-core
//!
//! Tracks daylight-saving-time transitions across a fixed catalog of world
//! cities. Each check cycle computes the current DST state per city, diffs it
//! against the last persisted state, and reports the cities that flipped so a
//! notifier can send a single summary message. State is persisted only after
//! the notification is delivered, so a failed send is retried on the next
//! cycle instead of being silently dropped.
//!
//! ## Modules
//!
//! - [`catalog`] — the fixed ordered list of tracked cities
//! - [`oracle`] — "is DST active now" / "local time now" for an IANA zone
//! - [`state`] — durable city-code → DST-boolean mapping with atomic saves
//! - [`detect`] — diff current DST readings against the prior state
//! - [`notify`] — notification contract and message formatting
//! - [`scheduler`] — check cycle orchestration and the interruptible poll loop
//! - [`error`] — error types

pub mod catalog;
pub mod detect;
pub mod error;
pub mod notify;
pub mod oracle;
pub mod scheduler;
pub mod state;

pub use catalog::{City, CITIES};
pub use detect::{detect, ChangedCity};
pub use error::WatchError;
pub use notify::{format_body, Notifier};
pub use oracle::{DstOracle, SystemOracle};
pub use scheduler::{run_cycle, run_loop, CycleOutcome, Shutdown};
pub use state::{DstState, JsonFileStore, StateStore};
