//! Platform-independent core of the lucky draw.
//!
//! Everything the browser component needs that does not touch the DOM lives
//! here: the participant model, CSV ingestion and export, the session state
//! driven by uploads and spins, wheel geometry, segment colours and the
//! configuration block read from the host page.

pub mod config;
pub mod export;
pub mod import;
pub mod model;
pub mod palette;
pub mod session;
pub mod wheel;

pub use config::{RaffleConfig, Variant, WheelConfig};
pub use export::ExportError;
pub use import::{ImportError, ImportPolicy, Roster, Schema};
pub use model::participant::Participant;
pub use model::spin_result::SpinResult;
pub use session::RaffleSession;
