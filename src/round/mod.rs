//! Timed round: state machine, notifications and the tokio driver.
//!
//! - `state`: `Round`, the synchronous state machine and its snapshots
//! - `buzz`: feedback cues the round asks the presentation layer to play
//! - `event` / `observer`: change notifications and callback registration
//! - `controller`: `RoundController`, which owns a round on a tokio task and
//!   drives its countdown
//! - `result`: payload handed to the results view
//! - `time`: clock display formatting

pub mod buzz;
pub mod controller;
pub mod event;
pub mod observer;
pub mod result;
pub mod state;
pub mod time;

pub use buzz::BuzzKind;
pub use controller::RoundController;
pub use event::RoundEvent;
pub use observer::{ObserverId, ObserverRegistry, RoundObserver};
pub use result::RoundResult;
pub use state::{Round, RoundPhase, RoundSnapshot};
pub use time::format_elapsed;
