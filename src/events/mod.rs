//! # Events Module
//!
//! Progress reporting for batch scans.
//!
//! The core library emits events through channels so the CLI (or any other
//! front end) can drive a progress bar without the core knowing about it.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Classify(ClassifyEvent::Progress(p)) = event {
//!             println!("Classified {}/{}", p.completed, p.total);
//!         }
//!     }
//! });
//!
//! batch.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
