//! Structured logging facility for restmap
//!
//! Provides a single initialization point with environment profiles and an
//! in-memory capture layer for deterministic log assertions in tests:
//! - `init(profile)` - set up the tracing subscriber once per process
//! - `init_test_capture()` - install a capture layer and get a handle to
//!   the recorded events
//!
//! The engine crates only depend on `tracing`; wiring a subscriber is the
//! embedding application's job, done here.

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
