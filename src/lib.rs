// Library surface for headless/integration tests and reuse.
// The TUI rendering lives in the binary; everything testable is here.
pub mod celebration;
pub mod config;
pub mod game;
pub mod problem;
pub mod runtime;
pub mod session;
pub mod streak;
pub mod tier;
pub mod util;

/// Event loop tick interval; drives the advance timer and celebration frames.
pub const TICK_RATE_MS: u64 = 100;
