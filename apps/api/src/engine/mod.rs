// Signal-extraction and scoring engine.
// Pure, synchronous functions over plain text. No I/O, no shared state; safe to call from any
// number of requests concurrently.

pub mod compiler;
pub mod platform;
pub mod scoring;
pub mod sections;
pub mod signals;

pub use compiler::{compile_resume_variant, Persona};
pub use platform::Platform;
pub use scoring::calculate_survivability_score;
pub use signals::{extract_jd_signals, JdSignals};
