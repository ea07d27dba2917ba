//! HTTP handlers. Each validates its request, calls the engine or store, and returns JSON.

pub mod jds;
pub mod outcomes;
pub mod resumes;
pub mod variants;
