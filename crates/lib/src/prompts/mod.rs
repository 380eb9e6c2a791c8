//! # Prompt Templates and Builders
//!
//! The directive constants and the pure builders that assemble one prompt per
//! analysis request. Everything in here is deterministic string work; no I/O.

pub mod core;

pub use core::{build_analysis_prompt, build_friction_prompt};
