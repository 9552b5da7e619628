//! Signal derivation: scoring formulas, decision rules, record assembly.

pub mod decision;
pub mod engine;
pub mod format;
pub mod noise;
pub mod scoring;

pub use decision::{decide, RuleInputs, SignalRule};
pub use engine::SignalEngine;
pub use format::format_volume;
pub use noise::{FixedNoise, NoiseSource, ThreadRngNoise};
