//! Effect system for die faces.
//!
//! - `EffectDefinition`: what a named effect does, to whom, and when
//! - `EffectRegistry`: lookup table from face effect names to definitions
//! - `EffectResolver`: applies one resolved effect to a game state
//!
//! ## Design Philosophy
//!
//! Faces only carry names and amounts. Meaning lives in the registry,
//! which is built explicitly and shared by reference, so two games with
//! different rule sets can coexist in one process.

mod effect;
mod registry;
mod resolver;

pub use effect::{EffectAction, EffectDefinition, EffectTarget, PendingEffect};
pub use registry::EffectRegistry;
pub use resolver::{EffectResolver, ResolveResult};
