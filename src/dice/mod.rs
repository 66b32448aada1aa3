//! Dice and their faces.
//!
//! Every character carries one die. A face names the effects it produces
//! when the round resolves; the effect names are keys into the
//! [`EffectRegistry`](crate::effects::EffectRegistry).

mod die;
mod face;

pub use die::Die;
pub use face::{Face, FaceEffect};
