//! Characters, teams, and the templates they are built from.
//!
//! A `CharacterTemplate` is static data (name, hp, shield, die faces)
//! parsed from JSON. Placing a template on a team at a `Position`
//! produces a `Character`, the per-game mutable-by-replacement record.

mod character;
mod template;

pub use character::{Character, Team};
pub use template::{builtin_template, create_team_from_templates, CharacterTemplate, BUILTIN_TEMPLATES};
