//! A die: an ordered, non-empty list of faces.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};

use super::Face;

/// A die with at least one face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Face>", into = "Vec<Face>")]
pub struct Die {
    faces: Vec<Face>,
}

impl Die {
    /// Create a die. Fails on an empty face list.
    pub fn new(faces: Vec<Face>) -> Result<Self> {
        if faces.is_empty() {
            return Err(GameError::InvalidTemplate("die has no faces".to_string()));
        }
        Ok(Self { faces })
    }

    /// All faces in printed order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The face shown before the first roll.
    #[must_use]
    pub fn first_face(&self) -> &Face {
        &self.faces[0]
    }

    /// Roll the die: a uniformly random face.
    pub fn roll(&self, rng: &mut GameRng) -> Face {
        let index = rng.roll_index(self.faces.len());
        self.faces[index].clone()
    }
}

impl TryFrom<Vec<Face>> for Die {
    type Error = GameError;

    fn try_from(faces: Vec<Face>) -> Result<Self> {
        Self::new(faces)
    }
}

impl From<Die> for Vec<Face> {
    fn from(die: Die) -> Self {
        die.faces
    }
}
