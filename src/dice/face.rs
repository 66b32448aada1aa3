//! Die faces.

use serde::{Deserialize, Serialize};

/// One effect printed on a face: a registry key and a magnitude.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceEffect {
    /// Registry key, e.g. `"attack"`.
    pub effect: String,
    /// Magnitude passed to the effect's action.
    pub amount: i64,
}

impl FaceEffect {
    pub fn new(effect: impl Into<String>, amount: i64) -> Self {
        Self {
            effect: effect.into(),
            amount,
        }
    }
}

/// A die face.
///
/// A face with no effects is a blank: rolling it does nothing this round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Text shown to the player.
    pub description: String,
    /// Effects enqueued when the round resolves.
    #[serde(default)]
    pub effects: Vec<FaceEffect>,
}

impl Face {
    /// Create a face without effects.
    pub fn blank(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            effects: Vec::new(),
        }
    }

    /// Create a face with a single effect.
    pub fn single(description: impl Into<String>, effect: impl Into<String>, amount: i64) -> Self {
        Self {
            description: description.into(),
            effects: vec![FaceEffect::new(effect, amount)],
        }
    }

    /// Add another effect to this face.
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>, amount: i64) -> Self {
        self.effects.push(FaceEffect::new(effect, amount));
        self
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.effects.is_empty()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_builders() {
        let face = Face::single("Strike 3 + Guard 1", "attack", 3).with_effect("shield", 1);

        assert_eq!(face.effects.len(), 2);
        assert_eq!(face.effects[1], FaceEffect::new("shield", 1));
        assert!(!face.is_blank());
        assert!(Face::blank("Miss").is_blank());
    }

    #[test]
    fn test_face_json_effects_default_to_empty() {
        let face: Face = serde_json::from_str(r#"{ "description": "Miss" }"#).unwrap();
        assert!(face.is_blank());
        assert_eq!(face.to_string(), "Miss");
    }
}
