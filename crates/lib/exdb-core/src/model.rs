use serde::{Deserialize, Serialize};

/// A single exercise record as returned by the upstream `ExerciseDB` API.
///
/// Records flow through the system unchanged: nothing here is created or
/// mutated locally. Optional metadata that the upstream omits deserializes
/// to defaults so a record never fails to parse on a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub target: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_muscles: Vec<String>,
    pub equipment: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
}

impl Exercise {
    /// Returns the first instruction line, if the record carries any.
    #[must_use]
    pub fn first_instruction(&self) -> Option<&str> {
        self.instructions.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_camel_case() {
        let json = r#"{
            "id": "0001",
            "name": "3/4 sit-up",
            "bodyPart": "waist",
            "target": "abs",
            "secondaryMuscles": ["hip flexors"],
            "equipment": "body weight",
            "instructions": ["Lie flat on your back."],
            "gifUrl": "https://v2.exercisedb.io/image/0001"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).expect("record should parse");
        assert_eq!(exercise.id, "0001");
        assert_eq!(exercise.body_part, "waist");
        assert_eq!(exercise.secondary_muscles, vec!["hip flexors".to_string()]);
        assert_eq!(
            exercise.gif_url.as_deref(),
            Some("https://v2.exercisedb.io/image/0001")
        );
        assert!(exercise.category.is_none());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let json = r#"{"id": "0002", "name": "squat", "bodyPart": "upper legs", "target": "quads", "equipment": "barbell"}"#;

        let exercise: Exercise = serde_json::from_str(json).expect("record should parse");
        assert!(exercise.instructions.is_empty());
        assert!(exercise.secondary_muscles.is_empty());
        assert!(exercise.gif_url.is_none());
        assert!(exercise.first_instruction().is_none());
    }
}
