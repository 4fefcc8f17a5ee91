use crate::blocks::BlockDefinition;
use crate::models::{BlockInput, DisplayNode, Properties, PropertyValue};

/// Block selected by keyword and validated against a list of accepted values.
///
/// The whole normalized input becomes the single property, and the fallback is
/// the label followed by that input. An empty accepted list accepts anything
/// that matched an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordBlock {
    kind: String,
    aliases: Vec<String>,
    accepted: Vec<String>,
    property: String,
    label: String,
}

impl KeywordBlock {
    pub const TEACHER_PROFILE: &'static str = "teacher-profile";

    pub fn new(
        kind: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
        property: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into().trim().to_string(),
            aliases: normalize_all(aliases),
            accepted: Vec::new(),
            property: property.into(),
            label: label.into(),
        }
    }

    /// Restrict validation to inputs naming one of `values`
    pub fn accepting(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.accepted = normalize_all(values);
        self
    }

    /// Embedded teacher profile, selected and validated by the teacher's name
    pub fn teacher_profile() -> Self {
        const TEACHERS: [&str; 2] = ["filip", "ahilleas"];
        Self::new(
            Self::TEACHER_PROFILE,
            TEACHERS,
            "teacherInput",
            "Teacher profile",
        )
        .accepting(TEACHERS)
    }
}

impl BlockDefinition for KeywordBlock {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn validate(&self, input: &BlockInput) -> Result<Properties, String> {
        if input.is_blank() {
            return Err("input is empty".to_string());
        }
        if !self.accepted.is_empty() && !self.accepted.iter().any(|value| input.contains(value)) {
            return Err(format!(
                "unsupported {} \"{}\", expected one of: {}",
                self.kind,
                input.normalized(),
                self.accepted.join(", ")
            ));
        }

        let mut properties = Properties::new();
        properties.insert(
            self.property.clone(),
            PropertyValue::Text(input.normalized().to_string()),
        );
        Ok(properties)
    }

    fn fallback_children(&self, input: &BlockInput) -> Vec<DisplayNode> {
        vec![DisplayNode::text(format!(
            "{} {}",
            self.label,
            input.normalized()
        ))]
    }
}

fn normalize_all(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.into().trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn teacher_profile_builds_property_from_normalized_input() {
        let block = KeywordBlock::teacher_profile();
        let input = BlockInput::new("  Filip ");

        let properties = block.validate(&input).unwrap();

        assert_eq!(
            properties.get("teacherInput"),
            Some(&PropertyValue::Text("filip".to_string()))
        );
        assert_eq!(properties.len(), 1);
        assert_eq!(
            block.fallback_children(&input),
            vec![DisplayNode::text("Teacher profile filip")]
        );
    }

    #[rstest]
    #[case("filip")]
    #[case("AHILLEAS")]
    #[case("filip and ahilleas")]
    fn teacher_profile_accepts_known_teachers(#[case] raw: &str) {
        let block = KeywordBlock::teacher_profile();
        assert!(block.validate(&BlockInput::new(raw)).is_ok());
    }

    #[test]
    fn alias_broader_than_accepted_values_can_fail_validation() {
        let block = KeywordBlock::new("teacher-profile", ["teacher"], "teacherInput", "Teacher")
            .accepting(["filip", "ahilleas"]);
        let input = BlockInput::new("Teacher Socrates");

        assert!(block.matches(&input));
        let reason = block.validate(&input).unwrap_err();
        assert_eq!(
            reason,
            "unsupported teacher-profile \"teacher socrates\", expected one of: filip, ahilleas"
        );
    }

    #[test]
    fn empty_accepted_list_accepts_any_match() {
        let block = KeywordBlock::new("quote", ["quote"], "text", "Quote:");
        let input = BlockInput::new("Quote of the day");

        let properties = block.validate(&input).unwrap();
        assert_eq!(
            properties.get("text").and_then(PropertyValue::as_text),
            Some("quote of the day")
        );
    }

    #[test]
    fn blank_input_is_rejected() {
        let block = KeywordBlock::new("quote", ["quote"], "text", "Quote:");
        assert_eq!(
            block.validate(&BlockInput::new("   ")),
            Err("input is empty".to_string())
        );
    }

    #[test]
    fn aliases_are_stored_normalized() {
        let block = KeywordBlock::new(" card ", [" Card ", "PANEL"], "title", "Card");
        assert_eq!(block.kind(), "card");
        assert_eq!(block.aliases(), ["card".to_string(), "panel".to_string()]);
    }
}
