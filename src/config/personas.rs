//! Persona table configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigError;
use crate::domain::conversation::PersonaTable;

/// Persona file shipped with the binary.
pub const EMBEDDED_PERSONAS: &str = include_str!("../../prompts/personas.yaml");

/// Where persona prompts come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonasConfig {
    /// YAML file replacing the embedded personas
    pub path: Option<PathBuf>,
}

impl PersonasConfig {
    /// Builds the persona table from the configured file, or the embedded one.
    pub fn load_table(&self) -> Result<PersonaTable, ConfigError> {
        let yaml = match &self.path {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                ConfigError::Personas(format!("failed to read {}: {}", path.display(), e))
            })?,
            None => EMBEDDED_PERSONAS.to_string(),
        };

        PersonaTable::from_yaml(&yaml).map_err(|e| ConfigError::Personas(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ModelTier;
    use crate::domain::wellness::{DomainLabel, WellnessCategory};
    use std::io::Write;

    #[test]
    fn embedded_personas_cover_every_label() {
        let table = PersonasConfig::default().load_table().unwrap();
        assert_eq!(table.len(), 9);

        let physical = table.select(DomainLabel::Wellness(WellnessCategory::Physical));
        assert!(physical.system_prompt.starts_with("You are the Physical Wellness Coach."));
        assert_eq!(physical.tier, ModelTier::CostOptimized);

        let main = table.select(DomainLabel::Main);
        assert!(main.system_prompt.contains("**Tabi**"));
        assert_eq!(main.tier, ModelTier::Lightweight);
    }

    #[test]
    fn embedded_mental_focus_is_numbered() {
        let table = PersonasConfig::default().load_table().unwrap();
        let mental = table.select(DomainLabel::Wellness(WellnessCategory::Mental));
        assert!(mental.system_prompt.contains("1. Stress and anxiety management"));
        assert!(mental.system_prompt.contains("**Crisis Resources**"));
    }

    #[test]
    fn file_replaces_embedded_personas() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
response_style: Short.
boundaries_common: Scope.
professional_boundaries: Not a doctor.
user_context_handling: Use it.
conversation_continuity: Remember.
persona_switching: Hand off.
safety_escalation: Escalate.
crisis_resources: Call 988.
main:
  prompt: You are a test companion.
personas:
  social:
    display_name: Test Social Coach
    mission: Connect.
    tone_voice: Warm.
    primary_focus:
      - Friends
"#
        )
        .unwrap();

        let config = PersonasConfig {
            path: Some(file.path().to_path_buf()),
        };
        let table = config.load_table().unwrap();

        assert_eq!(table.len(), 2);
        assert!(table
            .select(DomainLabel::Main)
            .system_prompt
            .starts_with("You are a test companion."));
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = PersonasConfig {
            path: Some(PathBuf::from("/nonexistent/personas.yaml")),
        };
        assert!(matches!(config.load_table(), Err(ConfigError::Personas(_))));
    }
}
