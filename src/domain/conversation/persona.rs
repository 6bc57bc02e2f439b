//! Persona/model selection.
//!
//! Persona prompt text is configuration. The table is built once from YAML
//! and then only read: `select` is a pure lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::wellness::{DomainLabel, WellnessCategory};

/// Personas whose focus list is numbered rather than bulleted.
const NUMBERED_FOCUS: &[WellnessCategory] = &[WellnessCategory::Mental];

/// Which chat model a persona runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    /// General-purpose model.
    Standard,
    /// Cheaper model on the alternate provider.
    CostOptimized,
    /// Small model for the general persona.
    Lightweight,
}

impl ModelTier {
    /// Tier used when the persona file does not pick one.
    pub fn default_for(label: DomainLabel) -> ModelTier {
        match label {
            DomainLabel::Main => ModelTier::Lightweight,
            DomainLabel::Wellness(WellnessCategory::Physical)
            | DomainLabel::Wellness(WellnessCategory::Environmental) => ModelTier::CostOptimized,
            DomainLabel::Wellness(_) => ModelTier::Standard,
        }
    }
}

/// A system prompt and the model tier it runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaEntry {
    pub system_prompt: String,
    pub tier: ModelTier,
}

/// Errors raised while building the persona table.
#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("invalid persona YAML: {0}")]
    InvalidYaml(String),

    #[error("unknown persona key '{0}'")]
    UnknownPersona(String),

    #[error("persona '{0}' has an empty focus list")]
    EmptyFocus(String),
}

#[derive(Debug, Deserialize)]
struct PersonaFile {
    response_style: String,
    boundaries_common: String,
    professional_boundaries: String,
    user_context_handling: String,
    conversation_continuity: String,
    persona_switching: String,
    safety_escalation: String,
    crisis_resources: String,
    main: MainPersona,
    personas: HashMap<String, PersonaSpec>,
}

#[derive(Debug, Deserialize)]
struct MainPersona {
    prompt: String,
    #[serde(default)]
    model: Option<ModelTier>,
}

#[derive(Debug, Deserialize)]
struct PersonaSpec {
    display_name: String,
    mission: String,
    tone_voice: String,
    primary_focus: Vec<String>,
    #[serde(default)]
    extra_boundaries: Option<String>,
    #[serde(default)]
    model: Option<ModelTier>,
}

impl PersonaFile {
    /// All shared guidance blocks, labelled, in one string.
    fn shared_guidance(&self) -> String {
        let labelled = [
            ("Boundaries Common", &self.boundaries_common),
            ("Professional Boundaries", &self.professional_boundaries),
            ("User Context Handling", &self.user_context_handling),
            ("Conversation Continuity", &self.conversation_continuity),
            ("Persona Switching", &self.persona_switching),
            ("Safety Escalation", &self.safety_escalation),
            ("Crisis Resources", &self.crisis_resources),
        ];

        std::iter::once(self.response_style.trim().to_string())
            .chain(
                labelled
                    .iter()
                    .map(|(label, text)| format!("**{}**\n{}", label, text.trim())),
            )
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn compose_persona(category: WellnessCategory, spec: &PersonaSpec) -> String {
    let mut sections = vec![
        format!("You are the {}.", spec.display_name.trim()),
        format!("**Mission** – {}", spec.mission.trim()),
        format!("**Tone & Voice**\n{}", spec.tone_voice.trim()),
        "**Primary Focus Areas**".to_string(),
    ];

    let numbered = NUMBERED_FOCUS.contains(&category);
    for (i, item) in spec.primary_focus.iter().enumerate() {
        if numbered {
            sections.push(format!("{}. {}", i + 1, item.trim()));
        } else {
            sections.push(format!("• {}", item.trim()));
        }
    }

    if let Some(extra) = spec.extra_boundaries.as_deref().map(str::trim) {
        if !extra.is_empty() {
            sections.push(extra.to_string());
        }
    }

    sections.retain(|s| !s.is_empty());
    sections.join("\n\n")
}

/// Immutable mapping from domain label to persona entry.
#[derive(Debug, Clone)]
pub struct PersonaTable {
    entries: HashMap<DomainLabel, PersonaEntry>,
    fallback: PersonaEntry,
}

impl PersonaTable {
    /// Builds the table from persona YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, PersonaError> {
        let file: PersonaFile =
            serde_yaml::from_str(yaml).map_err(|e| PersonaError::InvalidYaml(e.to_string()))?;
        let guidance = file.shared_guidance();

        let mut entries = HashMap::new();
        for (key, spec) in &file.personas {
            let category = WellnessCategory::from_token(key)
                .ok_or_else(|| PersonaError::UnknownPersona(key.clone()))?;
            if spec.primary_focus.is_empty() {
                return Err(PersonaError::EmptyFocus(key.clone()));
            }
            let label = DomainLabel::Wellness(category);
            entries.insert(
                label,
                PersonaEntry {
                    system_prompt: format!("{}\n{}", compose_persona(category, spec), guidance),
                    tier: spec.model.unwrap_or_else(|| ModelTier::default_for(label)),
                },
            );
        }

        let main_prompt = format!("{}\n\n{}", file.main.prompt.trim(), guidance);
        entries.insert(
            DomainLabel::Main,
            PersonaEntry {
                system_prompt: main_prompt.clone(),
                tier: file
                    .main
                    .model
                    .unwrap_or_else(|| ModelTier::default_for(DomainLabel::Main)),
            },
        );

        Ok(Self {
            entries,
            fallback: PersonaEntry {
                system_prompt: main_prompt,
                tier: ModelTier::Standard,
            },
        })
    }

    /// Builds a table from explicit entries.
    pub fn from_entries(
        entries: HashMap<DomainLabel, PersonaEntry>,
        fallback: PersonaEntry,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Returns the entry for a label, or the fallback entry if unmapped.
    pub fn select(&self, label: DomainLabel) -> &PersonaEntry {
        self.entries.get(&label).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &PersonaEntry {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
