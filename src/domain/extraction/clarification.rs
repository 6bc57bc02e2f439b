//! Clarification prompter.
//!
//! Turns a list of missing fields into at most one follow-up question.

/// A field the extractor can report as missing.
pub trait RequiredField {
    /// The question asked when only this field is missing.
    fn question(&self) -> &'static str;
}

/// Composes the follow-up question for a set of missing fields.
///
/// - no fields: `None`
/// - one field: its question verbatim
/// - two fields: `"{first} Also, {second lowercased}"`
/// - more: the `generic` catch-all
pub fn compose_question<F: RequiredField>(missing: &[F], generic: &str) -> Option<String> {
    match missing {
        [] => None,
        [only] => Some(only.question().to_string()),
        [first, second] => Some(format!(
            "{} Also, {}",
            first.question(),
            second.question().to_lowercase()
        )),
        _ => Some(generic.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum TestField {
        A,
        B,
        C,
    }

    impl RequiredField for TestField {
        fn question(&self) -> &'static str {
            match self {
                TestField::A => "What is A?",
                TestField::B => "Which B? (One, Two)",
                TestField::C => "And C?",
            }
        }
    }

    #[test]
    fn no_missing_fields_asks_nothing() {
        assert_eq!(compose_question::<TestField>(&[], "More?"), None);
    }

    #[test]
    fn one_missing_field_is_verbatim() {
        assert_eq!(
            compose_question(&[TestField::B], "More?"),
            Some("Which B? (One, Two)".to_string())
        );
    }

    #[test]
    fn two_missing_fields_are_joined() {
        assert_eq!(
            compose_question(&[TestField::A, TestField::B], "More?"),
            Some("What is A? Also, which b? (one, two)".to_string())
        );
    }

    #[test]
    fn three_missing_fields_fall_back_to_generic() {
        assert_eq!(
            compose_question(&[TestField::A, TestField::B, TestField::C], "More?"),
            Some("More?".to_string())
        );
    }
}
