use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A failed validation rule, carrying the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Missing(&'static str),
    #[error("{0}")]
    PatternMismatch(&'static str),
    #[error("{0}")]
    TooShort(&'static str),
    #[error("{0}")]
    Mismatch(&'static str),
}

impl ValidationError {
    /// Returns the user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing(m) | Self::PatternMismatch(m) | Self::TooShort(m) | Self::Mismatch(m) => m,
        }
    }
}

/// Email shape accepted by every form: `local@domain.tld`, ASCII letters in either case.
pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid hardcoded regex")
});

/// A single declarative check applied to a field value at submit time.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The value must not be empty.
    Required { message: &'static str },
    /// The value must match the regex.
    Pattern {
        regex: &'static LazyLock<Regex>,
        message: &'static str,
    },
    /// The value must be at least `min` characters long.
    MinLength { min: usize, message: &'static str },
    /// The value must equal the current value of the field named `other`.
    Matches {
        other: &'static str,
        message: &'static str,
    },
}

impl Rule {
    /// Checks `value` against this rule.
    ///
    /// Only [`Rule::Required`] looks at empty values; every other rule passes
    /// on an empty string so optional fields left blank are always valid.
    pub fn check<'v>(
        &self,
        value: &str,
        value_of: impl Fn(&str) -> &'v str,
    ) -> Result<(), ValidationError> {
        match *self {
            Self::Required { message } => {
                if value.is_empty() {
                    Err(ValidationError::Missing(message))
                } else {
                    Ok(())
                }
            }
            _ if value.is_empty() => Ok(()),
            Self::Pattern { regex, message } => {
                if regex.is_match(value) {
                    Ok(())
                } else {
                    Err(ValidationError::PatternMismatch(message))
                }
            }
            Self::MinLength { min, message } => {
                if value.chars().count() >= min {
                    Ok(())
                } else {
                    Err(ValidationError::TooShort(message))
                }
            }
            Self::Matches { other, message } => {
                if value == value_of(other) {
                    Ok(())
                } else {
                    Err(ValidationError::Mismatch(message))
                }
            }
        }
    }
}

/// How a field takes input and renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, rendered as typed.
    Text,
    /// Free text, masked unless revealed.
    Secret,
    /// One of a fixed list of options; the first option means "no selection".
    Choice(&'static [ChoiceOption]),
}

/// One entry of a [`FieldKind::Choice`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value submitted with the form.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

/// Static description of a form field: identity, input kind and rule list.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// Returns `true` if the field carries a [`Rule::Required`].
    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required { .. }))
    }

    /// Runs the field's rules in order and returns the first failure.
    pub fn validate<'v>(
        &self,
        value: &str,
        value_of: impl Fn(&str) -> &'v str + Copy,
    ) -> Result<(), ValidationError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(value, value_of))
    }
}

/// Validates every field of a rule table against the current values.
///
/// `value_of` resolves a field name to its current value (empty string for
/// unknown names). Returns one error per invalid field, in table order.
pub fn validate_form<'v>(
    specs: &[FieldSpec],
    value_of: impl Fn(&str) -> &'v str + Copy,
) -> Vec<(&'static str, ValidationError)> {
    specs
        .iter()
        .filter_map(|spec| {
            spec.validate(value_of(spec.name), value_of)
                .err()
                .map(|e| (spec.name, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    static EMAIL_RULES: [Rule; 2] = [
        Rule::Required {
            message: "Email is required",
        },
        Rule::Pattern {
            regex: &EMAIL_RE,
            message: "Invalid email address",
        },
    ];

    static PAIR: &[FieldSpec] = &[
        FieldSpec {
            name: "password",
            label: "Password",
            kind: FieldKind::Secret,
            rules: &[
                Rule::Required {
                    message: "Password is required",
                },
                Rule::MinLength {
                    min: 6,
                    message: "too short",
                },
            ],
        },
        FieldSpec {
            name: "confirm",
            label: "Confirm",
            kind: FieldKind::Secret,
            rules: &[
                Rule::Required {
                    message: "Please confirm",
                },
                Rule::Matches {
                    other: "password",
                    message: "Passwords do not match",
                },
            ],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            kind: FieldKind::Text,
            rules: &EMAIL_RULES,
        },
    ];

    fn no_fields(_: &str) -> &'static str {
        ""
    }

    fn check_email(value: &str) -> Result<(), ValidationError> {
        let spec = &PAIR[2];
        spec.validate(value, no_fields)
    }

    // --- email pattern ---

    #[test]
    fn email_simple_is_valid() {
        assert_eq!(check_email("jane@x.com"), Ok(()));
    }

    #[test]
    fn email_is_case_insensitive() {
        assert_eq!(check_email("Jane.Doe+tag@Example.CO.UK"), Ok(()));
    }

    #[test]
    fn email_empty_is_missing() {
        assert_eq!(
            check_email(""),
            Err(ValidationError::Missing("Email is required"))
        );
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert_eq!(
            check_email("jane.example.com"),
            Err(ValidationError::PatternMismatch("Invalid email address"))
        );
    }

    #[test]
    fn email_without_tld_is_rejected() {
        assert!(check_email("jane@localhost").is_err());
    }

    #[test]
    fn email_one_letter_tld_is_rejected() {
        assert!(check_email("jane@x.c").is_err());
    }

    #[test]
    fn email_with_case_folding_lookalikes_is_rejected() {
        // Long s and the Kelvin sign fold to ASCII letters under Unicode rules.
        for value in ["jane@x.co\u{17F}", "jane@x.\u{212A}z", "\u{17F}ue@x.com"] {
            assert!(!EMAIL_RE.is_match(value), "accepted {value:?}");
        }
    }

    #[test]
    fn email_with_space_is_rejected() {
        assert!(check_email("ja ne@x.com").is_err());
    }

    #[quickcheck]
    fn email_well_formed_always_accepted(local: u8, domain: u8, tld: u8) -> bool {
        let local: String = (0..(local % 10) + 1).map(|i| (b'a' + i % 26) as char).collect();
        let domain: String = (0..(domain % 10) + 1).map(|i| (b'a' + i % 26) as char).collect();
        let tld: String = (0..(tld % 4) + 2).map(|i| (b'a' + i % 26) as char).collect();
        check_email(&format!("{local}@{domain}.{tld}")).is_ok()
    }

    #[quickcheck]
    fn email_without_at_always_rejected(s: String) -> bool {
        let s: String = s.chars().filter(|c| *c != '@').collect();
        check_email(&s).is_err()
    }

    // --- rule semantics ---

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let rule = Rule::MinLength {
            min: 3,
            message: "short",
        };
        assert_eq!(rule.check("äöü", no_fields), Ok(()));
        assert_eq!(
            rule.check("äö", no_fields),
            Err(ValidationError::TooShort("short"))
        );
    }

    #[test]
    fn non_required_rules_skip_empty_values() {
        let rules = [
            Rule::Pattern {
                regex: &EMAIL_RE,
                message: "bad",
            },
            Rule::MinLength {
                min: 6,
                message: "short",
            },
            Rule::Matches {
                other: "password",
                message: "mismatch",
            },
        ];
        for rule in rules {
            assert_eq!(rule.check("", |_| "secret"), Ok(()), "{rule:?}");
        }
    }

    #[test]
    fn whitespace_satisfies_required() {
        let rule = Rule::Required { message: "req" };
        assert_eq!(rule.check(" ", no_fields), Ok(()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let spec = &PAIR[0];
        assert_eq!(
            spec.validate("", no_fields),
            Err(ValidationError::Missing("Password is required"))
        );
        assert_eq!(
            spec.validate("abc", no_fields),
            Err(ValidationError::TooShort("too short"))
        );
    }

    #[test]
    fn is_required_reflects_rules() {
        assert!(PAIR[0].is_required());
        let optional = FieldSpec {
            name: "company",
            label: "Company",
            kind: FieldKind::Text,
            rules: &[],
        };
        assert!(!optional.is_required());
    }

    // --- validate_form ---

    fn lookup<'a>(values: &'a [(&'static str, &'a str)]) -> impl Fn(&str) -> &'a str + Copy {
        move |name| {
            values
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| *v)
                .unwrap_or("")
        }
    }

    #[test]
    fn mismatched_confirmation_is_reported() {
        let values = [
            ("password", "abc123"),
            ("confirm", "abc124"),
            ("email", "jane@x.com"),
        ];
        let errors = validate_form(PAIR, lookup(&values));
        assert_eq!(
            errors,
            vec![("confirm", ValidationError::Mismatch("Passwords do not match"))]
        );
    }

    #[test]
    fn matching_confirmation_passes() {
        let values = [
            ("password", "abc123"),
            ("confirm", "abc123"),
            ("email", "jane@x.com"),
        ];
        assert!(validate_form(PAIR, lookup(&values)).is_empty());
    }

    #[test]
    fn all_invalid_fields_reported_in_table_order() {
        let errors = validate_form(PAIR, lookup(&[]));
        let names: Vec<&str> = errors.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["password", "confirm", "email"]);
    }

    #[test]
    fn error_display_is_message() {
        let err = ValidationError::Mismatch("Passwords do not match");
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(err.message(), "Passwords do not match");
    }
}
