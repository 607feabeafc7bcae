//! Rule tables for the contact, login and signup forms.

use super::validation::{ChoiceOption, EMAIL_RE, FieldKind, FieldSpec, Rule};

/// Minimum password length for login and signup.
pub const MIN_PASSWORD_LEN: usize = 6;

static NAME_RULES: [Rule; 1] = [Rule::Required {
    message: "Name is required",
}];

static EMAIL_RULES: [Rule; 2] = [
    Rule::Required {
        message: "Email is required",
    },
    Rule::Pattern {
        regex: &EMAIL_RE,
        message: "Invalid email address",
    },
];

static PASSWORD_RULES: [Rule; 2] = [
    Rule::Required {
        message: "Password is required",
    },
    Rule::MinLength {
        min: MIN_PASSWORD_LEN,
        message: "Password must be at least 6 characters",
    },
];

/// Options for the contact form's "Service Interest" field.
pub static SERVICE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: "", label: "Select a service" },
    ChoiceOption { value: "ai-ml", label: "AI & Machine Learning" },
    ChoiceOption { value: "cloud", label: "Cloud Computing" },
    ChoiceOption { value: "nlp", label: "Natural Language Processing" },
    ChoiceOption { value: "software", label: "Software Development" },
    ChoiceOption { value: "web", label: "Web Development" },
    ChoiceOption { value: "mobile", label: "Mobile Development" },
    ChoiceOption { value: "devops", label: "DevOps" },
    ChoiceOption { value: "security", label: "Cybersecurity" },
    ChoiceOption { value: "data", label: "Data Analytics" },
    ChoiceOption { value: "consulting", label: "IT Consulting" },
    ChoiceOption { value: "other", label: "Other" },
];

pub static CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        rules: &NAME_RULES,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Text,
        rules: &EMAIL_RULES,
    },
    FieldSpec {
        name: "company",
        label: "Company",
        kind: FieldKind::Text,
        rules: &[],
    },
    FieldSpec {
        name: "service",
        label: "Service Interest",
        kind: FieldKind::Choice(SERVICE_OPTIONS),
        rules: &[],
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::Text,
        rules: &[Rule::Required {
            message: "Message is required",
        }],
    },
];

pub static LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Text,
        rules: &EMAIL_RULES,
    },
    FieldSpec {
        name: "password",
        label: "Password",
        kind: FieldKind::Secret,
        rules: &PASSWORD_RULES,
    },
];

pub static SIGNUP_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Full Name",
        kind: FieldKind::Text,
        rules: &NAME_RULES,
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Text,
        rules: &EMAIL_RULES,
    },
    FieldSpec {
        name: "password",
        label: "Password",
        kind: FieldKind::Secret,
        rules: &PASSWORD_RULES,
    },
    FieldSpec {
        name: "confirmPassword",
        label: "Confirm Password",
        kind: FieldKind::Secret,
        rules: &[
            Rule::Required {
                message: "Please confirm your password",
            },
            Rule::Matches {
                other: "password",
                message: "Passwords do not match",
            },
        ],
    },
];
