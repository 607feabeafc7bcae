//! Form model: declarative rule tables, validation and submission payloads.

mod fields;
mod payload;
mod validation;

pub use fields::{CONTACT_FIELDS, LOGIN_FIELDS, MIN_PASSWORD_LEN, SERVICE_OPTIONS, SIGNUP_FIELDS};
pub use payload::{
    ContactPayload, FormKind, LoginPayload, Payload, REDACTED, SignupPayload, Submission,
};
pub use validation::{
    ChoiceOption, EMAIL_RE, FieldKind, FieldSpec, Rule, ValidationError, validate_form,
};
