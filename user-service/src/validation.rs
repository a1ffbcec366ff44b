// Payload validation for user records
// Creation requires name and email; updates check only the fields they carry

use crate::error::{ServiceError, ServiceResult};
use crate::models::user::{EMAIL, IDADE, NOME};
use crate::models::{Payload, UserFields};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "name is required";
pub const EMAIL_REQUIRED: &str = "email is required";
pub const EMAIL_INVALID: &str = "email must have a valid format";
pub const AGE_OUT_OF_RANGE: &str = "age must be a number between 0 and 120";
pub const UPDATE_EMPTY: &str = "at least one field must be provided for update";

const MIN_AGE: f64 = 0.0;
const MAX_AGE: f64 = 120.0;

static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A single field-level complaint about a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub field: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Loose address shape check: `local@domain.tld`, no whitespace, one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validator for user payloads
pub struct UserValidator;

impl UserValidator {
    /// Rules for creation: `nome` and `email` are mandatory, `idade` is
    /// checked when present.
    pub fn validate_for_create(payload: &Payload) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        Self::check_name(payload.get(NOME), &mut errors);
        Self::check_email(payload.get(EMAIL), &mut errors);
        if let Some(idade) = payload.get(IDADE) {
            Self::check_age(idade, &mut errors);
        }

        errors
    }

    /// Rules for updates: each known field is checked only if present, and the
    /// payload must carry at least one key.
    pub fn validate_for_update(payload: &Payload) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(nome) = payload.get(NOME) {
            Self::check_name(Some(nome), &mut errors);
        }
        if let Some(email) = payload.get(EMAIL) {
            Self::check_email(Some(email), &mut errors);
        }
        if let Some(idade) = payload.get(IDADE) {
            Self::check_age(idade, &mut errors);
        }

        if payload.is_empty() {
            errors.push(ValidationError::new(UPDATE_EMPTY, "payload"));
        }

        errors
    }

    /// Validate a creation payload and convert it into typed fields.
    pub fn check_create(payload: Payload) -> ServiceResult<UserFields> {
        Self::finish(Self::validate_for_create(&payload), payload)
    }

    /// Validate an update payload and convert it into typed fields.
    pub fn check_update(payload: Payload) -> ServiceResult<UserFields> {
        Self::finish(Self::validate_for_update(&payload), payload)
    }

    fn finish(errors: Vec<ValidationError>, payload: Payload) -> ServiceResult<UserFields> {
        if errors.is_empty() {
            Ok(UserFields::from_payload(payload))
        } else {
            Err(ServiceError::Validation(errors))
        }
    }

    fn check_name(nome: Option<&Value>, errors: &mut Vec<ValidationError>) {
        let present = matches!(nome, Some(Value::String(s)) if !s.trim().is_empty());
        if !present {
            errors.push(ValidationError::new(NAME_REQUIRED, NOME));
        }
    }

    fn check_email(email: Option<&Value>, errors: &mut Vec<ValidationError>) {
        match email {
            None | Some(Value::Null) => {
                errors.push(ValidationError::new(EMAIL_REQUIRED, EMAIL));
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                errors.push(ValidationError::new(EMAIL_REQUIRED, EMAIL));
            }
            Some(Value::String(s)) if is_valid_email(s) => {}
            Some(_) => {
                errors.push(ValidationError::new(EMAIL_INVALID, EMAIL));
            }
        }
    }

    fn check_age(idade: &Value, errors: &mut Vec<ValidationError>) {
        let in_range = idade
            .as_f64()
            .is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age));
        if !in_range {
            errors.push(ValidationError::new(AGE_OUT_OF_RANGE, IDADE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn messages(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));

        assert!(!is_valid_email("email-sem-formato-valido"));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("ana@@x.com"));
        assert!(!is_valid_email("ana@b@x.com"));
        assert!(!is_valid_email("ana maria@x.com"));
        assert!(!is_valid_email(" ana@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_create_accepts_minimal_payload() {
        let errors =
            UserValidator::validate_for_create(&payload(json!({"nome": "Ana", "email": "ana@x.com"})));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_create_accepts_full_payload() {
        let errors = UserValidator::validate_for_create(&payload(json!({
            "nome": "Ana",
            "email": "ana@x.com",
            "idade": 0,
            "telefone": "(81) 3333-4444",
            "cidade": "Recife",
            "hobby": ["xadrez"]
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_create_empty_payload_reports_name_and_email() {
        let errors = UserValidator::validate_for_create(&Payload::new());
        assert_eq!(messages(&errors), vec![NAME_REQUIRED, EMAIL_REQUIRED]);
    }

    #[test]
    fn test_create_blank_fields() {
        let errors =
            UserValidator::validate_for_create(&payload(json!({"nome": "   ", "email": "\t"})));
        assert_eq!(messages(&errors), vec![NAME_REQUIRED, EMAIL_REQUIRED]);
    }

    #[test]
    fn test_create_invalid_email_format() {
        let errors = UserValidator::validate_for_create(&payload(
            json!({"nome": "Ana", "email": "email-sem-formato-valido"}),
        ));
        assert_eq!(messages(&errors), vec![EMAIL_INVALID]);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_create_non_string_fields() {
        let errors = UserValidator::validate_for_create(&payload(json!({"nome": 42, "email": 7})));
        assert_eq!(messages(&errors), vec![NAME_REQUIRED, EMAIL_INVALID]);

        let errors =
            UserValidator::validate_for_create(&payload(json!({"nome": null, "email": null})));
        assert_eq!(messages(&errors), vec![NAME_REQUIRED, EMAIL_REQUIRED]);
    }

    #[test]
    fn test_age_boundaries() {
        for ok in [json!(0), json!(120), json!(35.5)] {
            let errors = UserValidator::validate_for_create(&payload(
                json!({"nome": "Ana", "email": "ana@x.com", "idade": ok}),
            ));
            assert!(errors.is_empty(), "age {ok} should be accepted");
        }

        for bad in [json!(-1), json!(121), json!(-0.5), json!("30"), json!(null), json!(true)] {
            let errors = UserValidator::validate_for_create(&payload(
                json!({"nome": "Ana", "email": "ana@x.com", "idade": bad}),
            ));
            assert_eq!(messages(&errors), vec![AGE_OUT_OF_RANGE], "age {bad} should be rejected");
        }
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        let errors = UserValidator::validate_for_update(&payload(json!({"cidade": "Natal"})));
        assert!(errors.is_empty());

        let errors = UserValidator::validate_for_update(&payload(json!({"nome": "Ana B"})));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_update_rejects_present_but_invalid_fields() {
        let errors = UserValidator::validate_for_update(&payload(
            json!({"nome": "", "email": "nope", "idade": 500}),
        ));
        assert_eq!(messages(&errors), vec![NAME_REQUIRED, EMAIL_INVALID, AGE_OUT_OF_RANGE]);
    }

    #[test]
    fn test_update_rejects_non_numeric_age() {
        for bad in [json!("trinta anos"), json!(null), json!(true), json!([30])] {
            let errors = UserValidator::validate_for_update(&payload(json!({ "idade": bad })));
            assert_eq!(messages(&errors), vec![AGE_OUT_OF_RANGE], "age {bad} should be rejected");
        }
    }

    #[test]
    fn test_update_requires_at_least_one_field() {
        let errors = UserValidator::validate_for_update(&Payload::new());
        assert_eq!(messages(&errors), vec![UPDATE_EMPTY]);
    }

    #[test]
    fn test_check_create_returns_typed_fields() {
        let fields =
            UserValidator::check_create(payload(json!({"nome": "Ana", "email": "ana@x.com"})))
                .unwrap();
        assert_eq!(fields.nome.as_deref(), Some("Ana"));

        let err = UserValidator::check_create(Payload::new()).unwrap_err();
        assert_eq!(err.details(), vec![NAME_REQUIRED, EMAIL_REQUIRED]);
    }

    proptest! {
        #[test]
        fn prop_out_of_range_age_is_rejected(age in prop_oneof![-1.0e6..-0.001f64, 120.001..1.0e6f64]) {
            let errors = UserValidator::validate_for_update(&payload(json!({ "idade": age })));
            prop_assert_eq!(messages(&errors), vec![AGE_OUT_OF_RANGE]);
        }

        #[test]
        fn prop_address_without_at_is_rejected(local in "[a-z0-9.]{1,12}", domain in "[a-z]{1,8}\\.[a-z]{2,3}") {
            let email = format!("{local}{domain}");
            let errors = UserValidator::validate_for_create(&payload(json!({ "nome": "Ana", "email": email })));
            prop_assert_eq!(messages(&errors), vec![EMAIL_INVALID]);
        }

        #[test]
        fn prop_missing_name_always_reported(email in "[a-z]{1,8}@[a-z]{1,8}\\.com") {
            let errors = UserValidator::validate_for_create(&payload(json!({ "email": email })));
            prop_assert_eq!(messages(&errors), vec![NAME_REQUIRED]);
        }
    }
}
