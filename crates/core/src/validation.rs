//! Field-level validation support.
//!
//! Validation is pure and decoupled from the storage layer: DTOs derive
//! `validator::Validate` and the result is flattened into a list of
//! [`FieldError`]s that reports every failing field, not just the first.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Maximum length of a hero slide title.
pub const MAX_SLIDE_TITLE_LEN: u64 = 100;

/// Maximum length of a hero slide subtitle.
pub const MAX_SLIDE_SUBTITLE_LEN: u64 = 200;

/// Maximum length of a product badge.
pub const MAX_BADGE_LEN: u64 = 20;

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: u64 = 500;

/// A single validation failure: which field and why.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check whether `value` is an acceptable image reference: an absolute
/// `http(s)` URL or an internal `/uploads/` path.
pub fn is_valid_image_ref(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://") || value.starts_with("/uploads/")
}

/// Custom validator for image reference fields.
pub fn validate_image_ref(value: &str) -> Result<(), ValidationError> {
    if is_valid_image_ref(value) {
        Ok(())
    } else {
        Err(ValidationError::new("image_ref")
            .with_message("must be an http(s) URL or an /uploads/ path".into()))
    }
}

/// Custom validator for the product category enumeration.
pub fn validate_category(value: &str) -> Result<(), ValidationError> {
    if crate::catalog::is_valid_category(value) {
        Ok(())
    } else {
        Err(ValidationError::new("category").with_message(
            format!(
                "must be one of: {}",
                crate::catalog::CATEGORIES.join(", ")
            )
            .into(),
        ))
    }
}

/// Flatten `validator`'s nested error map into a flat list of field errors.
///
/// Every failing field contributes at least one entry; the order follows
/// the field iteration order of [`ValidationErrors`].
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, kind) in errors.errors() {
        collect_kind(field.as_ref(), kind, &mut out);
    }
    out
}

fn collect_kind(field: &str, kind: &validator::ValidationErrorsKind, out: &mut Vec<FieldError>) {
    use validator::ValidationErrorsKind;
    match kind {
        ValidationErrorsKind::Field(errs) => {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", err.code));
                out.push(FieldError::new(field, message));
            }
        }
        ValidationErrorsKind::Struct(nested) => {
            for (inner, inner_kind) in nested.errors() {
                collect_kind(inner.as_ref(), inner_kind, out);
            }
        }
        ValidationErrorsKind::List(map) => {
            for nested in map.values() {
                for (inner, inner_kind) in nested.errors() {
                    collect_kind(inner.as_ref(), inner_kind, out);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
