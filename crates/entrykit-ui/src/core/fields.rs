//! Declarative form field descriptions and their resolved render attributes.

use crate::i18n::TranslationBundle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// The supported input kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Email address.
    Email,
    /// Free-form username.
    Username,
    /// Phone number.
    Phone,
    /// Secret entry with a visibility toggle.
    Password,
}

impl FieldKind {
    /// Field name used as the form value key and the input `name`/`id`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }

    const fn default_label(self) -> &'static str {
        match self {
            Self::Email => "Email address",
            Self::Username => "Username",
            Self::Phone => "Phone number",
            Self::Password => "Password",
        }
    }

    const fn default_placeholder(self) -> &'static str {
        match self {
            Self::Email => "you@example.com",
            Self::Username => "e.g. username",
            Self::Phone => "e.g. 012345678",
            Self::Password => "••••••••",
        }
    }

    const fn default_input_type(self) -> InputType {
        match self {
            Self::Email => InputType::Email,
            Self::Username | Self::Phone => InputType::Text,
            Self::Password => InputType::Password,
        }
    }
}

/// HTML input types a field may render with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// `type="text"`.
    Text,
    /// `type="email"`.
    Email,
    /// `type="tel"`.
    Tel,
    /// `type="password"`.
    Password,
}

impl InputType {
    /// Attribute value for the `type` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Password => "password",
        }
    }
}

/// One form input as supplied by the caller.
///
/// Deserializes from `{"name": "email", "label": "..", "placeholder": "..", "type": "email"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Which input this is.
    #[serde(rename = "name")]
    pub kind: FieldKind,
    /// Label override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Input type override. Ignored for passwords.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
}

impl FieldSpec {
    /// A field of the given kind with every attribute defaulted.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            label: None,
            placeholder: None,
            input_type: None,
        }
    }

    /// Email field.
    #[must_use]
    pub const fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    /// Username field.
    #[must_use]
    pub const fn username() -> Self {
        Self::new(FieldKind::Username)
    }

    /// Phone field.
    #[must_use]
    pub const fn phone() -> Self {
        Self::new(FieldKind::Phone)
    }

    /// Password field.
    #[must_use]
    pub const fn password() -> Self {
        Self::new(FieldKind::Password)
    }

    /// The classic email + password pair.
    #[must_use]
    pub fn email_password() -> Vec<Self> {
        vec![Self::email(), Self::password()]
    }

    /// Override the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Override the input type.
    #[must_use]
    pub const fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// Value key for this field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether this field carries a visibility toggle.
    #[must_use]
    pub const fn is_password(&self) -> bool {
        matches!(self.kind, FieldKind::Password)
    }
}

/// Render-ready attributes for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedField {
    /// Value key, `id` and `name` attribute.
    pub name: &'static str,
    /// Visible label.
    pub label: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Effective input type.
    pub input_type: InputType,
    /// Whether a show/hide control is rendered next to the input.
    pub has_visibility_toggle: bool,
    /// Always set; enforcement is left to the browser.
    pub required: bool,
}

/// Apply overrides, localized defaults and the password visibility flag.
#[must_use]
pub fn resolve_field(
    spec: &FieldSpec,
    password_visible: bool,
    bundle: &TranslationBundle,
) -> ResolvedField {
    let kind = spec.kind;
    let label = spec.label.clone().unwrap_or_else(|| {
        bundle.text(&format!("field.{}.label", kind.name()), kind.default_label())
    });
    let placeholder = spec.placeholder.clone().unwrap_or_else(|| {
        bundle.text(
            &format!("field.{}.placeholder", kind.name()),
            kind.default_placeholder(),
        )
    });
    let input_type = if spec.is_password() {
        if password_visible {
            InputType::Text
        } else {
            InputType::Password
        }
    } else {
        spec.input_type.unwrap_or_else(|| kind.default_input_type())
    };
    ResolvedField {
        name: kind.name(),
        label,
        placeholder,
        input_type,
        has_visibility_toggle: spec.is_password(),
        required: true,
    }
}

/// Problems with a caller-supplied field list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldSpecError {
    /// No fields were supplied.
    #[error("login form requires at least one field")]
    Empty,
    /// Two fields share a name; their values would collide.
    #[error("duplicate field `{0}`; values will collide")]
    DuplicateName(&'static str),
}

/// Check that the list is non-empty and names are unique.
///
/// # Errors
///
/// Returns the first problem found.
pub fn validate_fields(fields: &[FieldSpec]) -> Result<(), FieldSpecError> {
    if fields.is_empty() {
        return Err(FieldSpecError::Empty);
    }
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field.kind) {
            return Err(FieldSpecError::DuplicateName(field.name()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

    fn en() -> TranslationBundle {
        TranslationBundle::new(DEFAULT_LOCALE)
    }

    #[test]
    fn defaults_follow_field_kind() {
        let bundle = en();
        let email = resolve_field(&FieldSpec::email(), false, &bundle);
        assert_eq!(email.label, "Email address");
        assert_eq!(email.placeholder, "you@example.com");
        assert_eq!(email.input_type, InputType::Email);
        assert!(email.required);
        assert!(!email.has_visibility_toggle);

        let username = resolve_field(&FieldSpec::username(), false, &bundle);
        assert_eq!(username.label, "Username");
        assert_eq!(username.input_type, InputType::Text);

        let phone = resolve_field(&FieldSpec::phone(), false, &bundle);
        assert_eq!(phone.label, "Phone number");
        assert_eq!(phone.placeholder, "e.g. 012345678");
        assert_eq!(phone.input_type, InputType::Text);

        let password = resolve_field(&FieldSpec::password(), false, &bundle);
        assert_eq!(password.input_type, InputType::Password);
        assert!(password.has_visibility_toggle);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let spec = FieldSpec::phone()
            .with_label("Mobile")
            .with_placeholder("+1 555")
            .with_input_type(InputType::Tel);
        let resolved = resolve_field(&spec, false, &en());
        assert_eq!(resolved.label, "Mobile");
        assert_eq!(resolved.placeholder, "+1 555");
        assert_eq!(resolved.input_type, InputType::Tel);
    }

    #[test]
    fn password_type_tracks_visibility_only() {
        let spec = FieldSpec::password().with_input_type(InputType::Email);
        let bundle = en();
        assert_eq!(
            resolve_field(&spec, false, &bundle).input_type,
            InputType::Password
        );
        assert_eq!(resolve_field(&spec, true, &bundle).input_type, InputType::Text);
    }

    #[test]
    fn localized_defaults_apply_when_no_override() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        let email = resolve_field(&FieldSpec::email(), false, &bundle);
        assert_eq!(email.label, "Adresse e-mail");
        let custom = resolve_field(&FieldSpec::email().with_label("Courriel"), false, &bundle);
        assert_eq!(custom.label, "Courriel");
    }

    #[test]
    fn validation_rejects_empty_and_duplicates() {
        assert_eq!(validate_fields(&[]), Err(FieldSpecError::Empty));
        assert_eq!(
            validate_fields(&[FieldSpec::email(), FieldSpec::password(), FieldSpec::email()]),
            Err(FieldSpecError::DuplicateName("email"))
        );
        assert_eq!(validate_fields(&FieldSpec::email_password()), Ok(()));
    }

    #[test]
    fn specs_deserialize_from_host_json() {
        let raw = r#"[
            {"name": "username", "label": "Handle"},
            {"name": "phone", "type": "tel", "placeholder": "555"},
            {"name": "password"}
        ]"#;
        let fields: Vec<FieldSpec> = serde_json::from_str(raw).expect("valid field json");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], FieldSpec::username().with_label("Handle"));
        assert_eq!(
            fields[1],
            FieldSpec::phone()
                .with_input_type(InputType::Tel)
                .with_placeholder("555")
        );
        assert_eq!(fields[2], FieldSpec::password());
    }

    #[test]
    fn unknown_field_names_fail_to_deserialize() {
        let raw = r#"{"name": "pin"}"#;
        assert!(serde_json::from_str::<FieldSpec>(raw).is_err());
    }
}
