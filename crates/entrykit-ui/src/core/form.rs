//! Local form state: field values, password visibility and the submit phase.

use std::collections::BTreeMap;

/// Current text per field name.
pub type FormValues = BTreeMap<String, String>;

/// Where a sign-in attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Submitted; waiting for the caller to finish.
    Submitting,
    /// The caller raised and then cleared its loading flag.
    Settled,
}

/// Ephemeral state behind a login form.
///
/// Disabled/busy rendering is driven by the caller's loading flag alone; the
/// phase only records progress through one attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormModel {
    values: FormValues,
    password_visible: bool,
    phase: SubmitPhase,
    saw_loading: bool,
}

impl FormModel {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Current value for `name`, empty when never typed into.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// All values entered so far.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Whether the password is rendered in plain text.
    #[must_use]
    pub const fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Flip password visibility. Stored values are untouched.
    pub const fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Current submit phase.
    #[must_use]
    pub const fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Handle an explicit user submit.
    ///
    /// Returns the snapshot to hand to the caller, or `None` while the caller
    /// reports it is still loading.
    pub fn submit(&mut self, is_loading: bool) -> Option<FormValues> {
        if is_loading {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        self.saw_loading = false;
        Some(self.values.clone())
    }

    /// Track the caller-owned loading flag.
    pub const fn observe_loading(&mut self, is_loading: bool) {
        if !matches!(self.phase, SubmitPhase::Submitting) {
            return;
        }
        if is_loading {
            self.saw_loading = true;
        } else if self.saw_loading {
            self.phase = SubmitPhase::Settled;
            self.saw_loading = false;
        }
    }

    /// Fold one user or caller event into the model.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input { name, value } => self.set_value(name, value),
            FormAction::TogglePassword => self.toggle_password_visibility(),
            FormAction::Submit { is_loading } => {
                self.submit(is_loading);
            }
            FormAction::ObserveLoading(is_loading) => self.observe_loading(is_loading),
        }
    }
}

/// Events a rendered form feeds back into its [`FormModel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// Keystroke in the named field.
    Input {
        /// Field name.
        name: &'static str,
        /// Full input text after the keystroke.
        value: String,
    },
    /// Show/hide control pressed.
    TogglePassword,
    /// Explicit submit; ignored while loading.
    Submit {
        /// Caller loading flag at submit time.
        is_loading: bool,
    },
    /// Caller loading flag changed.
    ObserveLoading(bool),
}

/// Interactivity of each control for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// Text inputs reject interaction.
    pub inputs_disabled: bool,
    /// Password show/hide control rejects interaction.
    pub visibility_toggle_disabled: bool,
    /// Submit control rejects interaction.
    pub submit_disabled: bool,
    /// Busy indicator and `aria-busy` are shown.
    pub busy: bool,
}

impl ControlState {
    /// Every control follows the caller's loading flag; the submit phase plays
    /// no part.
    #[must_use]
    pub const fn for_loading(is_loading: bool) -> Self {
        Self {
            inputs_disabled: is_loading,
            visibility_toggle_disabled: is_loading,
            submit_disabled: is_loading,
            busy: is_loading,
        }
    }
}

/// Kind of caller-supplied message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// Failure text.
    Error,
    /// Confirmation text.
    Success,
}

/// One message to display above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Error or success.
    pub kind: AlertKind,
    /// Caller text, verbatim.
    pub message: String,
}

/// Build the alerts to show. Both may appear; empty strings are skipped.
#[must_use]
pub fn alerts(error: Option<&str>, success: Option<&str>) -> Vec<Alert> {
    [(AlertKind::Error, error), (AlertKind::Success, success)]
        .into_iter()
        .filter_map(|(kind, text)| {
            let text = text.filter(|text| !text.is_empty())?;
            Some(Alert {
                kind,
                message: text.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::FieldSpec;

    #[test]
    fn submit_delivers_entered_values_by_name() {
        let fields = [FieldSpec::username(), FieldSpec::phone(), FieldSpec::password()];
        let mut model = FormModel::new();
        for (idx, field) in fields.iter().enumerate() {
            model.set_value(field.name(), format!("value-{idx}"));
        }
        let submitted = model.submit(false).expect("not loading");
        let expected: FormValues = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.name().to_string(), format!("value-{idx}")))
            .collect();
        assert_eq!(submitted, expected);
        assert_eq!(model.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn later_keystrokes_replace_earlier_ones() {
        let mut model = FormModel::new();
        model.set_value("email", "a");
        model.set_value("email", "ab@example.com");
        assert_eq!(model.value("email"), "ab@example.com");
        assert_eq!(model.value("password"), "");
        assert_eq!(model.values().len(), 1);
    }

    #[test]
    fn visibility_toggle_keeps_value() {
        let mut model = FormModel::new();
        model.set_value("password", "hunter2");
        model.toggle_password_visibility();
        assert!(model.password_visible());
        assert_eq!(model.value("password"), "hunter2");
        model.toggle_password_visibility();
        assert!(!model.password_visible());
        assert_eq!(model.value("password"), "hunter2");
    }

    #[test]
    fn submit_is_noop_while_loading() {
        let mut model = FormModel::new();
        model.set_value("email", "x@example.com");
        assert!(model.submit(false).is_some());
        model.observe_loading(true);
        assert_eq!(model.submit(true), None);
        assert_eq!(model.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn phase_settles_after_loading_cycle() {
        let mut model = FormModel::new();
        assert_eq!(model.phase(), SubmitPhase::Idle);
        model.observe_loading(true);
        assert_eq!(model.phase(), SubmitPhase::Idle);

        assert!(model.submit(false).is_some());
        model.observe_loading(false);
        assert_eq!(model.phase(), SubmitPhase::Submitting);
        model.observe_loading(true);
        model.observe_loading(false);
        assert_eq!(model.phase(), SubmitPhase::Settled);

        assert!(model.submit(false).is_some());
        assert_eq!(model.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn error_and_success_render_together() {
        let shown = alerts(Some("Bad password"), Some("Code sent"));
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].kind, AlertKind::Error);
        assert_eq!(shown[0].message, "Bad password");
        assert_eq!(shown[1].kind, AlertKind::Success);
    }

    #[test]
    fn empty_messages_are_hidden() {
        assert!(alerts(None, Some("")).is_empty());
        assert_eq!(alerts(Some(""), Some("ok")).len(), 1);
    }

    #[test]
    fn whitespace_messages_are_shown_verbatim() {
        let shown = alerts(Some(" "), Some("\t"));
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].message, " ");
        assert_eq!(shown[1].message, "\t");
    }

    #[test]
    fn loading_disables_every_control() {
        let busy = ControlState::for_loading(true);
        assert!(busy.inputs_disabled);
        assert!(busy.visibility_toggle_disabled);
        assert!(busy.submit_disabled);
        assert!(busy.busy);
        assert_eq!(
            ControlState::for_loading(false),
            ControlState {
                inputs_disabled: false,
                visibility_toggle_disabled: false,
                submit_disabled: false,
                busy: false,
            }
        );
    }

    #[test]
    fn controls_follow_loading_flag_not_phase() {
        let mut model = FormModel::new();
        assert!(model.submit(false).is_some());
        model.observe_loading(true);
        model.observe_loading(false);
        assert_eq!(model.phase(), SubmitPhase::Settled);
        assert!(!ControlState::for_loading(false).submit_disabled);
    }

    #[test]
    fn actions_drive_the_model() {
        let mut model = FormModel::new();
        model.apply(FormAction::Input {
            name: "email",
            value: "a@b.co".to_string(),
        });
        model.apply(FormAction::TogglePassword);
        assert!(model.password_visible());
        model.apply(FormAction::Submit { is_loading: true });
        assert_eq!(model.phase(), SubmitPhase::Idle);
        model.apply(FormAction::Submit { is_loading: false });
        model.apply(FormAction::ObserveLoading(true));
        model.apply(FormAction::ObserveLoading(false));
        assert_eq!(model.phase(), SubmitPhase::Settled);
        assert_eq!(model.value("email"), "a@b.co");
    }
}
