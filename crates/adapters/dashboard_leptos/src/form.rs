//! Signal-backed [`SettingsForm`] holding one value per settings field.

use std::rc::Rc;

use homepanel_app::ports::{FieldKind, SettingsForm};
use homepanel_domain::settings::{CHOICE_FIELDS, ChoiceTokens, NUMERIC_FIELDS};
use leptos::prelude::*;

/// Input type of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Number,
    Choice(ChoiceTokens),
}

impl FieldInput {
    fn kind(self) -> FieldKind {
        match self {
            Self::Number => FieldKind::Input,
            Self::Choice(_) => FieldKind::Select,
        }
    }
}

/// One field of the settings form.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
    pub value: RwSignal<String>,
}

fn label_for(name: &str) -> &'static str {
    match name {
        "pragPornire" => "Prag pornire (°C)",
        "pragOprire" => "Prag oprire (°C)",
        "pragCamera" => "Prag cameră (°C)",
        "tempMaxBoiler" => "Temperatură maximă boiler (°C)",
        "offsetCamera" => "Offset cameră (°C)",
        "timpActivareReleu" => "Timp activare releu (s)",
        "tempMinTur" => "Temperatură minimă tur (°C)",
        "tempMinExterna" => "Temperatură minimă externă (°C)",
        "alarmaTempMax" => "Alarmă temperatură maximă (°C)",
        "intervalActualizare" => "Interval actualizare (s)",
        "deactivateAlarmTime" => "Timp dezactivare alarmă (min)",
        "modNoapte" => "Mod noapte",
        "releuManual" => "Releu manual",
        "backupSetari" => "Backup setări",
        _ => "",
    }
}

/// The settings form: numeric inputs first, then the selects.
#[derive(Debug, Clone)]
pub struct SignalForm {
    fields: Rc<[FormField]>,
}

impl SignalForm {
    /// Empty inputs; every select starts on its "off" option.
    #[must_use]
    pub fn new() -> Self {
        let numeric = NUMERIC_FIELDS.iter().map(|&name| FormField {
            name,
            label: label_for(name),
            input: FieldInput::Number,
            value: RwSignal::new(String::new()),
        });
        let choices = CHOICE_FIELDS.iter().map(|field| FormField {
            name: field.name,
            label: label_for(field.name),
            input: FieldInput::Choice(field.tokens),
            value: RwSignal::new(field.tokens.off.to_string()),
        });
        Self {
            fields: numeric.chain(choices).collect(),
        }
    }

    /// Fields in display order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl Default for SignalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsForm for SignalForm {
    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.field(name).map(|field| field.input.kind())
    }

    fn value(&self, name: &str) -> Option<String> {
        self.field(name).map(|field| field.value.get_untracked())
    }

    fn set_value(&self, name: &str, value: &str) {
        if let Some(field) = self.field(name) {
            field.value.set(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_every_submitted_field_with_a_label() {
        let owner = Owner::new();
        owner.with(|| {
            let form = SignalForm::new();

            assert_eq!(
                form.fields().len(),
                NUMERIC_FIELDS.len() + CHOICE_FIELDS.len()
            );
            assert!(form.fields().iter().all(|field| !field.label.is_empty()));
        });
    }

    #[test]
    fn should_report_field_kinds() {
        let owner = Owner::new();
        owner.with(|| {
            let form = SignalForm::new();

            assert_eq!(form.field_kind("pragOprire"), Some(FieldKind::Input));
            assert_eq!(form.field_kind("backupSetari"), Some(FieldKind::Select));
            assert_eq!(form.field_kind("necunoscut"), None);
        });
    }

    #[test]
    fn should_start_selects_on_their_off_option() {
        let owner = Owner::new();
        owner.with(|| {
            let form = SignalForm::new();

            assert_eq!(form.value("modNoapte").as_deref(), Some("Nu"));
            assert_eq!(form.value("backupSetari").as_deref(), Some("Inactiv"));
            assert_eq!(form.value("pragPornire").as_deref(), Some(""));
        });
    }

    #[test]
    fn should_ignore_unknown_fields_on_write() {
        let owner = Owner::new();
        owner.with(|| {
            let form = SignalForm::new();

            form.set_value("intervalActualizare", "10");
            form.set_value("necunoscut", "x");

            assert_eq!(form.value("intervalActualizare").as_deref(), Some("10"));
            assert_eq!(form.value("necunoscut"), None);
        });
    }
}
