//! Fixed set of fields submitted when settings are saved.

/// Numeric inputs sent on save, in submission order.
pub const NUMERIC_FIELDS: [&str; 11] = [
    "pragPornire",
    "pragOprire",
    "pragCamera",
    "tempMaxBoiler",
    "offsetCamera",
    "timpActivareReleu",
    "tempMinTur",
    "tempMinExterna",
    "alarmaTempMax",
    "intervalActualizare",
    "deactivateAlarmTime",
];

/// Display tokens of a two-option select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceTokens {
    /// Option meaning `true`.
    pub on: &'static str,
    /// Option meaning `false`.
    pub off: &'static str,
}

impl ChoiceTokens {
    /// Token displayed for `flag`.
    #[must_use]
    pub fn token(&self, flag: bool) -> &'static str {
        if flag { self.on } else { self.off }
    }
}

/// Tokens used by any select that is not listed in [`CHOICE_FIELDS`].
pub const GENERIC_TOKENS: ChoiceTokens = ChoiceTokens {
    on: "Da",
    off: "Nu",
};

/// A boolean setting edited through a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceField {
    pub name: &'static str,
    pub tokens: ChoiceTokens,
}

/// Boolean settings sent on save.
pub const CHOICE_FIELDS: [ChoiceField; 3] = [
    ChoiceField {
        name: "modNoapte",
        tokens: GENERIC_TOKENS,
    },
    ChoiceField {
        name: "releuManual",
        tokens: GENERIC_TOKENS,
    },
    ChoiceField {
        name: "backupSetari",
        tokens: ChoiceTokens {
            on: "Activ",
            off: "Inactiv",
        },
    },
];

/// Tokens of the select named `name`.
#[must_use]
pub fn choice_tokens(name: &str) -> ChoiceTokens {
    CHOICE_FIELDS
        .iter()
        .find(|field| field.name == name)
        .map_or(GENERIC_TOKENS, |field| field.tokens)
}

/// Ordered name/value pairs of a settings save request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsSubmission {
    fields: Vec<(String, String)>,
}

impl SettingsSubmission {
    /// Collect a submission by reading the current value of each field.
    ///
    /// `read` returns `None` for a field absent from the page. Missing
    /// numeric fields are skipped; a missing select submits `"false"`.
    pub fn collect(mut read: impl FnMut(&str) -> Option<String>) -> Self {
        let mut submission = Self::default();
        for name in NUMERIC_FIELDS {
            if let Some(value) = read(name) {
                submission.push(name, value);
            }
        }
        for field in CHOICE_FIELDS {
            let on = read(field.name).is_some_and(|value| value == field.tokens.on);
            submission.push(field.name, on.to_string());
        }
        submission
    }

    /// Append a pair.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// All pairs, in submission order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value submitted for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
