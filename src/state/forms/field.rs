//! Form field value objects

use crate::validate::DraftValue;

/// Donation preset amounts, in dollars
pub const AMOUNT_PRESETS: &[u32] = &[10, 25, 50, 100];

/// Preset selected by default (and re-selected after a reset)
pub const DEFAULT_AMOUNT_PRESET: usize = 1; // $25

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Numeric input kept as typed text; parsed when the draft is built.
    Number(String),
    /// One choice among fixed `(value, label)` options.
    Select {
        options: &'static [(&'static str, &'static str)],
        selected: usize,
    },
    /// Zero or more choices among fixed options, with a hover cursor.
    MultiSelect {
        options: &'static [&'static str],
        chosen: Vec<bool>,
        cursor: usize,
    },
    Checkbox(bool),
    /// Donation amount: preset buttons plus a custom override. Typing a
    /// custom amount clears the preset; picking a preset clears the custom
    /// text, mirroring the donation page controls.
    Amount {
        selected: Option<usize>,
        custom: String,
    },
}

/// A single form field with its configuration and current value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(String::new()),
            is_multiline: false,
        }
    }

    pub fn select(
        name: &str,
        label: &str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options,
                selected: 0,
            },
            is_multiline: false,
        }
    }

    pub fn multi_select(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::MultiSelect {
                options,
                chosen: vec![false; options.len()],
                cursor: 0,
            },
            is_multiline: false,
        }
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(false),
            is_multiline: false,
        }
    }

    pub fn amount(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Amount {
                selected: Some(DEFAULT_AMOUNT_PRESET),
                custom: String::new(),
            },
            is_multiline: false,
        }
    }

    /// Text content for text and numeric fields (empty otherwise)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s,
            _ => "",
        }
    }

    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => {
                s.clear();
                s.push_str(value);
            }
            _ => {}
        }
    }

    /// Effective donation amount: custom text wins over the preset.
    pub fn effective_amount(&self) -> Option<f64> {
        match &self.value {
            FieldValue::Amount { selected, custom } => {
                if custom.is_empty() {
                    selected.map(|i| f64::from(AMOUNT_PRESETS[i]))
                } else {
                    custom.parse().ok()
                }
            }
            _ => None,
        }
    }

    /// Append a typed character
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            // Whole numbers only
            FieldValue::Number(s) => {
                if c.is_ascii_digit() {
                    s.push(c);
                }
            }
            FieldValue::Amount { selected, custom } => {
                if c.is_ascii_digit() || c == '.' {
                    custom.push(c);
                    *selected = None;
                }
            }
            _ => {}
        }
    }

    /// Remove the last typed character
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => {
                s.pop();
            }
            FieldValue::Amount { selected, custom } => {
                custom.pop();
                if custom.is_empty() && selected.is_none() {
                    *selected = Some(DEFAULT_AMOUNT_PRESET);
                }
            }
            _ => {}
        }
    }

    /// Toggle a checkbox or the hovered multi-select option
    pub fn toggle(&mut self) {
        match &mut self.value {
            FieldValue::Checkbox(checked) => *checked = !*checked,
            FieldValue::MultiSelect { chosen, cursor, .. } => {
                if let Some(slot) = chosen.get_mut(*cursor) {
                    *slot = !*slot;
                }
            }
            _ => {}
        }
    }

    /// Move the choice cursor left (selects, multi-selects, amount presets)
    pub fn cycle_left(&mut self) {
        match &mut self.value {
            FieldValue::Select { options, selected } => {
                *selected = if *selected == 0 {
                    options.len() - 1
                } else {
                    *selected - 1
                };
            }
            FieldValue::MultiSelect {
                options, cursor, ..
            } => {
                *cursor = if *cursor == 0 {
                    options.len() - 1
                } else {
                    *cursor - 1
                };
            }
            FieldValue::Amount { selected, custom } => {
                let next = match *selected {
                    Some(0) | None => AMOUNT_PRESETS.len() - 1,
                    Some(i) => i - 1,
                };
                *selected = Some(next);
                custom.clear();
            }
            _ => {}
        }
    }

    /// Move the choice cursor right
    pub fn cycle_right(&mut self) {
        match &mut self.value {
            FieldValue::Select { options, selected } => {
                *selected = (*selected + 1) % options.len();
            }
            FieldValue::MultiSelect {
                options, cursor, ..
            } => {
                *cursor = (*cursor + 1) % options.len();
            }
            FieldValue::Amount { selected, custom } => {
                let next = match *selected {
                    Some(i) => (i + 1) % AMOUNT_PRESETS.len(),
                    None => 0,
                };
                *selected = Some(next);
                custom.clear();
            }
            _ => {}
        }
    }

    /// Snapshot the field's value for validation and payload shaping
    pub fn draft_value(&self) -> DraftValue {
        match &self.value {
            FieldValue::Text(s) => DraftValue::Text(s.clone()),
            FieldValue::Number(s) => DraftValue::Number(s.trim().parse().ok()),
            FieldValue::Select { options, selected } => {
                DraftValue::Text(options[*selected].0.to_string())
            }
            FieldValue::MultiSelect {
                options, chosen, ..
            } => DraftValue::List(
                options
                    .iter()
                    .zip(chosen)
                    .filter(|(_, &picked)| picked)
                    .map(|(&opt, _)| opt.to_string())
                    .collect(),
            ),
            FieldValue::Checkbox(checked) => DraftValue::Flag(*checked),
            FieldValue::Amount { .. } => DraftValue::Number(self.effective_amount()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHODS: &[(&str, &str)] = &[("credit_card", "Credit card"), ("paypal", "PayPal")];
    const INTERESTS: &[&str] = &["education", "health", "events"];

    mod text_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn push_and_pop_edit_the_value() {
            let mut field = FormField::text("name", "Name", false);
            field.push_char('A');
            field.push_char('d');
            field.push_char('a');
            assert_eq!(field.as_text(), "Ada");
            field.pop_char();
            assert_eq!(field.as_text(), "Ad");
        }

        #[test]
        fn number_fields_reject_letters() {
            let mut field = FormField::number("age", "Age");
            field.push_char('2');
            field.push_char('x');
            field.push_char('1');
            assert_eq!(field.as_text(), "21");
        }

        #[test]
        fn number_fields_reject_decimal_points() {
            let mut field = FormField::number("age", "Age");
            for c in "18.9".chars() {
                field.push_char(c);
            }
            assert_eq!(field.as_text(), "189");
            assert_eq!(field.draft_value(), DraftValue::Number(Some(189.0)));
        }

        #[test]
        fn number_draft_parses_or_is_none() {
            let mut field = FormField::number("age", "Age");
            assert_eq!(field.draft_value(), DraftValue::Number(None));
            field.set_text("18");
            assert_eq!(field.draft_value(), DraftValue::Number(Some(18.0)));
        }
    }

    mod select {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn cycles_with_wraparound() {
            let mut field = FormField::select("payment_method", "Payment method", METHODS);
            field.cycle_left();
            assert_eq!(field.draft_value(), DraftValue::Text("paypal".into()));
            field.cycle_right();
            assert_eq!(field.draft_value(), DraftValue::Text("credit_card".into()));
        }
    }

    mod multi_select {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn toggles_hovered_option() {
            let mut field = FormField::multi_select("interests", "Interests", INTERESTS);
            field.toggle();
            field.cycle_right();
            field.cycle_right();
            field.toggle();
            assert_eq!(
                field.draft_value(),
                DraftValue::List(vec!["education".into(), "events".into()])
            );
        }

        #[test]
        fn untoggling_removes_the_choice() {
            let mut field = FormField::multi_select("interests", "Interests", INTERESTS);
            field.toggle();
            field.toggle();
            assert_eq!(field.draft_value(), DraftValue::List(vec![]));
        }
    }

    mod amount {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn defaults_to_the_featured_preset() {
            let field = FormField::amount("amount", "Amount");
            assert_eq!(field.effective_amount(), Some(25.0));
        }

        #[test]
        fn typing_a_custom_amount_clears_the_preset() {
            let mut field = FormField::amount("amount", "Amount");
            field.push_char('7');
            field.push_char('5');
            assert_eq!(field.effective_amount(), Some(75.0));
            match &field.value {
                FieldValue::Amount { selected, .. } => assert_eq!(*selected, None),
                other => panic!("unexpected value {other:?}"),
            }
        }

        #[test]
        fn picking_a_preset_clears_the_custom_text() {
            let mut field = FormField::amount("amount", "Amount");
            field.push_char('7');
            field.cycle_right();
            assert_eq!(field.effective_amount(), Some(10.0));
        }

        #[test]
        fn erasing_the_custom_text_restores_the_default() {
            let mut field = FormField::amount("amount", "Amount");
            field.push_char('7');
            field.pop_char();
            assert_eq!(field.effective_amount(), Some(25.0));
        }
    }

    mod checkbox {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn toggle_flips_the_flag() {
            let mut field = FormField::checkbox("anonymous", "Give anonymously");
            assert_eq!(field.draft_value(), DraftValue::Flag(false));
            field.toggle();
            assert_eq!(field.draft_value(), DraftValue::Flag(true));
        }
    }
}
