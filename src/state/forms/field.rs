//! Form field value objects

use crate::input::{normalize, InputKind};

/// One selectable option of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Wire value sent to the API
    pub value: &'static str,
    /// Label shown in the form
    pub label: &'static str,
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: &'static [ChoiceOption],
        index: usize,
    },
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: FieldValue,
    /// Format applied on every keystroke; free text when `None`
    pub kind: Option<InputKind>,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new free text field
    pub fn text(label: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            kind: None,
            is_multiline,
        }
    }

    /// Create a free text field with initial value
    pub fn text_with_value(label: &str, value: &str) -> Self {
        Self {
            value: FieldValue::Text(value.to_string()),
            ..Self::text(label, false)
        }
    }

    /// Create a text field whose value is normalized to `kind` on every edit
    pub fn formatted(label: &str, kind: InputKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::text(label, false)
        }
    }

    /// Create a choice field, initially on the first option
    pub fn choice(label: &str, options: &'static [ChoiceOption]) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Choice { options, index: 0 },
            kind: None,
            is_multiline: false,
        }
    }

    /// Create a toggle field
    pub fn toggle(label: &str, on: bool) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Toggle(on),
            kind: None,
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Wire value of the selected option
    pub fn choice_value(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Choice { options, index } => options.get(*index).map(|o| o.value),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(true))
    }

    /// Whether keystrokes edit this field
    pub fn accepts_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_))
    }

    /// Replace the text value, normalizing it when the field has a format
    pub fn set_text(&mut self, raw: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = match self.kind {
                Some(kind) => normalize(kind, raw),
                None => raw.to_string(),
            };
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &self.value {
            let mut raw = s.clone();
            raw.push(c);
            self.set_text(&raw);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &self.value {
            let mut raw = s.clone();
            raw.pop();
            // Re-normalizing drops a dangling group separator
            self.set_text(&raw);
        }
    }

    /// Advance a choice to its next option, or flip a toggle
    pub fn cycle(&mut self) {
        match &mut self.value {
            FieldValue::Choice { options, index } => {
                if !options.is_empty() {
                    *index = (*index + 1) % options.len();
                }
            }
            FieldValue::Toggle(on) => *on = !*on,
            FieldValue::Text(_) => {}
        }
    }

    /// Step a choice back to its previous option, or flip a toggle
    pub fn cycle_back(&mut self) {
        match &mut self.value {
            FieldValue::Choice { options, index } => {
                if !options.is_empty() {
                    *index = (*index + options.len() - 1) % options.len();
                }
            }
            FieldValue::Toggle(on) => *on = !*on,
            FieldValue::Text(_) => {}
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, index } => options
                .get(*index)
                .map(|o| format!("◂ {} ▸", o.label))
                .unwrap_or_default(),
            FieldValue::Toggle(true) => "[x] Yes".to_string(),
            FieldValue::Toggle(false) => "[ ] No".to_string(),
        }
    }

    /// Placeholder shown for an empty formatted field
    pub fn placeholder(&self) -> Option<&'static str> {
        self.kind.map(|k| k.placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[ChoiceOption] = &[
        ChoiceOption {
            value: "A",
            label: "Alpha",
        },
        ChoiceOption {
            value: "B",
            label: "Beta",
        },
    ];

    #[test]
    fn test_free_text_push_and_pop() {
        let mut field = FormField::text("Name", false);
        field.push_char('a');
        field.push_char('-');
        assert_eq!(field.as_text(), "a-");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_formatted_field_normalizes_each_keystroke() {
        let mut field = FormField::formatted("Aadhaar", InputKind::NationalId);
        for c in "12345x".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "1234 5");
    }

    #[test]
    fn test_pop_drops_dangling_separator() {
        let mut field = FormField::formatted("Aadhaar", InputKind::NationalId);
        field.set_text("12345");
        field.pop_char();
        assert_eq!(field.as_text(), "1234");
    }

    #[test]
    fn test_phone_field_stops_at_ten_digits() {
        let mut field = FormField::formatted("Phone", InputKind::Phone);
        for c in "123456789012".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "1234567890");
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut field = FormField::choice("Type", OPTIONS);
        assert_eq!(field.choice_value(), Some("A"));
        field.cycle();
        assert_eq!(field.choice_value(), Some("B"));
        assert_eq!(field.display_value(), "◂ Beta ▸");
        field.cycle();
        assert_eq!(field.choice_value(), Some("A"));
    }

    #[test]
    fn test_choice_cycles_back_and_wraps() {
        let mut field = FormField::choice("Type", OPTIONS);
        field.cycle_back();
        assert_eq!(field.choice_value(), Some("B"));
        field.cycle_back();
        assert_eq!(field.choice_value(), Some("A"));
        field.cycle();
        field.cycle_back();
        assert_eq!(field.choice_value(), Some("A"));
    }

    #[test]
    fn test_choice_ignores_text_input() {
        let mut field = FormField::choice("Type", OPTIONS);
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.choice_value(), Some("A"));
        assert!(!field.accepts_text());
    }

    #[test]
    fn test_toggle() {
        let mut field = FormField::toggle("Active", true);
        assert!(field.as_toggle());
        field.cycle();
        assert!(!field.as_toggle());
        assert_eq!(field.display_value(), "[ ] No");
    }
}
