use serde::Serialize;

/// How a UI should render the control for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayHint {
    NumberInput,
    Selectbox,
    Checkbox,
}

/// Value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Int,
    Float,
    Str,
    Bool,
}

/// Type, bounds and default of a field, kept together so the default always
/// has the field's type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Constraint {
    Int {
        #[serde(rename = "min_value")]
        min: i64,
        #[serde(rename = "max_value")]
        max: i64,
        default: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<i64>,
    },
    Float {
        #[serde(rename = "min_value")]
        min: f64,
        #[serde(rename = "max_value")]
        max: f64,
        default: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Str {
        choices: &'static [&'static str],
        default: &'static str,
    },
    Bool {
        default: bool,
    },
}

/// Metadata for one configurable hyperparameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDescriptor {
    #[serde(flatten)]
    pub constraint: Constraint,
    pub display_hint: DisplayHint,
    pub label: &'static str,
    /// printf-style display format, when the UI should not use its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

impl FieldDescriptor {
    /// An integer field rendered as a number input.
    pub const fn int(label: &'static str, min: i64, max: i64, default: i64) -> Self {
        Self {
            constraint: Constraint::Int {
                min,
                max,
                default,
                step: None,
            },
            display_hint: DisplayHint::NumberInput,
            label,
            format: None,
        }
    }

    /// A float field rendered as a number input.
    pub const fn float(label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            constraint: Constraint::Float {
                min,
                max,
                default,
                step: None,
            },
            display_hint: DisplayHint::NumberInput,
            label,
            format: None,
        }
    }

    /// A string field rendered as a single-select over `choices`.
    pub const fn select(
        label: &'static str,
        choices: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            constraint: Constraint::Str { choices, default },
            display_hint: DisplayHint::Selectbox,
            label,
            format: None,
        }
    }

    /// A boolean field rendered as a checkbox.
    pub const fn checkbox(label: &'static str, default: bool) -> Self {
        Self {
            constraint: Constraint::Bool { default },
            display_hint: DisplayHint::Checkbox,
            label,
            format: None,
        }
    }

    /// Sets the step of an integer field.
    pub const fn with_int_step(self, step: i64) -> Self {
        match self.constraint {
            Constraint::Int {
                min, max, default, ..
            } => Self {
                constraint: Constraint::Int {
                    min,
                    max,
                    default,
                    step: Some(step),
                },
                ..self
            },
            _ => panic!("integer step on a non-integer field"),
        }
    }

    /// Sets the step of a float field.
    pub const fn with_float_step(self, step: f64) -> Self {
        match self.constraint {
            Constraint::Float {
                min, max, default, ..
            } => Self {
                constraint: Constraint::Float {
                    min,
                    max,
                    default,
                    step: Some(step),
                },
                ..self
            },
            _ => panic!("float step on a non-float field"),
        }
    }

    /// Same field, different integer default.
    pub const fn with_int_default(self, default: i64) -> Self {
        match self.constraint {
            Constraint::Int { min, max, step, .. } => Self {
                constraint: Constraint::Int {
                    min,
                    max,
                    default,
                    step,
                },
                ..self
            },
            _ => panic!("integer default on a non-integer field"),
        }
    }

    /// Same field, different float default.
    pub const fn with_float_default(self, default: f64) -> Self {
        match self.constraint {
            Constraint::Float { min, max, step, .. } => Self {
                constraint: Constraint::Float {
                    min,
                    max,
                    default,
                    step,
                },
                ..self
            },
            _ => panic!("float default on a non-float field"),
        }
    }

    pub const fn with_format(self, format: &'static str) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    pub const fn field_type(&self) -> FieldType {
        match self.constraint {
            Constraint::Int { .. } => FieldType::Int,
            Constraint::Float { .. } => FieldType::Float,
            Constraint::Str { .. } => FieldType::Str,
            Constraint::Bool { .. } => FieldType::Bool,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BASE: FieldDescriptor = FieldDescriptor::int("Epochs", 1, 1000, 10);

    #[test]
    fn override_only_touches_default() {
        let derived = BASE.with_int_default(1);
        assert_eq!(
            derived.constraint,
            Constraint::Int {
                min: 1,
                max: 1000,
                default: 1,
                step: None
            }
        );
        assert_eq!(derived.label, BASE.label);
        assert_eq!(derived.display_hint, BASE.display_hint);
    }

    #[test]
    #[should_panic(expected = "float default on a non-float field")]
    fn mismatched_override_panics() {
        let _ = BASE.with_float_default(0.5);
    }

    #[test]
    fn serializes_numeric_field() {
        let field = FieldDescriptor::float("Learning Rate", 1e-7, 1e-1, 1e-3)
            .with_float_step(1e-6)
            .with_format("%.2E");
        assert_eq!(
            serde_json::to_value(field).unwrap(),
            json!({
                "type": "float",
                "min_value": 1e-7,
                "max_value": 1e-1,
                "default": 1e-3,
                "step": 1e-6,
                "display_hint": "number_input",
                "label": "Learning Rate",
                "format": "%.2E",
            })
        );
    }

    #[test]
    fn serializes_choice_and_bool_fields() {
        let select = FieldDescriptor::select("Scheduler", &["linear", "cosine"], "linear");
        assert_eq!(
            serde_json::to_value(select).unwrap(),
            json!({
                "type": "str",
                "choices": ["linear", "cosine"],
                "default": "linear",
                "display_hint": "selectbox",
                "label": "Scheduler",
            })
        );

        let check = FieldDescriptor::checkbox("Prior preservation", false);
        assert_eq!(check.field_type(), FieldType::Bool);
        assert_eq!(
            serde_json::to_value(check).unwrap(),
            json!({
                "type": "bool",
                "default": false,
                "display_hint": "checkbox",
                "label": "Prior preservation",
            })
        );
    }
}
