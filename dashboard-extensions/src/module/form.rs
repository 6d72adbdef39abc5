use super::{Contribution, Contributions};
use serde::{Deserialize, Serialize};

/// Input kind of an injected form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFieldType {
    #[default]
    Text,
    Number,
    Boolean,
    Select,
    Date,
    Json,
}

/// A field injected into a model's create/edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFieldDescriptor {
    /// Form section the field lands in, e.g. `general` or `organize`.
    pub zone: String,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub field_type: FormFieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormFieldDescriptor {
    pub fn new(zone: impl Into<String>, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
            label: label.into(),
            field_type: FormFieldType::Text,
            required: false,
            description: None,
        }
    }

    #[must_use]
    pub fn field_type(mut self, field_type: FormFieldType) -> Self {
        self.field_type = field_type;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Contribution for FormFieldDescriptor {
    fn check(&self) -> Result<(), String> {
        if self.zone.trim().is_empty() {
            return Err(format!("form field '{}' has an empty zone", self.name));
        }
        if self.name.trim().is_empty() {
            return Err("form field name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Constraints applied to a form field's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Defaults and validation for a form field, injected or built-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfigDescriptor {
    pub zone: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FormConfigDescriptor {
    pub fn new(zone: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            field: field.into(),
            default_value: None,
            validation: None,
        }
    }
}

impl Contribution for FormConfigDescriptor {
    fn check(&self) -> Result<(), String> {
        if self.field.trim().is_empty() {
            return Err("form config must name a field".to_string());
        }
        if let Some(FieldValidation {
            min: Some(min),
            max: Some(max),
            ..
        }) = &self.validation
            && min > max
        {
            return Err(format!(
                "form config '{}' has min {min} greater than max {max}",
                self.field
            ));
        }
        Ok(())
    }
}

/// Everything one model's forms receive: injected fields and their configs.
/// Fields and configs are appended independently on merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormExtension {
    #[serde(default)]
    pub forms: Vec<FormFieldDescriptor>,
    #[serde(default)]
    pub configs: Vec<FormConfigDescriptor>,
}

impl FormExtension {
    pub fn new(forms: Vec<FormFieldDescriptor>, configs: Vec<FormConfigDescriptor>) -> Self {
        Self { forms, configs }
    }
}

impl Contributions for FormExtension {
    fn extend_from(&mut self, later: &Self) {
        self.forms.extend_from(&later.forms);
        self.configs.extend_from(&later.configs);
    }

    fn is_empty(&self) -> bool {
        self.forms.is_empty() && self.configs.is_empty()
    }

    fn check(&self) -> Result<(), String> {
        Contributions::check(&self.forms)?;
        Contributions::check(&self.configs)
    }
}
