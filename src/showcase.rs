//! Data carried by the showcase screen: themes and per-component settings.

use std::fmt;

use serde::Deserialize;

/// A named visual style offered by the showcase. Identity is positional:
/// menus refer to a theme by its index in the list supplied for the render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    pub title: String,
}

impl Theme {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Primitive value of a configurable display property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::Text(v) => f.write_str(v),
        }
    }
}

/// One configurable display property of a showcased component. Identity is
/// positional, same as [`Theme`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SettingDescriptor {
    pub property_name: String,
    pub value: SettingValue,
    #[serde(default)]
    pub description: Option<String>,
}

/// A setting the user picked, ready to apply to the showcased component.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChange {
    pub property_name: String,
    pub value: SettingValue,
}

impl SettingDescriptor {
    pub fn change(&self) -> SettingChange {
        SettingChange {
            property_name: self.property_name.clone(),
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_deserializes_from_bare_string() {
        let theme: Theme = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(theme, Theme::new("Dark"));
    }

    #[test]
    fn setting_value_deserializes_each_primitive() {
        let values: Vec<SettingValue> =
            serde_json::from_str(r#"[true, 3, 2.5, "outline"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                SettingValue::Bool(true),
                SettingValue::Int(3),
                SettingValue::Float(2.5),
                SettingValue::Text("outline".to_string()),
            ]
        );
    }

    #[test]
    fn setting_descriptor_defaults_missing_description() {
        let setting: SettingDescriptor =
            serde_json::from_str(r#"{"property_name": "size", "value": "tiny"}"#).unwrap();
        assert_eq!(setting.property_name, "size");
        assert_eq!(setting.description, None);
    }

    #[test]
    fn change_copies_name_and_value() {
        let setting = SettingDescriptor {
            property_name: "appearance".to_string(),
            value: SettingValue::Text("outline".to_string()),
            description: None,
        };
        let change = setting.change();
        assert_eq!(change.property_name, "appearance");
        assert_eq!(change.value, SettingValue::Text("outline".to_string()));
    }
}
