use crate::showcase::{SettingDescriptor, SettingValue, Theme};

pub fn theme_label(theme: &Theme) -> &str {
    &theme.title
}

/// Menu label for a setting: its description when one is present, otherwise
/// a synthesized `"name: value"` pair.
pub fn setting_label(setting: &SettingDescriptor) -> String {
    match setting.description.as_deref() {
        Some(desc) if !desc.is_empty() => desc.to_string(),
        _ => format!("{}: {}", setting.property_name, setting.value),
    }
}

// Built-in showcase data used when no config file provides any; override
// with a config for real component galleries.
pub fn default_themes() -> Vec<Theme> {
    vec![Theme::new("Light"), Theme::new("Dark")]
}

pub fn default_settings() -> Vec<SettingDescriptor> {
    vec![
        SettingDescriptor {
            property_name: "appearance".to_string(),
            value: SettingValue::Text("outline".to_string()),
            description: None,
        },
        SettingDescriptor {
            property_name: "size".to_string(),
            value: SettingValue::Text("tiny".to_string()),
            description: None,
        },
        SettingDescriptor {
            property_name: "disabled".to_string(),
            value: SettingValue::Bool(true),
            description: Some("Render the component disabled".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(
        name: &str,
        value: SettingValue,
        description: Option<&str>,
    ) -> SettingDescriptor {
        SettingDescriptor {
            property_name: name.to_string(),
            value,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn label_uses_description_verbatim_when_present() {
        let s = setting(
            "disabled",
            SettingValue::Bool(true),
            Some("Render the component disabled"),
        );
        assert_eq!(setting_label(&s), "Render the component disabled");
    }

    #[test]
    fn label_synthesizes_pair_when_description_missing() {
        let s = setting("size", SettingValue::Text("tiny".to_string()), None);
        assert_eq!(setting_label(&s), "size: tiny");
    }

    #[test]
    fn label_treats_empty_description_as_missing() {
        let s = setting("size", SettingValue::Text("giant".to_string()), Some(""));
        assert_eq!(setting_label(&s), "size: giant");
    }

    #[test]
    fn label_formats_each_value_kind() {
        assert_eq!(
            setting_label(&setting("disabled", SettingValue::Bool(false), None)),
            "disabled: false"
        );
        assert_eq!(
            setting_label(&setting("elevation", SettingValue::Int(4), None)),
            "elevation: 4"
        );
        assert_eq!(
            setting_label(&setting("opacity", SettingValue::Float(0.5), None)),
            "opacity: 0.5"
        );
    }

    #[test]
    fn default_showcase_is_nonempty() {
        assert!(!default_themes().is_empty());
        assert!(!default_settings().is_empty());
    }
}
