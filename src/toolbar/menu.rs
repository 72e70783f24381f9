//! Frontend-agnostic menu description. The toolbar projects its lists into
//! these records; frontends decide how to draw them and report interactions
//! back as command ids.

#[derive(Debug, Clone)]
pub struct MenuSpec {
    pub items: Vec<MenuItem>,
}

impl MenuSpec {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Selectable entries, in display order.
    pub fn actions(&self) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, MenuItem::Action { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.actions().next().is_none()
    }
}

#[derive(Debug, Clone)]
pub enum MenuItem {
    Header(String),
    Separator,
    Action {
        id: u16,
        title: String,
        checked: bool,
        enabled: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_skip_headers_and_separators() {
        let spec = MenuSpec::new(vec![
            MenuItem::Header("Themes".to_string()),
            MenuItem::Action {
                id: 1,
                title: "Light".to_string(),
                checked: false,
                enabled: true,
            },
            MenuItem::Separator,
            MenuItem::Action {
                id: 2,
                title: "Dark".to_string(),
                checked: false,
                enabled: true,
            },
        ]);
        assert_eq!(spec.actions().count(), 2);
        assert!(!spec.is_empty());
    }

    #[test]
    fn spec_with_only_headers_is_empty() {
        let spec = MenuSpec::new(vec![MenuItem::Header("Themes".to_string())]);
        assert!(spec.is_empty());
    }
}
