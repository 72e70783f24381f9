//! Plain-text rendering of the toolbar row and dropdown menus, used by the
//! terminal frontend. Frontends with richer widget sets can ignore this and
//! draw the `MenuSpec`s themselves.

use crate::toolbar::menu::{MenuItem, MenuSpec};

/// One line for the toolbar row: `[Themes]  [Settings]  (Reset)  [RTL*]`.
/// Brackets mean the control is live, parentheses that it is disabled, a
/// trailing `*` that it is checked (open menu or active checkbox).
pub fn render_toolbar(spec: &MenuSpec) -> String {
    spec.actions()
        .filter_map(|item| match item {
            MenuItem::Action {
                title,
                checked,
                enabled,
                ..
            } => Some(match (enabled, checked) {
                (false, _) => format!("({title})"),
                (true, true) => format!("[{title}*]"),
                (true, false) => format!("[{title}]"),
            }),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Boxed, numbered dropdown; the number is what the frontend maps back to a
/// selection index.
pub fn render_menu(spec: &MenuSpec) -> String {
    let title = spec
        .items
        .iter()
        .find_map(|item| match item {
            MenuItem::Header(title) => Some(title.as_str()),
            _ => None,
        })
        .unwrap_or("Menu");

    let mut rows: Vec<String> = spec
        .actions()
        .enumerate()
        .filter_map(|(idx, item)| match item {
            MenuItem::Action { title, .. } => Some(format!("{}. {}", idx + 1, title)),
            _ => None,
        })
        .collect();
    if rows.is_empty() {
        rows.push("(no entries)".to_string());
    }

    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .chain([title.chars().count()])
        .max()
        .unwrap_or(0);

    let border = format!("+{}+", "-".repeat(width + 2));
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border.clone());
    lines.push(format!("| {title:<width$} |"));
    lines.push(format!("|{}|", "-".repeat(width + 2)));
    for row in &rows {
        lines.push(format!("| {row:<width$} |"));
    }
    lines.push(border);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u16, title: &str, checked: bool, enabled: bool) -> MenuItem {
        MenuItem::Action {
            id,
            title: title.to_string(),
            checked,
            enabled,
        }
    }

    #[test]
    fn toolbar_marks_disabled_and_checked_controls() {
        let spec = MenuSpec::new(vec![
            action(1, "Themes", false, true),
            action(2, "Settings", false, false),
            action(3, "RTL", true, true),
        ]);
        assert_eq!(render_toolbar(&spec), "[Themes]  (Settings)  [RTL*]");
    }

    #[test]
    fn menu_lists_numbered_entries_under_the_header() {
        let spec = MenuSpec::new(vec![
            MenuItem::Header("Themes".to_string()),
            action(1, "Light", false, true),
            action(2, "Dark", false, true),
        ]);
        let out = render_menu(&spec);
        assert!(out.contains("| Themes"));
        assert!(out.contains("| 1. Light"));
        assert!(out.contains("| 2. Dark"));
        assert!(out.starts_with('+'));
        assert!(out.ends_with('+'));
    }

    #[test]
    fn menu_rows_share_one_width() {
        let spec = MenuSpec::new(vec![
            MenuItem::Header("Settings".to_string()),
            action(1, "appearance: outline", false, true),
            action(2, "size: tiny", false, true),
        ]);
        let out = render_menu(&spec);
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_menu_renders_placeholder_row() {
        let spec = MenuSpec::new(vec![MenuItem::Header("Themes".to_string())]);
        assert!(render_menu(&spec).contains("(no entries)"));
    }
}
