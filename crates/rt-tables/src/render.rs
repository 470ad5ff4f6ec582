//! Two-column text rendering of tables for inspection and debugging.

use comfy_table::Table as Grid;
use comfy_table::presets::ASCII_MARKDOWN;

use crate::table::{Action, SelectionScheme, Table};

impl Table {
    /// Rows of (key, text) as shown by the `Display` impl.
    ///
    /// The key is the match set for dice tables, the weight for weighted
    /// tables, and the 1-based position for uniform tables.
    pub fn rows(&self) -> Vec<(String, String)> {
        match &self.scheme {
            SelectionScheme::DiceMatch { items, .. } => items
                .iter()
                .map(|item| (item.matches.to_string(), describe(&item.text, &item.action)))
                .collect(),
            SelectionScheme::Weighted { items } => items
                .iter()
                .map(|item| (item.weight.to_string(), describe(&item.text, &item.action)))
                .collect(),
            SelectionScheme::Uniform { items } => items
                .iter()
                .enumerate()
                .map(|(i, text)| ((i + 1).to_string(), text.clone()))
                .collect(),
        }
    }

    fn key_header(&self) -> &'static str {
        match self.scheme {
            SelectionScheme::DiceMatch { .. } => "Dice",
            SelectionScheme::Weighted { .. } => "Weight",
            SelectionScheme::Uniform { .. } => "#",
        }
    }
}

fn describe(text: &str, action: &Action) -> String {
    match action {
        Action::None => text.to_string(),
        Action::InvokeTable { table, .. } => format!("{text} (+ {table})"),
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut grid = Grid::new();
        grid.load_preset(ASCII_MARKDOWN)
            .set_header(vec![self.key_header(), "Text"]);
        for (key, text) in self.rows() {
            grid.add_row(vec![key, text]);
        }
        write!(f, "{grid}")
    }
}
