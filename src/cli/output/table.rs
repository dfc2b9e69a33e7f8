//! Table output formatting for CLI commands
//!
//! Renders key/value summaries with comfy-table. Colors follow the
//! terminal's capabilities (and `NO_COLOR`) as reported by `console`.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

/// Render `rows` as a two-column table.
pub fn summary_table(rows: &[(&str, String)]) -> String {
    let use_colors = console::colors_enabled();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (label, value) in rows {
        let label_cell = if use_colors {
            Cell::new(label).add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            Cell::new(label)
        };
        table.add_row(vec![label_cell, Cell::new(value)]);
    }

    table.to_string()
}
