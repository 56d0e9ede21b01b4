//! Text and JSON rendering of a [`CatalogueView`].

use unicode_width::UnicodeWidthStr;

use crate::state::{CatalogueView, OwnerStyle, ProductRow};

/// Message shown instead of the table when nothing matches.
pub const NO_MATCH_MESSAGE: &str = "No products matching selected criteria";

const TITLE: &str = "Product Categories";
const ALL_CATEGORIES: &str = "All";
const PANEL_LABEL_WIDTH: usize = 12;
const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];
const ANSI_BLUE: &str = "\u{1b}[34m";
const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_RESET: &str = "\u{1b}[0m";

/// Options controlling text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap owner names in ANSI colour according to their style.
    pub color: bool,
}

/// Renders the filter panel and the product table as plain text.
///
/// # Example
///
/// ```
/// use product_catalogue::{CatalogueView, NO_MATCH_MESSAGE, RenderOptions, render_text};
///
/// let view = CatalogueView {
///     owner_tabs: vec![],
///     query: "kiwi".to_owned(),
///     category_chips: vec![],
///     rows: vec![],
/// };
///
/// let text = render_text(&view, RenderOptions::default());
/// assert!(text.contains(NO_MATCH_MESSAGE));
/// ```
#[must_use]
pub fn render_text(view: &CatalogueView, options: RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");

    let tabs: Vec<String> = view
        .owner_tabs
        .iter()
        .map(|tab| {
            if tab.is_active {
                format!("[{}]", tab.label)
            } else {
                tab.label.clone()
            }
        })
        .collect();
    push_field(&mut out, "Owners:", &tabs.join("  "));
    push_field(&mut out, "Search:", &view.query);

    let chips: Vec<&str> = std::iter::once(ALL_CATEGORIES)
        .chain(
            view.category_chips
                .iter()
                .map(|category| category.title.as_str()),
        )
        .collect();
    push_field(&mut out, "Categories:", &chips.join("  "));
    out.push('\n');

    if view.is_empty() {
        push_table_line(&mut out, NO_MATCH_MESSAGE);
    } else {
        render_table(&mut out, &view.rows, options);
    }

    out
}

/// Serialises the view as pretty-printed JSON.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialisation fails.
pub fn render_json(view: &CatalogueView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

fn render_table(out: &mut String, rows: &[ProductRow], options: RenderOptions) {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.name.clone(),
                row.category.clone(),
                row.owner.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header_cells = HEADERS.map(str::to_owned);
    push_table_line(out, &format_row(&header_cells, &widths, None));
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_table_line(out, &rule.join("-+-"));

    for (row, cell_row) in rows.iter().zip(&cells) {
        let style = if options.color { row.owner_style } else { None };
        push_table_line(out, &format_row(cell_row, &widths, style));
    }
}

/// Pads every cell to its column's display width; the owner column takes the
/// colour.
fn format_row(cells: &[String; 4], widths: &[usize; 4], style: Option<OwnerStyle>) -> String {
    let owner_column = HEADERS.len() - 1;
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (cell, &width))| {
            let fill = " ".repeat(width.saturating_sub(cell.width()));
            match style.filter(|_| index == owner_column) {
                Some(owner_style) => {
                    format!("{}{cell}{ANSI_RESET}{fill}", ansi_colour(owner_style))
                }
                None => format!("{cell}{fill}"),
            }
        })
        .collect();
    padded.join(" | ")
}

const fn ansi_colour(style: OwnerStyle) -> &'static str {
    match style {
        OwnerStyle::Link => ANSI_BLUE,
        OwnerStyle::Danger => ANSI_RED,
    }
}

/// Writes a panel line; `value` is echoed verbatim.
fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(label);
    if !value.is_empty() {
        out.push_str(&" ".repeat(PANEL_LABEL_WIDTH.saturating_sub(label.len())));
        out.push_str(value);
    }
    out.push('\n');
}

/// Writes a table line without the last column's padding.
fn push_table_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
