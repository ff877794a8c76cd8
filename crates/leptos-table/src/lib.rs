//! Leptos Table Utilities
//!
//! Read-only data table for Leptos.
//! Rows describe themselves through [`TableRow`]; the table handles
//! headers, keyed rendering, the empty state and optional row selection.

use leptos::prelude::*;

/// Placeholder shown for missing optional values
pub const MISSING: &str = "N/A";

/// A value that can be rendered as one table row
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Stable key for keyed rendering
    fn key(&self) -> String;

    /// Cell texts, one per header
    fn cells(&self) -> Vec<String>;
}

/// Render an optional value, falling back to [`MISSING`]
pub fn or_missing<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| MISSING.to_string())
}

/// Render a boolean as Yes/No
pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Data table with a header row and keyed body rows
#[component]
pub fn DataTable<T>(
    /// Column titles
    headers: &'static [&'static str],
    /// Rows to render
    rows: Signal<Vec<T>>,
    /// Text shown when there are no rows
    #[prop(default = "No records")]
    empty_text: &'static str,
    /// Invoked with the clicked row
    #[prop(optional)]
    on_select: Option<Callback<T>>,
) -> impl IntoView
where
    T: TableRow,
{
    let column_count = headers.len().to_string();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <Show when=move || rows.with(|r| r.is_empty())>
                    <tr class="data-table-empty">
                        <td colspan=column_count.clone()>{empty_text}</td>
                    </tr>
                </Show>
                <For
                    each=move || rows.get()
                    key=|row| row.key()
                    children=move |row: T| {
                        let cells = row.cells();
                        let clickable = on_select.is_some();
                        view! {
                            <tr
                                class=if clickable { "data-table-row clickable" } else { "data-table-row" }
                                on:click=move |_| {
                                    if let Some(cb) = on_select {
                                        cb.run(row.clone());
                                    }
                                }
                            >
                                {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_missing() {
        assert_eq!(or_missing(Some(3)), "3");
        assert_eq!(or_missing(None::<u32>), "N/A");
        assert_eq!(or_missing(Some("memo")), "memo");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
