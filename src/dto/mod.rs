//! Wire DTOs exchanged with the REST backend and the rows shown in list views.

pub mod admin_user;
pub mod api;
pub mod business_config;
pub mod negocio;
pub mod notification;

/// Placeholder rendered for missing optional text in list rows.
pub const EMPTY_CELL: &str = "—";

/// Returns the value or [`EMPTY_CELL`] when it is absent or blank.
pub fn cell(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => EMPTY_CELL,
    }
}

/// Yes/no label used by boolean list columns.
pub fn yes_no(value: bool) -> &'static str {
    if value { "Sí" } else { "No" }
}
