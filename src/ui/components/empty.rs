//! Empty state component renderer.
//!
//! Shown in the card list region when the selection matches nothing. The
//! pagination region is left empty alongside it.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message as a centered paragraph.
#[must_use]
pub fn render_empty_state(empty: &EmptyState) -> String {
    format!(
        "<p style='text-align:center;'>{}</p>",
        escape_html(&empty.message)
    )
}
