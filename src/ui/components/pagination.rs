//! Pagination controls component renderer.
//!
//! Each control is an anchor carrying its target in `data-page`: `prev`,
//! `next` or a page number. The list view parses that attribute back into a
//! [`PageTarget`] when the control is activated.

use crate::app::{PageControl, PageTarget};
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination controls in display order.
///
/// # Example
///
/// ```rust
/// use recipe_shelf::app::paginator::page_controls;
/// use recipe_shelf::ui::components::render_pagination;
/// use recipe_shelf::ui::viewmodel::PaginationInfo;
///
/// let info = PaginationInfo { current_page: 1, page_count: 1, controls: page_controls(1, 1) };
/// assert_eq!(
///     render_pagination(&info),
///     concat!(
///         r##"<a href="#" data-page="prev" class="disabled">&lt;</a>"##,
///         r##"<a href="#" data-page="1" class="active">1</a>"##,
///         r##"<a href="#" data-page="next" class="disabled">&gt;</a>"##,
///     )
/// );
/// ```
#[must_use]
pub fn render_pagination(info: &PaginationInfo) -> String {
    info.controls.iter().map(render_control).collect()
}

fn render_control(control: &PageControl) -> String {
    let class = if control.disabled {
        "disabled"
    } else if control.active {
        "active"
    } else {
        ""
    };

    format!(
        r##"<a href="#" data-page="{target}" class="{class}">{label}</a>"##,
        target = control.target,
        label = control_label(control.target),
    )
}

fn control_label(target: PageTarget) -> String {
    match target {
        PageTarget::Prev => "&lt;".to_string(),
        PageTarget::Next => "&gt;".to_string(),
        PageTarget::Number(n) => n.to_string(),
    }
}
