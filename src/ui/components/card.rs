//! Recipe card component renderer.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::CardItem;

/// Renders one card as a link to the recipe's detail page.
///
/// Every attribute value is escaped, the link included; a browser decodes it
/// back to exactly `recipes.html?id=<id>`.
///
/// # Example
///
/// ```rust
/// use recipe_shelf::ui::components::render_card;
/// use recipe_shelf::ui::viewmodel::CardItem;
///
/// let card = CardItem {
///     id: "3".to_string(),
///     href: "recipes.html?id=3".to_string(),
///     image: "images/salad.jpg".to_string(),
///     name: "Caesar Salad".to_string(),
/// };
/// assert!(render_card(&card).starts_with(r#"<a href="recipes.html?id=3" class="recipe-card-link">"#));
/// ```
#[must_use]
pub fn render_card(card: &CardItem) -> String {
    let name = escape_html(&card.name);
    format!(
        concat!(
            r#"<a href="{href}" class="recipe-card-link">"#,
            r#"<div class="recipe-card">"#,
            r#"<img src="{image}" alt="{name}">"#,
            r#"<div class="recipe-info"><h3>{name}</h3></div>"#,
            "</div></a>",
        ),
        href = escape_html(&card.href),
        image = escape_html(&card.image),
        name = name,
    )
}

/// Renders all cards of a page, in order.
#[must_use]
pub fn render_cards(cards: &[CardItem]) -> String {
    cards.iter().map(render_card).collect()
}
