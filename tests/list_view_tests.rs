use recipe_shelf::app::paginator::paginate;
use recipe_shelf::app::{AppState, PAGE_SIZE};
use recipe_shelf::infrastructure::{Document, MemoryDocument, Region};
use recipe_shelf::{Catalog, Interaction, MealType, Recipe, RecipeListView, RecipeShelfError};

fn mount(catalog: Catalog) -> RecipeListView<MemoryDocument> {
    RecipeListView::mount(AppState::new(catalog), MemoryDocument::new()).unwrap()
}

fn numbered_catalog(len: usize) -> Catalog {
    Catalog::new(
        (1..=len)
            .map(|n| Recipe::new(n.to_string(), format!("Recipe {n}"), format!("img/{n}.jpg"), MealType::Lunch))
            .collect(),
    )
}

fn card_count(view: &RecipeListView<MemoryDocument>) -> usize {
    view.document()
        .region(Region::CardList)
        .unwrap()
        .matches("recipe-card-link")
        .count()
}

fn pagination(view: &RecipeListView<MemoryDocument>) -> &str {
    view.document().region(Region::Pagination).unwrap()
}

fn nav(label: &str) -> Interaction {
    Interaction::NavClicked {
        label: label.to_string(),
    }
}

fn page(data_page: &str) -> Interaction {
    Interaction::PaginationClicked {
        data_page: data_page.to_string(),
    }
}

#[test]
fn test_mount_renders_first_page_with_all_highlighted() {
    let view = mount(numbered_catalog(8));

    assert_eq!(card_count(&view), PAGE_SIZE);
    assert_eq!(view.document().active_nav(), Some("All"));
    assert!(pagination(&view).contains(r##"data-page="prev" class="disabled""##));
    assert!(pagination(&view).contains(r##"data-page="1" class="active""##));
    assert!(pagination(&view).contains(r##"data-page="2" class="""##));
}

#[test]
fn test_dinner_filter_fits_on_one_page() {
    let meals = [
        MealType::Dinner,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Breakfast,
        MealType::Dinner,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Breakfast,
        MealType::Dinner,
        MealType::Lunch,
    ];
    let catalog = Catalog::new(
        meals
            .iter()
            .enumerate()
            .map(|(i, &meal)| Recipe::new(format!("d{i}"), format!("Dish {i}"), format!("{i}.jpg"), meal))
            .collect(),
    );
    let mut view = mount(catalog);

    assert!(view.dispatch(&nav("Dinner")).unwrap());
    assert_eq!(card_count(&view), 5);

    let controls = pagination(&view);
    assert_eq!(controls.matches("data-page=").count(), 3);
    assert!(controls.contains(r##"data-page="1" class="active""##));
    assert!(!controls.contains(r#"data-page="2""#));

    let before = view.document().clone();
    assert!(!view.dispatch(&page("2")).unwrap());
    assert_eq!(view.document(), &before);
    assert_eq!(view.state().current_page(), 1);
}

#[test]
fn test_search_is_case_insensitive() {
    for term in ["toast", "TOAST", "Toast", "  tOaSt  "] {
        let mut view = mount(Catalog::builtin());
        view.document_mut().type_search(term);

        assert!(view.dispatch(&Interaction::SearchClicked).unwrap());
        assert_eq!(view.state().active_subset.len(), 1, "term {term:?}");
        assert_eq!(view.state().active_subset[0].name, "Avocado Toast");
        assert!(view
            .document()
            .region(Region::CardList)
            .unwrap()
            .contains(r#"href="recipes.html?id=Avocado_Toast""#));
    }
}

#[test]
fn test_enter_key_submits_search() {
    let mut view = mount(Catalog::builtin());
    view.document_mut().type_search("salad");

    assert!(!view
        .dispatch(&Interaction::SearchKeyPressed {
            key: "Shift".to_string()
        })
        .unwrap());
    assert_eq!(card_count(&view), 6);

    assert!(view
        .dispatch(&Interaction::SearchKeyPressed {
            key: "Enter".to_string()
        })
        .unwrap());
    assert_eq!(card_count(&view), 2);
    assert_eq!(view.document().active_nav(), None);
}

#[test]
fn test_meal_selection_after_search_clears_search() {
    let mut view = mount(Catalog::builtin());
    view.document_mut().type_search("beef");
    view.dispatch(&Interaction::SearchClicked).unwrap();
    assert_eq!(view.state().active_subset.len(), 2);

    assert!(view.dispatch(&nav("Lunch")).unwrap());

    assert_eq!(view.document().search_text(), "");
    assert_eq!(view.document().active_nav(), Some("Lunch"));
    assert_eq!(card_count(&view), 2);
    assert!(view.state().active_subset.iter().all(|r| r.meal_type == MealType::Lunch));
}

#[test]
fn test_thirteen_items_last_page() {
    let mut view = mount(numbered_catalog(13));

    assert!(view.dispatch(&page("3")).unwrap());
    assert_eq!(card_count(&view), 1);

    let controls = pagination(&view);
    assert!(controls.contains(r##"data-page="next" class="disabled""##));
    assert!(controls.contains(r##"data-page="3" class="active""##));
    assert!(controls.contains(r##"data-page="prev" class="""##));

    assert!(!view.dispatch(&page("next")).unwrap());
    assert!(!view.dispatch(&page("4")).unwrap());
    assert_eq!(view.state().current_page(), 3);

    assert!(view.dispatch(&page("prev")).unwrap());
    assert_eq!(view.state().current_page(), 2);
    assert_eq!(card_count(&view), 6);
}

#[test]
fn test_stale_page_clamps_to_last() {
    let subset: Vec<usize> = (1..=13).collect();
    let clamped = paginate(&subset, PAGE_SIZE, 4);
    assert_eq!(clamped.effective_page, Some(3));
    assert_eq!(clamped.items, &[13]);

    let mut state = AppState::new(numbered_catalog(13));
    assert_eq!(state.request_page(4), 3);
    let view = RecipeListView::mount(state, MemoryDocument::new()).unwrap();

    assert_eq!(view.state().current_page(), 3);
    assert_eq!(card_count(&view), 1);
    assert!(pagination(&view).contains(r##"data-page="3" class="active""##));
}

#[test]
fn test_prev_after_restored_stale_page_moves_back() {
    let mut state = AppState::new(numbered_catalog(13));
    state.request_page(4);
    let mut view = RecipeListView::mount(state, MemoryDocument::new()).unwrap();
    let last_page_cards = view.document().region(Region::CardList).unwrap().to_string();

    assert!(view.dispatch(&page("prev")).unwrap());
    assert_eq!(view.state().current_page(), 2);
    assert_eq!(card_count(&view), 6);
    assert_ne!(view.document().region(Region::CardList).unwrap(), last_page_cards);
    assert!(pagination(&view).contains(r##"data-page="2" class="active""##));
}

#[test]
fn test_clearing_search_field_keeps_search_results() {
    let mut view = mount(Catalog::builtin());
    view.document_mut().type_search("salad");
    view.dispatch(&Interaction::SearchClicked).unwrap();
    let rendered = view.document().region(Region::CardList).unwrap().to_string();

    view.document_mut().type_search("");

    assert_eq!(view.state().active_subset.len(), 2);
    assert_eq!(view.document().active_nav(), None);
    assert_eq!(view.document().region(Region::CardList).unwrap(), rendered);
}

#[test]
fn test_empty_results_show_message_without_pagination() {
    let mut view = mount(Catalog::builtin());
    view.document_mut().type_search("sushi");
    view.dispatch(&Interaction::SearchClicked).unwrap();

    let cards = view.document().region(Region::CardList).unwrap();
    assert!(cards.contains("No recipes found matching the criteria."));
    assert_eq!(pagination(&view), "");

    assert!(!view.dispatch(&page("1")).unwrap());
}

#[test]
fn test_unrecognized_meal_label_yields_no_results() {
    let mut view = mount(Catalog::builtin());

    assert!(view.dispatch(&nav("Dessert")).unwrap());
    assert!(view.state().active_subset.is_empty());
    assert!(view
        .document()
        .region(Region::CardList)
        .unwrap()
        .contains("No recipes found matching the criteria."));
    assert_eq!(view.document().active_nav(), None);
}

#[test]
fn test_all_restores_full_catalog() {
    let mut view = mount(Catalog::builtin());
    view.dispatch(&nav("Breakfast")).unwrap();
    assert_eq!(card_count(&view), 2);

    view.dispatch(&nav("All")).unwrap();
    assert_eq!(view.state().active_subset.len(), 7);
    assert_eq!(view.document().active_nav(), Some("All"));
}

#[test]
fn test_mount_fails_without_region() {
    for region in Region::ALL {
        let doc = MemoryDocument::new().without_region(region);
        let result = RecipeListView::mount(AppState::new(Catalog::builtin()), doc);

        match result {
            Err(RecipeShelfError::MissingRegion(missing)) => assert_eq!(missing, region),
            other => panic!("expected missing {region}, got {other:?}"),
        }
    }
}

#[test]
fn test_into_document_keeps_rendered_markup() {
    let mut view = mount(numbered_catalog(7));
    view.dispatch(&page("next")).unwrap();

    let doc = view.into_document();
    assert_eq!(
        doc.region(Region::CardList).unwrap().matches("recipe-card-link").count(),
        1
    );
}
