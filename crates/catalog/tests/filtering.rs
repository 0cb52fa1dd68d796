use lazykitchen_catalog::{
    Catalog, IngredientFilter, RecipeBook, Selection, TagFilter, categories,
};

fn keywords() -> Vec<&'static str> {
    vec!["", "雞", "蔬", "調味料", "蛋", "油", "x", "肉類", "米飯", "番"]
}

fn category_options(catalog: &Catalog) -> Vec<Option<String>> {
    let mut options = vec![None, Some("不存在".to_owned())];
    options.extend(categories(&catalog.ingredients).into_iter().map(Some));
    options
}

#[test]
fn ingredient_filter_is_idempotent() {
    let catalog = Catalog::builtin();

    for keyword in keywords() {
        for category in category_options(&catalog) {
            let filter = IngredientFilter::new(keyword, category.clone());

            let once: Vec<_> = filter
                .apply(&catalog.ingredients)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<_> = filter.apply(&once).into_iter().cloned().collect();

            assert_eq!(once, twice, "keyword={keyword:?} category={category:?}");
        }
    }
}

#[test]
fn ingredient_filter_preserves_catalog_order() {
    let catalog = Catalog::builtin();

    for keyword in keywords() {
        let found = IngredientFilter::new(keyword, None).apply(&catalog.ingredients);
        let positions: Vec<usize> = found
            .iter()
            .map(|f| {
                catalog
                    .ingredients
                    .iter()
                    .position(|i| i.id == f.id)
                    .unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn proceeding_shows_every_recipe() {
    let catalog = Catalog::builtin();
    let book = RecipeBook::new(catalog.recipes.clone(), catalog.comments.clone());
    let mut selection = Selection::default();
    let mut tags = TagFilter::default();
    tags.toggle("家常菜");

    assert!(selection.ensure_can_proceed().is_err());

    selection.toggle_in(&catalog.ingredients, "ing-4").unwrap();
    assert!(selection.ensure_can_proceed().is_ok());

    tags.clear();
    assert_eq!(tags.apply(book.all()).len(), catalog.recipes.len());
}

#[test]
fn recipe_serializes_with_snake_case_fields() {
    let catalog = Catalog::builtin();
    let value = serde_json::to_value(&catalog.recipes[0]).unwrap();

    assert_eq!(value["prep_time"], 10);
    assert_eq!(value["difficulty"], "simple");
    assert_eq!(value["community_stats"]["likes"], 342);
    assert!(value["steps"][0].get("timer").is_none());
    assert_eq!(value["steps"][3]["timer"], 120);
}
