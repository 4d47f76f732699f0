mod common;

use common::{days_from_ref, reference, stock, store_b, StockBuilder};
use datacerta::models::{ExpiryPolicy, FilterState, StatusClass};
use datacerta::services::stock_view::evaluate;

fn default_filter() -> FilterState {
    FilterState::default()
}

#[test]
fn classifies_scenario_records_under_stock_list_policy() {
    let records = vec![
        stock("Leite", days_from_ref(-2)),
        stock("Queijo", days_from_ref(2)),
        stock("Iogurte", days_from_ref(15)),
        stock("Arroz", days_from_ref(60)),
    ];

    let view = evaluate(&records, &default_filter(), reference(), ExpiryPolicy::StockList);

    assert_eq!(view.total_items, 4);
    assert_eq!(view.counts.expired, 1);
    assert_eq!(view.counts.critical, 1);
    assert_eq!(view.counts.warning, 1);
    assert_eq!(view.counts.ok, 1);
    assert_eq!(view.counts.total(), view.total_items);
}

#[test]
fn sorts_by_expiration_ascending_with_stable_ties() {
    let records = vec![
        stock("C", days_from_ref(10)),
        stock("A", days_from_ref(1)),
        stock("B1", days_from_ref(5)),
        stock("B2", days_from_ref(5)),
    ];

    let view = evaluate(&records, &default_filter(), reference(), ExpiryPolicy::StockList);
    let names: Vec<&str> = view
        .items
        .iter()
        .map(|r| r.product_description.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B1", "B2", "C"]);
}

#[test]
fn evaluate_is_idempotent() {
    let records = vec![
        stock("Leite", days_from_ref(-2)),
        stock("Queijo", days_from_ref(2)),
    ];
    let filter = default_filter();

    let first = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    let second = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(first, second);
}

#[test]
fn status_filter_constrains_counts_by_construction() {
    let records = vec![
        stock("Leite", days_from_ref(-2)),
        stock("Queijo", days_from_ref(2)),
        stock("Iogurte", days_from_ref(3)),
        stock("Arroz", days_from_ref(60)),
    ];
    let mut filter = default_filter();
    filter.status_classes.insert(StatusClass::Critical);

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);

    assert_eq!(view.counts.expired, 0);
    assert_eq!(view.counts.warning, 0);
    assert_eq!(view.counts.ok, 0);
    assert_eq!(view.counts.critical, view.total_items);
    assert_eq!(view.total_items, 2);
}

#[test]
fn pagination_clamps_and_slices() {
    let records: Vec<_> = (0i64..57)
        .map(|i| stock(&format!("P{}", i), days_from_ref(i)))
        .collect();
    let mut filter = default_filter();
    filter.page = 3;
    filter.page_size = 25;

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);

    assert_eq!(view.total_pages, 3);
    assert_eq!(view.page, 3);
    assert_eq!(view.start_index, 50);
    assert_eq!(view.end_index, 57);
    assert_eq!(view.items.len(), 7);
    assert_eq!(view.display_range(), (51, 57));
}

#[test]
fn page_beyond_range_clamps_to_last() {
    let records: Vec<_> = (0i64..10)
        .map(|i| stock(&format!("P{}", i), days_from_ref(i)))
        .collect();
    let mut filter = default_filter();
    filter.page = 99;
    filter.page_size = 4;

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.page, 3);
    assert_eq!(view.items.len(), 2);
}

#[test]
fn empty_result_is_not_an_error() {
    let view = evaluate(&[], &default_filter(), reference(), ExpiryPolicy::StockList);
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page, 1);
    assert_eq!(view.counts.total(), 0);
    assert_eq!(view.display_range(), (0, 0));
}

#[test]
fn archive_rule_hides_long_expired_records_by_default() {
    let records = vec![
        stock("Velho", days_from_ref(-31)),
        stock("Limite", days_from_ref(-30)),
        stock("Novo", days_from_ref(1)),
    ];

    let view = evaluate(&records, &default_filter(), reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 2);
    assert!(view
        .items
        .iter()
        .all(|r| r.product_description != "Velho"));
}

#[test]
fn explicit_date_range_overrides_archive_rule() {
    let records = vec![stock("Velho", days_from_ref(-31))];
    let mut filter = default_filter();
    filter.date_range_start = Some(days_from_ref(-40));

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 1);
}

#[test]
fn date_range_bounds_are_inclusive() {
    let records = vec![
        stock("Antes", days_from_ref(4)),
        stock("Inicio", days_from_ref(5)),
        stock("Fim", days_from_ref(10)),
        stock("Depois", days_from_ref(11)),
    ];
    let mut filter = default_filter();
    filter.date_range_start = Some(days_from_ref(5));
    filter.date_range_end = Some(days_from_ref(10));

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    let names: Vec<&str> = view
        .items
        .iter()
        .map(|r| r.product_description.as_str())
        .collect();
    assert_eq!(names, vec!["Inicio", "Fim"]);
}

#[test]
fn search_matches_description_code_and_batch_case_insensitively() {
    let records = vec![
        StockBuilder::new("Leite Integral", days_from_ref(3)).build(),
        StockBuilder::new("Arroz", days_from_ref(3)).code("LEI-99").build(),
        StockBuilder::new("Feijao", days_from_ref(3)).batch("leite2026").build(),
        StockBuilder::new("Macarrao", days_from_ref(3)).build(),
    ];
    let mut filter = default_filter();
    filter.search_text = Some("LEITE".to_string());

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 2);

    filter.search_text = Some("lei".to_string());
    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 3);
}

#[test]
fn store_and_location_filters_combine() {
    let records = vec![
        StockBuilder::new("A", days_from_ref(1))
            .location("Gondola 1")
            .build(),
        StockBuilder::new("B", days_from_ref(2))
            .store(store_b(), "Filial - Shopping")
            .location("Gondola 1")
            .build(),
        StockBuilder::new("C", days_from_ref(3))
            .store(store_b(), "Filial - Shopping")
            .location("Estoque Frio")
            .build(),
    ];

    let mut filter = default_filter();
    filter.store_ids.insert(store_b());
    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 2);

    filter.location_names.insert("Gondola 1".to_string());
    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 1);
    assert_eq!(view.items[0].product_description, "B");
}

#[test]
fn records_without_location_do_not_match_location_filter() {
    let records = vec![
        StockBuilder::new("Com local", days_from_ref(1))
            .location("Gondola 1")
            .build(),
        stock("Sem local", days_from_ref(1)),
    ];
    let mut filter = default_filter();
    filter.location_names.insert("Gondola 1".to_string());

    let view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(view.total_items, 1);
    assert_eq!(view.items[0].product_description, "Com local");
}

#[test]
fn dashboard_policy_shifts_the_critical_band() {
    // Five days out: critical on the list, warning on the dashboard.
    let records = vec![stock("Presunto", days_from_ref(5))];
    let filter = default_filter();

    let list_view = evaluate(&records, &filter, reference(), ExpiryPolicy::StockList);
    assert_eq!(list_view.counts.critical, 1);

    let dash_view = evaluate(&records, &filter, reference(), ExpiryPolicy::DashboardSummary);
    assert_eq!(dash_view.counts.warning, 1);
}
