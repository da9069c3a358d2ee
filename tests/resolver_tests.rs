use timeline_chart::model::{ChartConfig, Column, ColumnId, ColumnKind, Dimension};
use timeline_chart::shape::resolver::{column_ids_by_key, first_column_id};

fn attribute(id: &str) -> Column {
    Column::new(id, format!("col {id}"), ColumnKind::Attribute)
}

fn sample_config() -> ChartConfig {
    ChartConfig::new(
        "timeline",
        vec![
            Dimension::new("datetime", vec![attribute("dt-1")]),
            Dimension::new("category", vec![attribute("cat-1"), attribute("cat-2")]),
        ],
    )
}

#[test]
fn resolves_column_ids_in_configured_order() {
    let config = sample_config();
    let ids = column_ids_by_key(&config, "category");
    assert_eq!(ids, vec![ColumnId::from("cat-1"), ColumnId::from("cat-2")]);
}

#[test]
fn absent_role_yields_empty_list_not_error() {
    let config = sample_config();
    assert!(column_ids_by_key(&config, "label").is_empty());
    assert!(column_ids_by_key(&config, "").is_empty());
}

#[test]
fn empty_configuration_resolves_nothing() {
    let config = ChartConfig::new("timeline", Vec::new());
    assert!(column_ids_by_key(&config, "datetime").is_empty());
    assert_eq!(first_column_id(&config, "datetime"), None);
}

#[test]
fn first_column_id_picks_the_head_of_the_role() {
    let config = sample_config();
    assert_eq!(
        first_column_id(&config, "category"),
        Some(ColumnId::from("cat-1"))
    );
}

#[test]
fn role_with_no_columns_resolves_empty() {
    let config = ChartConfig::new(
        "timeline",
        vec![Dimension::new("datetime", Vec::new())],
    );
    assert!(column_ids_by_key(&config, "datetime").is_empty());
    assert_eq!(first_column_id(&config, "datetime"), None);
}
