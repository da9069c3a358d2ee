use timeline_chart::host::{ChartContext, ChartEvent, TimelineHooks, init};
use timeline_chart::model::{CellValue, ChartModel, Column, ColumnId, ColumnKind, DataView};
use timeline_chart::render::NullRenderer;
use timeline_chart::RenderOutcome;

struct RecordingContext {
    model: ChartModel,
    events: Vec<ChartEvent>,
}

impl ChartContext for RecordingContext {
    fn chart_model(&self) -> &ChartModel {
        &self.model
    }

    fn emit_event(&mut self, event: ChartEvent) {
        self.events.push(event);
    }
}

fn column(id: &str, kind: ColumnKind) -> Column {
    Column::new(id, format!("col {id}"), kind)
}

fn catalog() -> Vec<Column> {
    vec![
        column("ts-1", ColumnKind::Timestamp),
        column("at-1", ColumnKind::Attribute),
        column("m-1", ColumnKind::Measure),
    ]
}

#[test]
fn init_bundles_every_registered_hook() {
    let mut plugin: TimelineHooks<NullRenderer> = init(NullRenderer::default());
    let columns = catalog();

    // Auto-configuration, validation, and query derivation flow into one
    // another the way the host drives them.
    let configs = plugin.default_chart_config(&columns);
    assert_eq!(configs.len(), 1);
    assert!(plugin.validate_config(&configs).is_valid);

    let queries = plugin.queries_from_chart_config(&configs);
    assert_eq!(queries.len(), 1);
    let fetched: Vec<&str> = queries[0]
        .columns
        .iter()
        .map(|col| col.id.as_str())
        .collect();
    assert_eq!(fetched, vec!["ts-1", "at-1"]);

    let view = DataView::new(
        vec![ColumnId::from("ts-1"), ColumnId::from("at-1")],
        vec![
            vec![CellValue::from("2024-01-01"), CellValue::from("A")],
            vec![CellValue::from("2024-01-02"), CellValue::from("B")],
        ],
    );
    let mut ctx = RecordingContext {
        model: ChartModel::new(columns, configs, vec![view]),
        events: Vec::new(),
    };

    assert_eq!(plugin.render_chart(&mut ctx), RenderOutcome::Completed);
    assert_eq!(
        ctx.events,
        vec![ChartEvent::RenderStart, ChartEvent::RenderComplete]
    );
    assert!(plugin.runtime().has_chart());
    assert_eq!(plugin.runtime().renderer().last_point_count, 2);
}

#[test]
fn validate_hook_rejects_an_unconfigurable_catalog() {
    let plugin = init(NullRenderer::default());
    let configs = plugin.default_chart_config(&[column("m-1", ColumnKind::Measure)]);
    assert!(configs.is_empty());

    let result = plugin.validate_config(&configs);
    assert!(!result.is_valid);
    assert_eq!(
        result.error.as_deref(),
        Some("Please select at least one datetime and one category column")
    );
}

#[test]
fn render_hook_reports_faults_through_the_bundle() {
    let mut plugin = init(NullRenderer::default());
    plugin.runtime_mut().renderer_mut().fail_next_with("no container");

    let mut ctx = RecordingContext {
        model: ChartModel::new(Vec::new(), Vec::new(), Vec::new()),
        events: Vec::new(),
    };
    assert_eq!(plugin.render_chart(&mut ctx), RenderOutcome::Failed);
    assert_eq!(ctx.events.len(), 3);
    assert!(matches!(ctx.events[1], ChartEvent::RenderError { .. }));
}

#[test]
fn config_without_label_role_still_renders_points() {
    let mut plugin = init(NullRenderer::default());
    let columns = catalog();
    let configs = plugin.default_chart_config(&columns);

    // The auto-configured roles carry no "label" dimension; rendering
    // degrades to empty labels rather than failing.
    let view = DataView::new(
        vec![ColumnId::from("ts-1"), ColumnId::from("at-1")],
        vec![vec![CellValue::from("2024-01-01"), CellValue::from("A")]],
    );
    let mut ctx = RecordingContext {
        model: ChartModel::new(columns, configs, vec![view]),
        events: Vec::new(),
    };
    assert_eq!(plugin.render_chart(&mut ctx), RenderOutcome::Completed);
    assert_eq!(plugin.runtime().renderer().last_point_count, 1);
}
