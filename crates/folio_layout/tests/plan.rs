//! End-to-end render plan scenarios

use folio_layout::{
    assemble, assemble_with_registry, BackgroundKind, BackgroundSpec, Breakpoint, ColumnSlot, ContentBlock,
    KnownBlocks, Layout, LayoutConfig, RenderPlan,
};

fn blocks(json: &str) -> Vec<ContentBlock> {
    ContentBlock::list_from_json(json).unwrap()
}

fn ids<'a>(entries: impl IntoIterator<Item = &'a folio_layout::RenderPlanEntry>) -> Vec<&'a str> {
    entries.into_iter().map(|entry| entry.block.id.as_str()).collect()
}

fn mixed_blocks() -> Vec<ContentBlock> {
    blocks(
        r##"[
            {"id": "a", "category": "text", "type": "heading", "order": 1, "columnAssignment": "1"},
            {"id": "b", "category": "text", "type": "paragraph", "order": 2, "columnAssignment": "2",
             "floatDirection": "left", "gridSpan": 2, "backgroundColor": "#eee"},
            {"id": "c", "category": "media", "type": "image", "order": 3, "floatDirection": "right",
             "displayMode": "below-breakpoint", "breakpoint": "lg"},
            {"id": "d", "category": "text", "type": "quote", "order": 4, "columnAssignment": 2,
             "enabled": false}
        ]"##,
    )
}

#[test]
fn flex_columns_zero_width_column_only_in_mobile_stack() {
    let config = LayoutConfig::from_json_str(
        r#"{"layout": "flex-columns", "column1Width": 60, "column2Width": 0}"#,
    )
    .unwrap();
    let blocks = blocks(
        r#"[
            {"id": "first", "category": "text", "type": "paragraph", "order": 1, "columnAssignment": "1"},
            {"id": "second", "category": "text", "type": "paragraph", "order": 2, "columnAssignment": "2"},
            {"id": "third", "category": "text", "type": "paragraph", "order": 3}
        ]"#,
    );
    let plan = assemble(&blocks, &config);

    let columns = plan.desktop_columns();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].slot, ColumnSlot::One);
    assert!(columns.iter().all(|column| column.slot != ColumnSlot::Two));
    let desktop: Vec<&str> = columns[0]
        .entries
        .iter()
        .map(|&index| plan.entries[index].block.id.as_str())
        .collect();
    assert_eq!(desktop, vec!["first", "third"]);

    assert_eq!(ids(plan.mobile_stack()), vec!["first", "second", "third"]);
}

#[test]
fn flex_columns_without_widths_split_present_columns() {
    let plan = assemble(&mixed_blocks(), &LayoutConfig::new(Layout::FlexColumns));
    let columns = plan.desktop_columns();
    assert_eq!(columns.len(), 2);
    assert!((columns[0].width.percent() - 50.0).abs() < f32::EPSILON);
    assert_eq!(columns[0].tags(Breakpoint::Md)[3].to_string(), "md:flex-1");
}

#[test]
fn float_columns_never_breakpoint_stacks_everything() {
    let config =
        LayoutConfig::from_json_str(r#"{"layout": "float-columns", "floatBreakpoint": "never"}"#).unwrap();
    let plan = assemble(&mixed_blocks(), &config);
    assert_eq!(plan.len(), 3);
    for entry in &plan {
        let classes = entry.placement.tags.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert!(classes.contains(&"w-full".to_string()), "{classes:?}");
        assert!(!classes.iter().any(|c| c.contains("float-left") || c.contains("float-right")));
        for width in [0, 640, 768, 1024, 4000] {
            assert!(!entry.placement.floats_at(width));
        }
    }
}

#[test]
fn float_columns_concrete_breakpoint_unfloats_below() {
    let config =
        LayoutConfig::from_json_str(r#"{"layout": "float-columns", "floatBreakpoint": "lg"}"#).unwrap();
    let plan = assemble(&mixed_blocks(), &config);
    let floated = &plan.entries[1];
    assert!(!floated.placement.floats_at(1023));
    assert!(floated.placement.floats_at(1024));
    assert!(floated.class_list().contains("lg:float-left"));
    assert!(floated.class_list().contains("lg:mr-[1.5rem]"));
    assert!(!plan.entries[0].placement.floats_at(4000));
}

#[test]
fn above_breakpoint_visibility() {
    let md = blocks(
        r#"[{"id": "x", "category": "text", "type": "paragraph",
             "displayMode": "above-breakpoint", "breakpoint": "md"}]"#,
    );
    let plan = assemble(&md, &LayoutConfig::default());
    let entry = &plan.entries[0];
    assert!(!entry.is_visible_at(Breakpoint::Md.min_width() - 1));
    assert!(entry.is_visible_at(Breakpoint::Md.min_width()));
    assert!(entry.class_list().ends_with("hidden md:block"));

    let always = blocks(
        r#"[{"id": "x", "category": "text", "type": "paragraph",
             "displayMode": "above-breakpoint", "breakpoint": "always"}]"#,
    );
    let plan = assemble(&always, &LayoutConfig::default());
    for width in [0, 320, 768, 1920] {
        assert!(plan.entries[0].is_visible_at(width));
    }
}

#[test]
fn two_column_force_new_row_grouping() {
    let blocks = blocks(
        r#"[
            {"id": "1", "category": "text", "type": "paragraph", "order": 1},
            {"id": "2", "category": "text", "type": "paragraph", "order": 2},
            {"id": "3", "category": "text", "type": "paragraph", "order": 3, "forceNewRow": true}
        ]"#,
    );
    let plan = assemble(&blocks, &LayoutConfig::new(Layout::TwoColumn));
    let rows: Vec<Vec<&str>> = plan.rows().into_iter().map(ids).collect();
    assert_eq!(rows, vec![vec!["1", "2"], vec!["3"]]);
}

#[test]
fn two_column_force_new_row_breaks_a_partial_row() {
    let blocks = blocks(
        r#"[
            {"id": "1", "category": "text", "type": "paragraph", "order": 1},
            {"id": "2", "category": "text", "type": "paragraph", "order": 2, "forceNewRow": true},
            {"id": "3", "category": "text", "type": "paragraph", "order": 3}
        ]"#,
    );
    let plan = assemble(&blocks, &LayoutConfig::new(Layout::TwoColumn));
    let rows: Vec<Vec<&str>> = plan.rows().into_iter().map(ids).collect();
    assert_eq!(rows, vec![vec!["1"], vec!["2", "3"]]);
}

#[test]
fn grid_rows_respect_spans_and_starts() {
    let blocks = blocks(
        r#"[
            {"id": "wide", "category": "text", "type": "paragraph", "gridSpan": 2},
            {"id": "narrow", "category": "text", "type": "paragraph"},
            {"id": "late", "category": "text", "type": "paragraph", "gridColumn": 3},
            {"id": "full", "category": "text", "type": "paragraph", "gridSpan": "full"},
            {"id": "tail", "category": "text", "type": "paragraph", "gridColumn": 2},
            {"id": "before", "category": "text", "type": "paragraph", "gridColumn": 1}
        ]"#,
    );
    let plan = assemble(&blocks, &LayoutConfig::new(Layout::Grid));
    let rows: Vec<Vec<&str>> = plan.rows().into_iter().map(ids).collect();
    assert_eq!(
        rows,
        vec![
            vec!["wide", "narrow"],
            vec!["late"],
            vec!["full"],
            vec!["tail"],
            vec!["before"],
        ]
    );
}

#[test]
fn gradient_background_is_inline() {
    let blocks = blocks(
        r#"[{"id": "g", "category": "text", "type": "paragraph",
             "backgroundColor": "linear-gradient(135deg,#fff,#22b8c8)"}]"#,
    );
    let plan = assemble(&blocks, &LayoutConfig::default());
    let directive = plan.entries[0].background.as_ref().unwrap();
    assert!(directive.is_inline());
    assert_eq!(directive.class_token(), None);
    assert_eq!(
        plan.entries[0].inner_style.get("background"),
        Some("linear-gradient(135deg,#fff,#22b8c8)")
    );
}

#[test]
fn classify_is_total_and_exclusive() {
    let cases = [
        ("#ff0000", BackgroundKind::Hex),
        ("linear-gradient(0deg,#fff,#000)", BackgroundKind::Gradient),
        ("accent-panel", BackgroundKind::Class),
        ("", BackgroundKind::None),
        ("transparent", BackgroundKind::None),
        ("   ", BackgroundKind::None),
        ("🎨", BackgroundKind::Class),
    ];
    for (input, kind) in cases {
        let spec = BackgroundSpec::classify(input);
        assert_eq!(spec.kind(), kind, "{input:?}");
        if kind != BackgroundKind::None {
            assert_eq!(spec.value(), input.trim());
        }
    }
}

#[test]
fn assemble_is_idempotent() {
    let blocks = mixed_blocks();
    for &layout in Layout::ALL {
        let config = LayoutConfig::new(layout);
        let first = assemble(&blocks, &config);
        let second = assemble(&blocks, &config);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(ids(&first), vec!["a", "b", "c"]);
    }
}

#[test]
fn unknown_block_type_keeps_its_slot() {
    let known: KnownBlocks = [("text", "heading"), ("text", "paragraph")].into_iter().collect();
    let plan: RenderPlan =
        assemble_with_registry(&mixed_blocks(), &LayoutConfig::new(Layout::Grid), &known);
    assert_eq!(ids(&plan), vec!["a", "b", "c"]);
    assert!(plan.entries[2].is_placeholder());
    assert!(plan.entries[2].class_list().contains("block-unsupported"));
}

#[test]
fn malformed_fields_degrade_to_defaults() {
    let blocks = blocks(
        r#"[{"id": "m", "category": "text", "type": "paragraph",
             "gridSpan": "huge", "displayMode": 7, "floatWidth": "",
             "columnAssignment": null, "backgroundColor": ["red"],
             "order": "2", "enabled": null, "forceNewRow": "true", "clearFloat": {},
             "alignSelf": 3, "borderColor": false}]"#,
    );
    let block = &blocks[0];
    assert_eq!(block.order, 2);
    assert!(block.enabled);
    assert!(block.force_new_row);
    assert!(!block.clear_float);
    assert_eq!(block.align_self.as_deref(), Some("3"));
    assert_eq!(block.border_color, None);
    assert_eq!(block.grid_span, folio_layout::GridSpan::One);
    assert_eq!(block.display_mode, folio_layout::DisplayMode::Always);
    assert_eq!(block.float_width, None);
    assert_eq!(block.column_assignment, ColumnSlot::One);
    assert!(block.background_color.is_none());
}
