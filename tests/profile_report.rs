//! End-to-end profiling test: build a frame, profile it, render the report

use evaluar::profile::{
    Column, ColorMode, DataFrame, Profiler, RenderOptions, SchemaOptions, Value,
};

fn survey_frame() -> DataFrame {
    DataFrame::from_columns(vec![
        Column::new(
            "income",
            vec![
                32_000.0.into(),
                48_500.0.into(),
                51_200.0.into(),
                Value::Missing,
                27_800.0.into(),
                95_000.0.into(),
                41_300.0.into(),
                38_900.0.into(),
                450_000.0.into(), // far beyond the IQR fence
                44_100.0.into(),
            ],
        ),
        Column::numeric(
            "hours",
            &[38.0, 40.0, 42.0, 35.0, 37.5, 55.0, 40.5, 39.0, 60.0, 41.0],
        ),
        Column::text("region", &["north", "south", "north", "east", "south", "north", "east", "south", "north", "south"]),
        Column::new(
            "comment",
            vec![
                "fine".into(),
                "too long".into(),
                Value::Missing,
                "ok".into(),
                "could be worse".into(),
                "great".into(),
                "meh".into(),
                "no complaints".into(),
                "why so many questions".into(),
                "done".into(),
            ],
        ),
    ])
    .unwrap()
}

#[test]
fn profile_classifies_summarizes_and_renders() {
    let frame = survey_frame();
    let summary = Profiler::new().profile(&frame).unwrap();

    assert_eq!(summary.n_rows, 10);
    assert_eq!(summary.n_cols, 4);

    // region has 3 distinct values -> categorical; comment has 9 -> text
    let numeric: Vec<&str> = summary.numeric.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(numeric, vec!["income", "hours"]);
    assert_eq!(summary.categorical.len(), 1);
    assert_eq!(summary.categorical[0].0, "region");

    // 2 missing cells, none of the rows repeat
    assert_eq!(summary.missing_cells, 2);
    assert_eq!(summary.duplicate_rows, 0);

    // The two high incomes sit beyond the 1.5×IQR fence
    let income = &summary.numeric[0].1;
    assert_eq!(income.outliers, 2);
    assert!(income.median < income.mean);

    let heatmap = summary.correlation.as_ref().unwrap();
    // Income and hours move together in this sample
    assert!(heatmap.get(0, 1) > 0.5);

    let mut sink = Vec::new();
    let options = RenderOptions { color_mode: ColorMode::Mono, seed: Some(1) };
    summary.render(&mut sink, &options).unwrap();
    let text = String::from_utf8(sink).unwrap();

    assert!(text.starts_with("10 rows, 4 columns"));
    assert!(text.contains("Categorical columns: [\"region\"]"));
    assert!(text.contains("Text columns: [\"comment\"]"));
    assert!(text.contains("Statistics for numeric columns:"));
    assert!(text.contains("outliers count"));
    assert!(text.contains("Total 2 missing values across 10 rows"));
    assert!(text.contains("Columns with missing values: income, comment"));
    assert!(text.contains("Missing values proportion"));
    assert!(text.contains("Correlation heatmap"));
    assert!(text.contains("\"income\" distribution"));
    assert!(text.contains("\"hours\" distribution"));
}

#[test]
fn profile_summary_round_trips_through_json() {
    let summary = Profiler::new().profile(&survey_frame()).unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    let back: evaluar::profile::ProfileSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn threshold_option_reshapes_the_report() {
    let frame = survey_frame();
    let profiler = Profiler::with_options(SchemaOptions { categorical_threshold: 2 });
    let summary = profiler.profile(&frame).unwrap();

    // region (3 distinct) no longer qualifies as categorical
    assert!(summary.categorical.is_empty());
    let numeric: Vec<&str> = summary.numeric.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(numeric, vec!["income", "hours"]);
}
