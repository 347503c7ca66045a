// tests/chart_series.rs
//
// Reshaper properties over the public API, with inputs shaped like the
// comparison page's series payloads.

use serde_json::{json, Map, Value};

use channel_analyzer::{to_chart_series, ChartKind, ChartSeries, SeriesKeys};

fn rows(v: Value) -> Vec<Map<String, Value>> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_object().unwrap().clone())
        .collect()
}

fn upload_frequency() -> Vec<Map<String, Value>> {
    rows(json!([
        { "month": "Jan", "channel1": 8, "channel2": 4 },
        { "month": "Feb", "channel1": 7, "channel2": 5 },
        { "month": "Mar", "channel1": 9, "channel2": 6 },
        { "month": "Apr", "channel1": 8, "channel2": 4 },
        { "month": "May", "channel1": 10, "channel2": 3 },
        { "month": "Jun", "channel1": 6, "channel2": 5 },
        { "month": "Jul", "channel1": 11, "channel2": 4 },
    ]))
}

#[test]
fn cartesian_modes_preserve_length_and_order_for_any_prefix() {
    let all = upload_frequency();
    let keys = SeriesKeys::dual("month", "channel1", "channel2");

    // Property holds for every non-empty prefix of the input.
    for n in 1..=all.len() {
        let input = &all[..n];
        for kind in [ChartKind::Bar, ChartKind::Line] {
            let ChartSeries::Cartesian(points) = to_chart_series(input, &keys, kind) else {
                panic!("bar/line must be cartesian");
            };
            assert_eq!(points.len(), n);
            for (point, row) in points.iter().zip(input) {
                assert_eq!(Some(point.category.as_str()), row["month"].as_str());
            }
        }
    }
}

#[test]
fn dual_pie_always_has_exactly_two_points() {
    let all = upload_frequency();
    let keys = SeriesKeys::dual("month", "channel1", "channel2").labeled("One", "Two");

    for n in 0..=all.len() {
        let ChartSeries::Pie(slices) = to_chart_series(&all[..n], &keys, ChartKind::Pie) else {
            panic!("pie must be pie");
        };
        assert_eq!(slices.len(), 2, "dual pie is two slices for {n} rows");
    }
}

#[test]
fn dual_pie_totals_match_a_manual_reduction() {
    let all = upload_frequency();
    let keys = SeriesKeys::dual("month", "channel1", "channel2").labeled("One", "Two");

    let ChartSeries::Pie(slices) = to_chart_series(&all, &keys, ChartKind::Pie) else {
        panic!("pie must be pie");
    };
    let c1: f64 = all.iter().map(|r| r["channel1"].as_f64().unwrap()).sum();
    let c2: f64 = all.iter().map(|r| r["channel2"].as_f64().unwrap()).sum();
    assert_eq!(slices[0].value, c1);
    assert_eq!(slices[1].value, c2);
    assert_eq!(slices[0].name, "One");
    assert_eq!(slices[1].name, "Two");
}

#[test]
fn single_pie_mirrors_the_input_rows() {
    let data = rows(json!([
        { "type": "Tutorials", "channel1": 78 },
        { "type": "Reviews", "channel1": 65 },
        { "type": "Vlogs", "channel1": 82 },
        { "type": "Interviews", "channel1": 70 },
    ]));
    let keys = SeriesKeys::single("type", "channel1");

    let ChartSeries::Pie(slices) = to_chart_series(&data, &keys, ChartKind::Pie) else {
        panic!("pie must be pie");
    };
    assert_eq!(slices.len(), data.len());
    let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Tutorials", "Reviews", "Vlogs", "Interviews"]);
}

#[test]
fn rows_missing_a_channel_still_reduce() {
    // A row without channel2 counts as zero toward that slice.
    let data = rows(json!([
        { "month": "Jan", "channel1": 8, "channel2": 4 },
        { "month": "Feb", "channel1": 7 },
    ]));
    let keys = SeriesKeys::dual("month", "channel1", "channel2");

    let ChartSeries::Pie(slices) = to_chart_series(&data, &keys, ChartKind::Pie) else {
        panic!("pie must be pie");
    };
    assert_eq!(slices[0].value, 15.0);
    assert_eq!(slices[1].value, 4.0);
}
