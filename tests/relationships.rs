mod common;

use csv_profiler::{
    AxisRole, Cell, Dataset, ProfileError, ProfilerConfig, bivariate::pair_series,
    longitudinal::time_series,
};

use common::{PEOPLE_CSV, VISITS_FILE, fixture_path, load};

fn n(value: f64) -> Cell {
    Cell::Number(value)
}

#[test]
fn explanatory_age_against_score() {
    let dataset = load(PEOPLE_CSV);
    let series = pair_series(&dataset, "age", AxisRole::Explanatory).expect("pairs");
    assert_eq!(series.len(), dataset.column_count() - 1);

    let score = series
        .iter()
        .find(|s| s.y_label == "score")
        .expect("score series");
    assert_eq!(score.x_label, "age");
    assert_eq!(
        score.points,
        vec![(n(25.0), n(85.0)), (n(30.0), n(70.0)), (n(40.0), n(60.0))]
    );
}

#[test]
fn explanatory_series_share_one_x_ordering() {
    let dataset = load(PEOPLE_CSV);
    let series = pair_series(&dataset, "score", AxisRole::Explanatory).expect("pairs");
    let first = series[0].xs();
    assert!(series.iter().all(|s| s.xs() == first));
    assert!(first.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn response_series_are_ordered_by_their_partner() {
    let dataset = load(PEOPLE_CSV);
    let series = pair_series(&dataset, "age", AxisRole::Response).expect("pairs");
    assert_eq!(series.len(), 2);
    for s in &series {
        assert_eq!(s.y_label, "age");
        let xs = s.xs();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{} not sorted", s.x_label);
    }
    let group = &series[0];
    assert_eq!(group.x_label, "group");
    assert_eq!(group.title, "group (x-axis) vs age (y-axis)");
    // Stable sort keeps A rows in CSV order.
    assert_eq!(group.ys(), vec![&n(30.0), &n(25.0), &n(40.0)]);
    let score = &series[1];
    assert_eq!(score.ys(), vec![&n(40.0), &n(30.0), &n(25.0)]);
}

#[test]
fn unknown_axis_column_yields_error_not_partial_output() {
    let dataset = load(PEOPLE_CSV);
    for role in [AxisRole::Explanatory, AxisRole::Response] {
        assert_eq!(
            pair_series(&dataset, "height", role).unwrap_err(),
            ProfileError::unknown_column("height")
        );
    }
}

#[test]
fn single_column_dataset_has_no_pairs() {
    let dataset = load("only\n1\n2\n");
    assert!(
        pair_series(&dataset, "only", AxisRole::Explanatory)
            .expect("pairs")
            .is_empty()
    );
    assert!(time_series(&dataset, "only").expect("series").is_empty());
}

#[test]
fn longitudinal_series_share_sequence_order() {
    let dataset = Dataset::from_path(&fixture_path(VISITS_FILE), &ProfilerConfig::default())
        .expect("fixture");
    let series = time_series(&dataset, "day").expect("series");
    assert_eq!(series.len(), 3);

    let expected = (1..=6)
        .map(|d| Cell::Text(format!("2024-01-0{d}")))
        .collect::<Vec<_>>();
    for s in &series {
        assert_eq!(s.sequence_label, "day");
        assert_eq!(
            s.sequence().into_iter().cloned().collect::<Vec<_>>(),
            expected
        );
    }
    let visits = &series[0];
    assert_eq!(visits.value_label, "visits");
    assert_eq!(visits.points[0].1, n(30.0));
    assert_eq!(visits.points[4].1, n(42.0));
    let temperature = &series[2];
    assert_eq!(temperature.points[0].1, Cell::Missing);
    assert_eq!(temperature.title, "temperature over day");
}

#[test]
fn longitudinal_missing_sequence_values_sort_last() {
    let dataset = load("t,v\n3,a\nNA,b\n1,c\n");
    let series = time_series(&dataset, "t").expect("series");
    let sequence = series[0].sequence();
    assert_eq!(sequence, vec![&n(1.0), &n(3.0), &Cell::Missing]);
}

#[test]
fn unknown_sequence_column_is_reported() {
    let dataset = load(PEOPLE_CSV);
    assert!(matches!(
        time_series(&dataset, "when"),
        Err(ProfileError::UnknownColumn { .. })
    ));
}
