use csv_profiler::{
    AxisRole, Cell, Column, Dataset, ProfilerConfig,
    bivariate::pair_series,
    classify::classify,
    format::round_value,
    frequency::frequency_table,
    longitudinal::time_series,
    profile::profile_columns,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn category_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        4 => "[a-d]".prop_map(Cell::Text),
        1 => Just(Cell::Missing),
    ]
}

fn number_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        6 => (-50i32..50).prop_map(|v| Cell::Number(v as f64 / 4.0)),
        1 => Just(Cell::Missing),
    ]
}

/// Rectangular three-column datasets: two numeric columns and a category.
fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (1usize..40).prop_flat_map(|rows| {
        (
            proptest::collection::vec(number_strategy(), rows),
            proptest::collection::vec(number_strategy(), rows),
            proptest::collection::vec(category_strategy(), rows),
        )
            .prop_map(|(a, b, c)| {
                Dataset::from_columns(vec![
                    Column::new("a", a),
                    Column::new("b", b),
                    Column::new("c", c),
                ])
                .expect("rectangular dataset")
            })
    })
}

fn is_sorted(cells: &[&Cell]) -> bool {
    cells.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn relative_frequencies_sum_to_one(cells in proptest::collection::vec(category_strategy(), 1..60)) {
        let table = frequency_table(&Column::new("c", cells));
        let total: f64 = table.rows.iter().map(|row| row.relative_frequency).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);

        let rounded = table
            .rows
            .iter()
            .map(|row| round_value(row.cumulative_relative_frequency, 2).expect("finite"))
            .collect::<Vec<_>>();
        prop_assert!(rounded.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(*rounded.last().expect("non-empty"), Decimal::new(100, 2));

        let counts = table.rows.iter().map(|row| row.count).collect::<Vec<_>>();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(counts.iter().sum::<usize>(), table.total);
    }

    #[test]
    fn profiling_is_pure(dataset in dataset_strategy()) {
        let config = ProfilerConfig::default();
        let classification = classify(&dataset, &["c", "b"]);
        prop_assert_eq!(
            profile_columns(&dataset, &classification, &config),
            profile_columns(&dataset, &classification, &config)
        );
    }

    #[test]
    fn explanatory_pairs_share_the_axis_order(dataset in dataset_strategy()) {
        let series = pair_series(&dataset, "a", AxisRole::Explanatory).expect("pairs");
        prop_assert_eq!(series.len(), dataset.column_count() - 1);
        let first = series[0].xs();
        prop_assert!(is_sorted(&first));
        for s in &series {
            prop_assert_eq!(&s.xs(), &first);
            prop_assert_eq!(s.points.len(), dataset.row_count());
        }
    }

    #[test]
    fn response_pairs_are_sorted_by_partner(dataset in dataset_strategy()) {
        let series = pair_series(&dataset, "a", AxisRole::Response).expect("pairs");
        for s in &series {
            prop_assert!(is_sorted(&s.xs()));
            prop_assert_eq!(s.y_label.as_str(), "a");
        }
    }

    #[test]
    fn time_series_share_one_ordering(dataset in dataset_strategy()) {
        let series = time_series(&dataset, "b").expect("series");
        prop_assert_eq!(series.len(), 2);
        prop_assert!(is_sorted(&series[0].sequence()));
        prop_assert_eq!(series[0].sequence(), series[1].sequence());

        // Every row appears exactly once: the value multiset is preserved.
        let column = dataset.column("a").expect("column a");
        let mut in_row_order = column.values().to_vec();
        let mut reordered = series[0].points.iter().map(|(_, v)| v.clone()).collect::<Vec<_>>();
        in_row_order.sort();
        reordered.sort();
        prop_assert_eq!(in_row_order, reordered);
    }
}
