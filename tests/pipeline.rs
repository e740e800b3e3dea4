use mahjong_plots::histogram::DensityHistogram;
use mahjong_plots::{GameTable, PlotError, HIST_BINS, N_PLAYERS, STARTING_POINTS};
use std::fs::write;
use tempfile::TempDir;

fn table_from(contents: &str) -> Result<GameTable, PlotError> {
    let dir = TempDir::new().unwrap();
    let fin = dir.path().join("games.dat");
    write(&fin, contents).unwrap();
    GameTable::from_csv(&fin)
}

#[test]
fn reads_rows_in_file_order() {
    let t = table_from("25100,24900,25000,25000\n24800,25200,24950,25050\n").unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.rows[0], [25100., 24900., 25000., 25000.]);
    assert_eq!(t.rows[1], [24800., 25200., 24950., 25050.]);
}

#[test]
fn cumulative_difference_of_two_games() {
    let t = table_from("25100,24900,25000,25000\n24800,25200,24950,25050\n").unwrap();
    let series = t.cumulative_difference(STARTING_POINTS);
    assert_eq!(series[0], vec![100., -100.]);
    assert_eq!(series[3], vec![0., 50.]);
}

#[test]
fn last_cumulative_value_is_total_difference() {
    let mut contents = String::new();
    for g in 0..500 {
        let a = 25000 + (g * 173 % 9000) as i64 - 4500;
        let b = 25000 - (g * 91 % 7000) as i64 + 3500;
        let c = 30000 - a;
        let d = 100000 - a - b - c;
        contents.push_str(&format!("{},{},{},{}\n", a, b, c, d));
    }
    let t = table_from(&contents).unwrap();
    let series = t.cumulative_difference(STARTING_POINTS);
    for player in 0..N_PLAYERS {
        assert_eq!(series[player].len(), t.len());
        let total: f64 = t.column(player).iter().map(|v| v - STARTING_POINTS).sum();
        assert_eq!(*series[player].last().unwrap(), total);
    }
}

#[test]
fn identical_input_gives_identical_series() {
    let contents = "25300.5,24700,26000,24000\n23000,27000,25000,25000\n";
    let first = table_from(contents).unwrap();
    let second = table_from(contents).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.cumulative_difference(STARTING_POINTS),
        second.cumulative_difference(STARTING_POINTS)
    );
    assert_eq!(first.columns(), second.columns());
}

#[test]
fn identity_keeps_column_values() {
    let t = table_from("1,2,3,4\n5,6,7,8\n").unwrap();
    assert_eq!(t.column(2), vec![3., 7.]);
}

#[test]
fn trims_fields_and_skips_blank_lines() {
    let t = table_from(" 1, 2 ,3,4\n\n5,6,7, 8\n").unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.rows[1], [5., 6., 7., 8.]);
}

#[test]
fn skips_comment_lines() {
    let t = table_from("# final points of each player\n1,2,3,4\n#5,6,7\n5,6,7,8\n").unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.column(0), vec![1., 5.]);
}

#[test]
fn empty_file_gives_empty_series() {
    let t = table_from("").unwrap();
    assert!(t.is_empty());
    let series = t.cumulative_difference(STARTING_POINTS);
    assert!(series.iter().all(|s| s.is_empty()));
    for c in t.columns().iter() {
        let h = DensityHistogram::new(c, HIST_BINS);
        assert!(h.density.iter().all(|d| d.is_finite()));
    }
}

#[test]
fn short_row_is_a_shape_error() {
    let err = table_from("1,2,3,4\n1,2,3\n5,6,7,8\n").unwrap_err();
    match err {
        PlotError::Shape {
            line,
            expected,
            found,
        } => {
            assert_eq!(line, 2);
            assert_eq!(expected, 4);
            assert_eq!(found, 3);
        }
        other => panic!("expected a shape error, got {}", other),
    }
}

#[test]
fn long_row_is_a_shape_error() {
    let err = table_from("1,2,3,4,5\n").unwrap_err();
    assert!(matches!(err, PlotError::Shape { found: 5, .. }));
}

#[test]
fn non_numeric_token_is_a_parse_error() {
    let err = table_from("1,2,3,4\n5,six,7,8\n").unwrap_err();
    match err {
        PlotError::Parse {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, 2);
            assert_eq!(value, "six");
        }
        other => panic!("expected a parse error, got {}", other),
    }
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = TempDir::new().unwrap();
    let err = GameTable::from_csv(dir.path().join("10000_games.dat")).unwrap_err();
    assert!(matches!(err, PlotError::Open { .. }));
}
