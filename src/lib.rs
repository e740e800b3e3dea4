use log::debug;
use std::path::Path;
pub mod cli;
pub mod cumulative;
pub mod distribution;
pub mod error;
pub mod histogram;
pub mod render;

pub use error::PlotError;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// players at the table, one column each in the game files
pub const N_PLAYERS: usize = 4;

/// points every player starts a game with, the baseline for the differences
pub const STARTING_POINTS: f64 = 25000.;

pub const HIST_BINS: usize = 150;
pub const HIST_ALPHA: f64 = 0.7;

/// 6.4 x 4.8 inches at 200 DPI
pub const DPI: u32 = 200;
pub const FIGURE_SIZE: (u32, u32) = (1280, 960);

/// one color per player: blue, orange, green, red
pub const PLAYER_COLORS: [(u8, u8, u8); N_PLAYERS] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
];

pub fn player_label(player: usize) -> String {
    format!("Player {}", player + 1)
}

/// The final points of every player, one row per game, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct GameTable {
    pub rows: Vec<[f64; N_PLAYERS]>,
}

impl GameTable {
    pub fn new(capacity: usize) -> GameTable {
        GameTable {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Init a GameTable from a comma separated file without header.
    /// Fails on the first row that does not have exactly N_PLAYERS
    /// finite numbers; blank lines and lines starting with '#' are skipped.
    pub fn from_csv<P: AsRef<Path>>(fin: P) -> Result<GameTable, PlotError> {
        let fin = fin.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_path(fin)
            .map_err(|source| PlotError::Open {
                path: fin.to_path_buf(),
                source,
            })?;
        let mut table = GameTable::new(10000);
        for result in reader.records() {
            let record = result.map_err(|source| PlotError::Read {
                line: source.position().map_or(0, |p| p.line()),
                source,
            })?;
            let line = record.position().map_or(0, |p| p.line());
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            if record.len() != N_PLAYERS {
                return Err(PlotError::Shape {
                    line,
                    expected: N_PLAYERS,
                    found: record.len(),
                });
            }
            let mut row = [0f64; N_PLAYERS];
            for (column, (field, value)) in record.iter().zip(row.iter_mut()).enumerate() {
                *value = parse_points(field).ok_or_else(|| PlotError::Parse {
                    line,
                    column: column + 1,
                    value: field.to_string(),
                })?;
            }
            table.rows.push(row);
        }
        debug!("read {} games from {}", table.len(), fin.display());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// the raw points of one player, in game order
    pub fn column(&self, player: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[player]).collect()
    }

    pub fn columns(&self) -> [Vec<f64>; N_PLAYERS] {
        let mut columns: [Vec<f64>; N_PLAYERS] = Default::default();
        for (player, c) in columns.iter_mut().enumerate() {
            *c = self.column(player);
        }
        columns
    }

    /// running sum of (points - baseline) for each player,
    /// one value per game
    pub fn cumulative_difference(&self, baseline: f64) -> [Vec<f64>; N_PLAYERS] {
        let mut series: [Vec<f64>; N_PLAYERS] = Default::default();
        for s in series.iter_mut() {
            s.reserve_exact(self.len());
        }
        let mut running = [0f64; N_PLAYERS];
        for row in self.rows.iter() {
            for (player, s) in series.iter_mut().enumerate() {
                running[player] += row[player] - baseline;
                s.push(running[player]);
            }
        }
        series
    }

    /// mean final points of each player, NAN for an empty table
    pub fn mean_points(&self) -> [f64; N_PLAYERS] {
        let mut means = [0f64; N_PLAYERS];
        for row in self.rows.iter() {
            for (m, v) in means.iter_mut().zip(row.iter()) {
                *m += v;
            }
        }
        for m in means.iter_mut() {
            *m /= self.len() as f64;
        }
        means
    }
}

fn parse_points(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// min and max of a slice, None if the slice is empty
pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut s_iter = s.iter();
    let (mut min, mut max) = match s_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in s_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[f64; N_PLAYERS]]) -> GameTable {
        GameTable {
            rows: rows.to_vec(),
        }
    }

    #[test]
    fn cumulative_difference_from_baseline() {
        let t = table(&[
            [25100., 24900., 25000., 25000.],
            [24800., 25200., 24950., 25050.],
        ]);
        let series = t.cumulative_difference(STARTING_POINTS);
        assert_eq!(series[0], vec![100., -100.]);
        assert_eq!(series[1], vec![-100., 100.]);
        assert_eq!(series[2], vec![0., -50.]);
        assert_eq!(series[3], vec![0., 50.]);
    }

    #[test]
    fn cumulative_difference_of_empty_table() {
        let series = GameTable::new(0).cumulative_difference(STARTING_POINTS);
        assert!(series.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn columns_are_unchanged() {
        let t = table(&[[1., 2., 3., 4.], [5., 6., 7., 8.]]);
        assert_eq!(t.column(2), vec![3., 7.]);
        assert_eq!(t.columns()[3], vec![4., 8.]);
    }

    #[test]
    fn mean_points_per_player() {
        let t = table(&[[1., 2., 3., 4.], [5., 6., 7., 8.]]);
        assert_eq!(t.mean_points(), [3., 4., 5., 6.]);
    }

    #[test]
    fn min_and_max_of_slice() {
        assert_eq!(min_and_max(&[3., -1., 7., 2.]), Some((-1., 7.)));
        assert_eq!(min_and_max::<f64>(&[]), None);
    }

    #[test]
    fn parse_points_rejects_non_finite() {
        assert_eq!(parse_points("25000"), Some(25000.));
        assert_eq!(parse_points("-1.5e3"), Some(-1500.));
        assert_eq!(parse_points("NaN"), None);
        assert_eq!(parse_points("inf"), None);
        assert_eq!(parse_points("abc"), None);
        assert_eq!(parse_points(""), None);
    }

    #[test]
    fn labels_start_at_one() {
        assert_eq!(player_label(0), "Player 1");
        assert_eq!(player_label(3), "Player 4");
    }
}
