use super::min_and_max;

/// produces the bins + 1 edges [ lo + i * (hi - lo) / bins | i <- 0..=bins ]
/// (DOES include "hi", exactly)
#[derive(Clone, Debug)]
pub struct BinEdges {
    current: u64,
    current_back: u64,
    bins: u64,
    lo: f64,
    hi: f64,
}

impl BinEdges {
    pub fn new(lo: f64, hi: f64, bins: u64) -> Self {
        BinEdges {
            current: 0,
            current_back: bins + 1,
            bins,
            lo,
            hi,
        }
    }

    fn at(&self, pos: u64) -> f64 {
        if pos == self.bins {
            return self.hi;
        }
        let step = (self.hi - self.lo) / self.bins as f64;
        self.lo + pos as f64 * step
    }

    fn remaining(&self) -> usize {
        (self.current_back - self.current) as usize
    }
}

impl Iterator for BinEdges {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        let edge = self.at(self.current);
        self.current += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.remaining();
        (l, Some(l))
    }
}

impl DoubleEndedIterator for BinEdges {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        self.current_back -= 1;
        Some(self.at(self.current_back))
    }
}

impl ExactSizeIterator for BinEdges {}

/// Histogram normalized so that the bar areas sum to 1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensityHistogram {
    pub edges: Vec<f64>,
    pub density: Vec<f64>,
}

impl DensityHistogram {
    /// bins the values over their own [min, max] range;
    /// a constant input gets a unit-wide range centered on the value,
    /// an empty input gets [0, 1] with zero density everywhere
    pub fn new(values: &[f64], bins: usize) -> DensityHistogram {
        let bins = bins.max(1);
        let (lo, hi) = match min_and_max(values) {
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(range) => range,
            None => (0., 1.),
        };
        let edges: Vec<f64> = BinEdges::new(lo, hi, bins as u64).collect();
        let mut counts = vec![0usize; bins];
        for &v in values.iter() {
            counts[bin_index(v, &edges)] += 1;
        }
        let n = values.len() as f64;
        let density = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, e)| {
                if c == 0 {
                    0.
                } else {
                    c as f64 / (n * (e[1] - e[0]))
                }
            })
            .collect();
        DensityHistogram { edges, density }
    }

    /// first and last edge, [0, 1] before any binning
    pub fn range(&self) -> (f64, f64) {
        match (self.edges.first(), self.edges.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0., 1.),
        }
    }

    pub fn max_density(&self) -> f64 {
        self.density.iter().cloned().fold(0., f64::max)
    }

    /// (left edge, right edge, density) of every bin
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.density.iter())
            .map(|(e, &d)| (e[0], e[1], d))
    }
}

/// bin of a value inside [edges[0], edges[bins]]: the estimate from the
/// value's relative position is moved by one when rounding put it on the
/// wrong side of an edge, bins are [e_i, e_i+1) and the last one is closed
fn bin_index(v: f64, edges: &[f64]) -> usize {
    let bins = edges.len() - 1;
    let (lo, hi) = (edges[0], edges[bins]);
    let mut pos = (((v - lo) * (bins as f64 / (hi - lo))) as usize).min(bins - 1);
    if v < edges[pos] && pos > 0 {
        pos -= 1;
    } else if v >= edges[pos + 1] && pos != bins - 1 {
        pos += 1;
    }
    pos
}
