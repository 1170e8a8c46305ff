use crate::{error::Result, fuzzy_number::FuzzyNumber, interval::Interval};

/// Builds piecewise-linear fuzzy numbers with a fixed number of alpha-cuts.
#[derive(Clone, Copy, Debug)]
pub struct FuzzyNumberFactory {
    pieces: usize,
    epsilon: f64,
}

impl Default for FuzzyNumberFactory {
    fn default() -> Self {
        Self {
            pieces: 11,
            epsilon: 0.0,
        }
    }
}

impl FuzzyNumberFactory {
    /// Factory producing `pieces` alpha-cuts per number (at least 2).
    pub fn new(pieces: usize) -> Self {
        Self {
            pieces: pieces.max(2),
            ..Self::default()
        }
    }

    /// Sets the tolerance of every produced alpha-cut.
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    #[inline]
    pub fn pieces(&self) -> usize {
        self.pieces
    }

    /// Trapezoidal number with support `[a, d]` and kernel `[b, c]`.
    #[allow(clippy::many_single_char_names)]
    pub fn trapezoid(&self, a: f64, b: f64, c: f64, d: f64) -> Result<FuzzyNumber> {
        let last = self.pieces - 1;
        let cuts = (0..self.pieces)
            .map(|i| {
                if i == last {
                    // exact kernel, interpolation could round it to `lo > hi`
                    return Interval::with_epsilon(b, c, self.epsilon);
                }
                let (i, last) = (i as f64, last as f64);
                Interval::with_epsilon(
                    a + (b - a) * i / last,
                    d - (d - c) * i / last,
                    self.epsilon,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        FuzzyNumber::new(cuts)
    }

    /// Triangular number with support `[a, c]` and kernel `[b, b]`.
    #[inline]
    pub fn triangle(&self, a: f64, b: f64, c: f64) -> Result<FuzzyNumber> {
        self.trapezoid(a, b, b, c)
    }

    #[inline]
    pub fn crisp(&self, a: f64) -> Result<FuzzyNumber> {
        self.triangle(a, a, a)
    }
}
