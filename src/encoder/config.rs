//! Lifted encoder configuration.
//!
//! This module expands a base graph with a lifting size into the dimensions
//! of the lifted code and the compact parity check matrix used by the
//! encoder. It also derives the schedule that solves the dual-diagonal core
//! of the parity part in closed form.

use super::Error;
use crate::codes::nr5g::{BaseGraph, LiftingSize};

/// Number of parity block columns in the high-rate core.
pub const CORE_COLS: usize = 4;

/// Nonzero entry of a compact parity check matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// Block column index.
    pub col: usize,
    /// Circulant shift, in `[0, Zc)`.
    pub shift: usize,
}

/// Compact parity check matrix.
///
/// Stores one [`Edge`] per nonzero entry of the base graph, with the shift
/// already reduced modulo the lifting size. The edges of each block row are
/// sorted by column.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CompactPcm {
    num_cols: usize,
    rows: Box<[Box<[Edge]>]>,
}

impl CompactPcm {
    fn lift(base_graph: BaseGraph, lifting_size: LiftingSize) -> CompactPcm {
        let rows = (0..base_graph.num_rows())
            .map(|row| {
                let mut edges = base_graph
                    .row_entries(row)
                    .map(|entry| Edge {
                        col: entry.col,
                        shift: entry.shift(lifting_size),
                    })
                    .collect::<Vec<_>>();
                edges.sort_unstable_by_key(|e| e.col);
                edges.into_boxed_slice()
            })
            .collect();
        CompactPcm {
            num_cols: base_graph.num_cols(),
            rows,
        }
    }

    /// Returns the number of block rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of block columns.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of nonzero entries.
    pub fn num_edges(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Returns the edges of a block row.
    pub fn row(&self, row: usize) -> &[Edge] {
        &self.rows[row]
    }

    /// Returns the shift of the entry at a block row and column, or `None` if
    /// the entry is zero.
    pub fn shift(&self, row: usize, col: usize) -> Option<usize> {
        self.rows[row].iter().find(|e| e.col == col).map(|e| e.shift)
    }

    /// Exports the matrix as a dense row-major table of shifts.
    ///
    /// Zero entries are represented by `-1`.
    ///
    /// # Examples
    /// ```
    /// # use nr_ldpc_encoder::codes::nr5g::BaseGraph;
    /// # use nr_ldpc_encoder::encoder::EncoderConfig;
    /// let config = EncoderConfig::new(BaseGraph::BG2, 2).unwrap();
    /// let table = config.pcm().to_dense();
    /// assert_eq!(table.len(), 42 * 52);
    /// assert_eq!(table[0], 9 % 2);
    /// assert_eq!(table[4], -1);
    /// ```
    pub fn to_dense(&self) -> Vec<i32> {
        let mut table = vec![-1; self.num_rows() * self.num_cols];
        for (j, row) in self.rows.iter().enumerate() {
            for e in row.iter() {
                table[j * self.num_cols + e.col] = e.shift as i32;
            }
        }
        table
    }
}

// Solves one parity block of the core from one block row of the core, once
// the other core parity blocks in that row are known.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct CoreStep {
    pub row: usize,
    pub target: usize,
    pub rotation: usize,
    // known core parity blocks, with `col` relative to the first parity column
    pub known: Box<[Edge]>,
}

// Closed-form solution of the core parity blocks.
//
// The sum of the first four block rows cancels all the dual-diagonal
// columns and leaves a single circulant on the first parity column, so
// p0 = rotation(seed_rotation) of the sum of the four row accumulators. The
// steps then solve the remaining three blocks one row at a time.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct CoreSchedule {
    pub seed_rotation: usize,
    pub steps: Box<[CoreStep]>,
}

// Block row outside the core. It has exactly one parity column of its own,
// which is solved directly from the message and core parity blocks.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct ExtensionRow {
    pub rotation: usize,
    pub core: Box<[Edge]>,
}

/// Encoder configuration.
///
/// Holds the dimensions of a lifted 5G NR LDPC code and its compact parity
/// check matrix. It is immutable once built.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EncoderConfig {
    base_graph: BaseGraph,
    lifting_size: LiftingSize,
    pcm: CompactPcm,
    num_message_edges: Box<[usize]>,
    core: CoreSchedule,
    extension: Box<[ExtensionRow]>,
}

impl EncoderConfig {
    /// Builds the configuration for a base graph and lifting size.
    ///
    /// Returns [`Error::UnsupportedLiftingSize`] if `lifting_size` is not
    /// one of the values of TS 38.212 Table 5.3.2-1.
    pub fn new(base_graph: BaseGraph, lifting_size: usize) -> Result<EncoderConfig, Error> {
        let lifting_size = LiftingSize::try_from(lifting_size)?;
        let pcm = CompactPcm::lift(base_graph, lifting_size);
        let k = base_graph.num_message_cols();
        let ls = usize::from(lifting_size);
        let num_message_edges = pcm
            .rows
            .iter()
            .map(|row| row.iter().take_while(|e| e.col < k).count())
            .collect();
        let core = core_schedule(&pcm, k, ls)?;
        let extension = (CORE_COLS..pcm.num_rows())
            .map(|row| extension_row(&pcm, row, k, ls))
            .collect::<Result<_, _>>()?;
        Ok(EncoderConfig {
            base_graph,
            lifting_size,
            pcm,
            num_message_edges,
            core,
            extension,
        })
    }

    /// Returns the base graph.
    pub fn base_graph(&self) -> BaseGraph {
        self.base_graph
    }

    /// Returns the lifting size.
    pub fn lifting_size(&self) -> LiftingSize {
        self.lifting_size
    }

    /// Returns the lifting size as an integer.
    pub fn ls(&self) -> usize {
        usize::from(self.lifting_size)
    }

    /// Returns the number of message block columns (`bgK`).
    pub fn bg_k(&self) -> usize {
        self.base_graph.num_message_cols()
    }

    /// Returns the number of block rows (`bgM`).
    pub fn bg_m(&self) -> usize {
        self.pcm.num_rows()
    }

    /// Returns the number of block columns (`bgN`).
    pub fn bg_n(&self) -> usize {
        self.pcm.num_cols()
    }

    /// Returns the number of message bits (`liftK`).
    pub fn lift_k(&self) -> usize {
        self.bg_k() * self.ls()
    }

    /// Returns the number of parity bits (`liftM`).
    pub fn lift_m(&self) -> usize {
        self.bg_m() * self.ls()
    }

    /// Returns the codeword length (`liftN`).
    pub fn lift_n(&self) -> usize {
        self.bg_n() * self.ls()
    }

    /// Returns the compact parity check matrix.
    pub fn pcm(&self) -> &CompactPcm {
        &self.pcm
    }

    // Message edges of a block row. They are a prefix of the row because
    // edges are sorted by column.
    pub(crate) fn message_edges(&self, row: usize) -> &[Edge] {
        &self.pcm.row(row)[..self.num_message_edges[row]]
    }

    pub(crate) fn core(&self) -> &CoreSchedule {
        &self.core
    }

    pub(crate) fn extension(&self) -> &[ExtensionRow] {
        &self.extension
    }
}

// Rotation that undoes a circulant shift.
fn inverse(shift: usize, ls: usize) -> usize {
    (ls - shift) % ls
}

fn core_edges(pcm: &CompactPcm, row: usize, k: usize) -> impl Iterator<Item = Edge> + Clone + '_ {
    pcm.row(row)
        .iter()
        .filter(move |e| e.col >= k && e.col < k + CORE_COLS)
        .map(move |e| Edge {
            col: e.col - k,
            shift: e.shift,
        })
}

fn core_schedule(pcm: &CompactPcm, k: usize, ls: usize) -> Result<CoreSchedule, Error> {
    if (0..CORE_COLS).any(|row| pcm.row(row).iter().any(|e| e.col >= k + CORE_COLS)) {
        return Err(Error::NotDualDiagonal);
    }

    // Shifts appearing an odd number of times in each core column of the
    // first four block rows. These survive the sum of the four rows.
    let mut odd_shifts: [Vec<usize>; CORE_COLS] = Default::default();
    for row in 0..CORE_COLS {
        for e in core_edges(pcm, row, k) {
            let shifts = &mut odd_shifts[e.col];
            match shifts.iter().position(|&s| s == e.shift) {
                Some(pos) => {
                    shifts.swap_remove(pos);
                }
                None => shifts.push(e.shift),
            }
        }
    }
    let seed_shift = match odd_shifts[0][..] {
        [shift] => shift,
        _ => return Err(Error::NotDualDiagonal),
    };
    if odd_shifts[1..].iter().any(|s| !s.is_empty()) {
        return Err(Error::NotDualDiagonal);
    }

    let mut known = [true, false, false, false];
    let mut used = [false; CORE_COLS];
    let mut steps = Vec::with_capacity(CORE_COLS - 1);
    while steps.len() < CORE_COLS - 1 {
        let step = (0..CORE_COLS)
            .filter(|&row| !used[row])
            .find_map(|row| {
                let edges = core_edges(pcm, row, k);
                let mut unknown = edges.clone().filter(|e| !known[e.col]);
                match (unknown.next(), unknown.next()) {
                    (Some(target), None) => Some(CoreStep {
                        row,
                        target: target.col,
                        rotation: inverse(target.shift, ls),
                        known: edges.filter(|e| known[e.col]).collect(),
                    }),
                    _ => None,
                }
            })
            .ok_or(Error::NotDualDiagonal)?;
        used[step.row] = true;
        known[step.target] = true;
        steps.push(step);
    }

    Ok(CoreSchedule {
        seed_rotation: inverse(seed_shift, ls),
        steps: steps.into_boxed_slice(),
    })
}

fn extension_row(pcm: &CompactPcm, row: usize, k: usize, ls: usize) -> Result<ExtensionRow, Error> {
    let mut own = pcm.row(row).iter().filter(|e| e.col >= k + CORE_COLS);
    let rotation = match (own.next(), own.next()) {
        (Some(e), None) if e.col == k + row => inverse(e.shift, ls),
        _ => return Err(Error::NotDualDiagonal),
    };
    Ok(ExtensionRow {
        rotation,
        core: core_edges(pcm, row, k).collect(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimensions() {
        let config = EncoderConfig::new(BaseGraph::BG2, 2).unwrap();
        assert_eq!(config.lift_k(), 20);
        assert_eq!(config.lift_m(), 84);
        assert_eq!(config.lift_n(), 104);
        let config = EncoderConfig::new(BaseGraph::BG1, 384).unwrap();
        assert_eq!(config.lift_k(), 8448);
        assert_eq!(config.lift_m(), 46 * 384);
        assert_eq!(config.lift_n(), 68 * 384);
        assert_eq!(config.pcm().num_edges(), 316);
    }

    #[test]
    fn unsupported_lifting_size() {
        for bg in enum_iterator::all::<BaseGraph>() {
            for ls in [0, 1, 17, 385, 1000] {
                assert_eq!(
                    EncoderConfig::new(bg, ls),
                    Err(Error::UnsupportedLiftingSize(ls))
                );
            }
        }
    }

    #[test]
    fn shifts_reduced() {
        for bg in enum_iterator::all::<BaseGraph>() {
            for zc in LiftingSize::iter() {
                let config = EncoderConfig::new(bg, usize::from(zc)).unwrap();
                let pcm = config.pcm();
                for entry in bg.entries() {
                    let shift = pcm.shift(entry.row, entry.col).unwrap();
                    assert!(shift < usize::from(zc));
                    assert_eq!(shift, entry.coefficient(zc.set_index()) % usize::from(zc));
                }
                let dense = pcm.to_dense();
                let zeros = dense.iter().filter(|&&s| s == -1).count();
                assert_eq!(zeros, pcm.num_rows() * pcm.num_cols() - pcm.num_edges());
            }
        }
    }

    #[test]
    fn core_schedule_bg1() {
        // i_LS = 6 uses shift 105 in row 1 of the first parity column
        let config = EncoderConfig::new(BaseGraph::BG1, 208).unwrap();
        let core = config.core();
        assert_eq!(core.seed_rotation, 208 - 105);
        let targets = core.steps.iter().map(|s| s.target).collect::<Vec<_>>();
        assert_eq!(&targets, &[1, 2, 3]);

        let config = EncoderConfig::new(BaseGraph::BG1, 384).unwrap();
        assert_eq!(config.core().seed_rotation, 0);
        let config = EncoderConfig::new(BaseGraph::BG1, 13).unwrap();
        assert_eq!(config.core().seed_rotation, 12);
    }

    #[test]
    fn core_schedule_bg2() {
        let config = EncoderConfig::new(BaseGraph::BG2, 384).unwrap();
        assert_eq!(config.core().seed_rotation, 383);
        // i_LS = 3 and 7 have shift 0 surviving in the sum
        let config = EncoderConfig::new(BaseGraph::BG2, 240).unwrap();
        assert_eq!(config.core().seed_rotation, 0);
    }

    #[test]
    fn extension_rows() {
        for bg in enum_iterator::all::<BaseGraph>() {
            let config = EncoderConfig::new(bg, 2).unwrap();
            assert_eq!(config.extension().len(), config.bg_m() - CORE_COLS);
            for row in config.extension() {
                assert_eq!(row.rotation, 0);
                assert!(row.core.iter().all(|e| e.col < CORE_COLS));
            }
            for row in 0..config.bg_m() {
                assert!(config.message_edges(row).iter().all(|e| e.col < config.bg_k()));
            }
        }
    }
}
