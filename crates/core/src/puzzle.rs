//! Puzzle module - pegs, disks and the move rule
//!
//! Pegs are stored bottom-to-top, so the top disk of a peg is the last
//! element of its `Vec`. The only legality check is the top-of-stack
//! comparison performed by [`Puzzle::move_disk`].

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::Disk;

/// Errors produced by puzzle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// The source peg holds no disk
    #[error("no disk to move on peg {peg}")]
    EmptyPeg { peg: usize },
    /// The destination's top disk is smaller than the moved disk
    #[error("disk {disk} is larger than the top disk on peg {peg}")]
    LargerDisk { disk: Disk, peg: usize },
    /// A peg index outside the board
    #[error("peg {peg} does not exist")]
    NoSuchPeg { peg: usize },
}

impl HanoiError {
    /// True for the two rule violations a player can trigger.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            HanoiError::EmptyPeg { .. } | HanoiError::LargerDisk { .. }
        )
    }
}

/// Tower of Hanoi board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pegs: Vec<Vec<Disk>>,
    /// Layout captured at construction, restored by `reset`.
    initial: Vec<Vec<Disk>>,
    disk_count: usize,
}

impl Puzzle {
    /// Create a puzzle with every disk on peg 0 in random order.
    ///
    /// The first peg receives a uniformly random permutation of `1..=num_disks`,
    /// which is not necessarily a legal descending stack.
    ///
    /// # Panics
    ///
    /// Panics if `num_pegs` is zero or `num_disks` does not fit in a [`Disk`].
    pub fn new(num_pegs: usize, num_disks: usize, rng: &mut SimpleRng) -> Self {
        assert!(num_pegs > 0, "a puzzle needs at least one peg");
        let top = Disk::try_from(num_disks).expect("disk count must fit in a Disk");

        let mut first: Vec<Disk> = (1..=top).collect();
        rng.shuffle(&mut first);

        let mut pegs = vec![Vec::new(); num_pegs];
        pegs[0] = first;
        Self::from_pegs(pegs)
    }

    /// Create a puzzle from an explicit layout (bottom-to-top per peg).
    ///
    /// The disk count is the total number of disks in the layout.
    ///
    /// # Panics
    ///
    /// Panics if `pegs` is empty.
    pub fn from_pegs(pegs: Vec<Vec<Disk>>) -> Self {
        assert!(!pegs.is_empty(), "a puzzle needs at least one peg");
        let disk_count = pegs.iter().map(Vec::len).sum();
        Self {
            initial: pegs.clone(),
            pegs,
            disk_count,
        }
    }

    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// All pegs, bottom-to-top.
    pub fn pegs(&self) -> &[Vec<Disk>] {
        &self.pegs
    }

    /// A single peg, bottom-to-top.
    pub fn peg(&self, peg: usize) -> Option<&[Disk]> {
        self.pegs.get(peg).map(Vec::as_slice)
    }

    /// Top disk of a peg, if any.
    pub fn top(&self, peg: usize) -> Option<Disk> {
        self.pegs.get(peg).and_then(|p| p.last().copied())
    }

    /// Layout that `reset` restores.
    pub fn initial_pegs(&self) -> &[Vec<Disk>] {
        &self.initial
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// Fails without touching any peg if `from` is empty or if the top disk
    /// of `to` is smaller than the disk being moved.
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<(), HanoiError> {
        self.check_peg(from)?;
        self.check_peg(to)?;

        let disk = self.top(from).ok_or(HanoiError::EmptyPeg { peg: from })?;
        if let Some(target) = self.top(to) {
            if target < disk {
                return Err(HanoiError::LargerDisk { disk, peg: to });
            }
        }

        self.pegs[from].pop();
        self.pegs[to].push(disk);
        Ok(())
    }

    /// True when the first peg is empty and the last peg holds every disk.
    ///
    /// Only locations are checked, not the order of the last peg.
    pub fn is_finished(&self) -> bool {
        let last = self.pegs.len() - 1;
        self.pegs[0].is_empty() && self.pegs[last].len() == self.disk_count
    }

    /// Restore the layout captured at construction.
    pub fn reset(&mut self) {
        self.pegs.clone_from(&self.initial);
    }

    fn check_peg(&self, peg: usize) -> Result<(), HanoiError> {
        if peg < self.pegs.len() {
            Ok(())
        } else {
            Err(HanoiError::NoSuchPeg { peg })
        }
    }
}

/// Next peg to the right, wrapping to the first.
pub fn next_peg(peg: usize, peg_count: usize) -> usize {
    (peg + 1) % peg_count
}

/// Next peg to the left, wrapping to the last.
pub fn prev_peg(peg: usize, peg_count: usize) -> usize {
    (peg + peg_count - 1) % peg_count
}
