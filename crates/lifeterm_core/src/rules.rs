//! Conway's B3/S23 rule.

/// What happens to a single cell when a generation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Fewer than two live neighbors.
    Underpopulation,
    /// More than three live neighbors.
    Overpopulation,
    /// Dead cell with exactly three live neighbors.
    Birth,
    /// Live cell with exactly three live neighbors.
    Survival,
    /// Exactly two live neighbors, or a dead cell that stays dead.
    Unchanged,
}

impl Transition {
    /// Liveness after the transition, given liveness before it.
    pub fn apply(self, alive: bool) -> bool {
        match self {
            Transition::Underpopulation | Transition::Overpopulation => false,
            Transition::Birth | Transition::Survival => true,
            Transition::Unchanged => alive,
        }
    }
}

/// Classifies the fate of a cell with `neighbors` live neighbors.
pub fn transition(alive: bool, neighbors: u8) -> Transition {
    match (alive, neighbors) {
        (_, n) if n < 2 => Transition::Underpopulation,
        (_, n) if n > 3 => Transition::Overpopulation,
        (false, 3) => Transition::Birth,
        (true, 3) => Transition::Survival,
        _ => Transition::Unchanged,
    }
}

#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    transition(alive, neighbors).apply(alive)
}
