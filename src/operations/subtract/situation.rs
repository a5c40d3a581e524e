use crate::error::SubtractError;
use crate::mesh::{Corner, Side};

use super::encounter::Encounter;

/// Per-side crossing counts of a subject triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeCounts {
    pub ab: u8,
    pub ac: u8,
    pub bc: u8,
}

/// One side of the subject with its crossing count, as ordered by
/// [`EdgeCounts::ranked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedSide {
    pub side: Side,
    pub count: u8,
}

impl EdgeCounts {
    #[must_use]
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Ab => self.ab,
            Side::Ac => self.ac,
            Side::Bc => self.bc,
        }
    }

    /// Decimal situation code: `ab + 10 * ac + 100 * bc`.
    #[must_use]
    pub fn code(&self) -> u16 {
        u16::from(self.ab) + 10 * u16::from(self.ac) + 100 * u16::from(self.bc)
    }

    /// Total number of crossings.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.ab + self.ac + self.bc
    }

    /// Sides sorted by crossing count, highest first. Ties keep `ab, ac, bc` order.
    #[must_use]
    pub fn ranked(&self) -> [RankedSide; 3] {
        let mut ranked = Side::ALL.map(|side| RankedSide {
            side,
            count: self.get(side),
        });
        ranked.sort_by(|x, y| y.count.cmp(&x.count));
        ranked
    }
}

/// How a cutter triangle meets a subject triangle, and so which
/// replacement the subject gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    /// The cutter misses the subject; it is kept as is.
    Untouched,
    /// The cutter covers the subject; nothing remains.
    Covered,
    /// One cutter edge slices across the corner at `apex`.
    CornerCut { apex: Corner },
    /// The cutter lies strictly inside the subject and leaves a hole.
    Enclosed,
    /// Any other overlap; the remainder is traced around the overlap polygon.
    Traced,
}

impl Situation {
    /// Classifies an encounter that survived the fast rejection tests.
    ///
    /// # Errors
    ///
    /// Returns [`SubtractError::UnrecognizedSituation`] when a side reports
    /// more than three crossings, and
    /// [`SubtractError::InconsistentEncounter`] when the crossing counts
    /// contradict the number of cutter vertices inside the subject.
    pub fn classify(encounter: &Encounter<'_>) -> Result<Situation, SubtractError> {
        let counts = encounter.counts();
        let ranked = counts.ranked();
        let interior = encounter.interior().len();

        let situation = match (ranked.map(|r| r.count), interior) {
            ([top, _, _], _) if top > 3 => {
                return Err(SubtractError::UnrecognizedSituation { code: counts.code() });
            }
            ([0, 0, 0], 0) => {
                if encounter.cutter_holds_centroid() {
                    Situation::Traced
                } else {
                    Situation::Untouched
                }
            }
            ([0, 0, 0], 3) => Situation::Enclosed,
            ([0, 0, 0], n) => {
                return Err(SubtractError::InconsistentEncounter(format!(
                    "{n} cutter vertices inside the subject but no crossings"
                )));
            }
            (_, 3) => {
                return Err(SubtractError::InconsistentEncounter(format!(
                    "cutter inside the subject but situation code {:03}",
                    counts.code()
                )));
            }
            ([1, 1, 0], 0) if encounter.single_cutter_edge() => {
                match ranked[0].side.shared_corner(ranked[1].side) {
                    Some(apex) => Situation::CornerCut { apex },
                    None => Situation::Traced,
                }
            }
            (_, 0..=2) => Situation::Traced,
            _ => return Err(SubtractError::UnrecognizedSituation { code: counts.code() }),
        };
        Ok(situation)
    }
}
