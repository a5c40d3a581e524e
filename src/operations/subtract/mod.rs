mod encounter;
mod handlers;
mod situation;

pub use encounter::Encounter;
pub use situation::{EdgeCounts, RankedSide, Situation};

use crate::error::{Result, SubtractError};
use crate::mesh::{Mesh, Triangle};

/// Computes the region of one mesh not covered by another.
pub struct Subtract<'a> {
    subject: &'a Mesh,
    cutter: &'a Mesh,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (`subject - cutter`).
    #[must_use]
    pub fn new(subject: &'a Mesh, cutter: &'a Mesh) -> Self {
        Self { subject, cutter }
    }

    /// Executes the subtraction, returning a new mesh.
    ///
    /// Cutter triangles are carved away one at a time: the result of each
    /// step is the subject of the next, so overlapping cutter triangles are
    /// never subtracted twice. The result keeps the subject's parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any triangle pair cannot be classified. No partial
    /// result is returned.
    pub fn execute(&self) -> Result<Mesh> {
        carve(self.subject, self.cutter, subtract_triangle)
    }
}

/// Runs `step` for every subject triangle against each cutter triangle in
/// turn, feeding each round's output into the next. Stops at the first error.
fn carve<F>(subject: &Mesh, cutter: &Mesh, mut step: F) -> Result<Mesh>
where
    F: FnMut(&Triangle, &Triangle, &mut Mesh) -> std::result::Result<Situation, SubtractError>,
{
    let mut current = subject.clone();
    for (index, cut) in cutter.triangles().iter().enumerate() {
        tracing::debug!(cutter = index, subjects = current.len(), "carving cutter triangle");
        let mut next = Mesh::with_params(*current.params());
        for tri in current.triangles() {
            step(tri, cut, &mut next)?;
        }
        current = next;
    }
    Ok(current)
}

/// Appends `subject - cutter` to `out` and returns how the pair was classified.
///
/// # Errors
///
/// Returns an error if the pair cannot be classified or its crossings are
/// inconsistent.
pub fn subtract_triangle(
    subject: &Triangle,
    cutter: &Triangle,
    out: &mut Mesh,
) -> std::result::Result<Situation, SubtractError> {
    if encounter::is_apart(subject, cutter) {
        handlers::keep(subject, out);
        return Ok(Situation::Untouched);
    }
    if encounter::is_covered(subject, cutter) {
        return Ok(Situation::Covered);
    }

    replace(&Encounter::evaluate(subject, cutter), out)
}

/// Classifies an encounter and appends the subject's remainder to `out`.
///
/// Nothing is appended when classification fails.
fn replace(
    encounter: &Encounter<'_>,
    out: &mut Mesh,
) -> std::result::Result<Situation, SubtractError> {
    let subject = encounter.subject();
    let code = encounter.counts().code();
    let situation = Situation::classify(encounter).inspect_err(|e| {
        tracing::warn!(code, interior = encounter.interior().len(), "{e}");
    })?;
    tracing::trace!(code, ?situation, "triangle pair");

    let handled = match situation {
        Situation::Untouched => {
            handlers::keep(subject, out);
            Ok(())
        }
        Situation::Covered => Ok(()),
        Situation::CornerCut { apex } => handlers::corner_cut(encounter, apex, out),
        Situation::Enclosed => handlers::enclosed(encounter, out),
        Situation::Traced => handlers::traced(encounter, out),
    };
    handled.inspect_err(|e| tracing::warn!(code, ?situation, "{e}"))?;
    Ok(situation)
}
