use crate::error::SubtractError;
use crate::math::polygon_2d::{order_convex_ccw, signed_area_2d};
use crate::math::{cross_2d, Point2, TOLERANCE};
use crate::mesh::{Corner, Crossing, Edge, Mesh, Side, Triangle};

use super::encounter::Encounter;

/// Re-inserts the subject unchanged.
pub(super) fn keep(subject: &Triangle, out: &mut Mesh) {
    let [a, b, c] = subject.points();
    out.add_triangle(a, b, c);
}

/// One cutter edge crosses the two sides meeting at `apex`.
///
/// The apex's side of that edge decides which piece is cut away: the corner
/// at `apex`, leaving a quad, or everything but the corner, leaving one
/// triangle.
pub(super) fn corner_cut(
    encounter: &Encounter<'_>,
    apex: Corner,
    out: &mut Mesh,
) -> Result<(), SubtractError> {
    let subject = encounter.subject();
    let [mut near, mut far] = apex.others();
    let v0 = subject.point(apex);
    if cross_2d(&(subject.point(near) - v0), &(subject.point(far) - v0)) < 0.0 {
        std::mem::swap(&mut near, &mut far);
    }
    let (v1, v2) = (subject.point(near), subject.point(far));
    let x01 = crossing_between(encounter, apex, near)?;
    let x20 = crossing_between(encounter, far, apex)?;

    if x01.cutter.relative_distance(&v0) > 0.0 {
        emit_ccw(out, x01.point, v1, v2);
        emit_ccw(out, x01.point, v2, x20.point);
    } else {
        emit_ccw(out, v0, x01.point, x20.point);
    }
    Ok(())
}

fn crossing_between(
    encounter: &Encounter<'_>,
    a: Corner,
    b: Corner,
) -> Result<Crossing, SubtractError> {
    Side::joining(a, b)
        .and_then(|side| encounter.crossings(side).first().copied())
        .ok_or_else(|| {
            SubtractError::InconsistentEncounter(format!("no crossing between corners {a:?} and {b:?}"))
        })
}

/// The cutter lies strictly inside the subject: ring between the two.
pub(super) fn enclosed(encounter: &Encounter<'_>, out: &mut Mesh) -> Result<(), SubtractError> {
    let hole = encounter.cutter().ccw_points();
    ring(&encounter.subject().ccw_points(), &hole, out)
}

/// General overlap: ring between the subject and the overlap polygon.
///
/// The overlap of two convex triangles is the convex hull of the crossing
/// points, the cutter vertices inside the subject, and the subject vertices
/// inside or on the cutter.
pub(super) fn traced(encounter: &Encounter<'_>, out: &mut Mesh) -> Result<(), SubtractError> {
    let subject = encounter.subject();
    let mut points = encounter.crossing_points();
    points.extend_from_slice(encounter.interior());
    points.extend(
        subject
            .points()
            .into_iter()
            .filter(|p| encounter.cutter().contains(p)),
    );
    let overlap = order_convex_ccw(&points);
    if overlap.len() < 3 || signed_area_2d(&overlap) <= 0.0 {
        keep(subject, out);
        return Ok(());
    }
    ring(&subject.ccw_points(), &overlap, out)
}

/// Triangulates the region between a convex polygon and a convex polygon
/// inside it, both counter-clockwise.
///
/// Each outer side is joined to the inner vertex nearest to it; at each outer
/// corner, the inner vertices between the supports of its two sides are
/// fanned. Zero-area triangles (inner vertices on an outer side) are dropped.
pub(super) fn ring(outer: &[Point2], inner: &[Point2], out: &mut Mesh) -> Result<(), SubtractError> {
    let n = outer.len();
    let m = inner.len();
    if n < 3 || m < 3 {
        return Err(SubtractError::InconsistentEncounter(format!(
            "ring needs two polygons, got {n} and {m} vertices"
        )));
    }

    let support: Vec<usize> = (0..n)
        .map(|i| nearest_vertex(&Edge::new(outer[i], outer[(i + 1) % n]), inner))
        .collect();
    let turns: usize = (0..n)
        .map(|i| (support[(i + 1) % n] + m - support[i]) % m)
        .sum();
    if turns != m {
        return Err(SubtractError::InconsistentEncounter(format!(
            "supports {support:?} wind {turns} steps around {m} inner vertices"
        )));
    }

    for i in 0..n {
        let apex = outer[(i + 1) % n];
        emit_ccw(out, outer[i], apex, inner[support[i]]);
        let mut j = support[i];
        while j != support[(i + 1) % n] {
            let k = (j + 1) % m;
            emit_ccw(out, apex, inner[k], inner[j]);
            j = k;
        }
    }
    Ok(())
}

/// Index of the first inner vertex with the smallest distance to `side`.
fn nearest_vertex(side: &Edge, inner: &[Point2]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (j, p) in inner.iter().enumerate() {
        let d = side.relative_distance(p);
        if d < best_distance {
            best = j;
            best_distance = d;
        }
    }
    best
}

/// Adds `a, b, c` when it turns counter-clockwise by more than a sliver.
fn emit_ccw(out: &mut Mesh, a: Point2, b: Point2, c: Point2) {
    let ab = b - a;
    let ac = c - a;
    let longest = ab
        .norm_squared()
        .max(ac.norm_squared())
        .max((c - b).norm_squared());
    if cross_2d(&ab, &ac) > TOLERANCE * longest {
        out.add_triangle(a, b, c);
    }
}
