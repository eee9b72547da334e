//! Wheel geometry and spin planning.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, where the pointer
//! sits. Segment `i` of `n` covers `[i * 360/n, (i + 1) * 360/n)` on the
//! unrotated wheel. A rotation `r` turns the whole wheel clockwise, so the
//! pointer reads the wheel angle `-r mod 360`.

use rand::Rng;

/// Where a spin lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub winner_index: usize,
    /// Cumulative rotation to animate to. Always greater than the rotation the
    /// spin started from.
    pub rotation: f64,
}

/// Drawing data for one segment of a wheel of the given radius, centred on
/// `(radius, radius)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentShape {
    /// SVG path data.
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    /// Rotation for the label so it reads outward along the radius.
    pub label_rotation: f64,
}

const LABEL_RADIUS: f64 = 0.62;

// Keeps the landing point away from segment borders so the pointer never
// sits on a line.
const LANDING_MARGIN: f64 = 0.15;

pub fn segment_angle(count: usize) -> f64 {
    360.0 / count as f64
}

/// Picks a winner uniformly and computes the rotation that brings it under
/// the pointer after `turns` extra full turns.
pub fn plan_spin<R: Rng + ?Sized>(
    count: usize,
    current_rotation: f64,
    turns: u32,
    rng: &mut R,
) -> Option<SpinPlan> {
    if count == 0 {
        return None;
    }

    let angle = segment_angle(count);
    let winner_index = rng.gen_range(0..count);
    let offset = rng.gen_range(LANDING_MARGIN..1.0 - LANDING_MARGIN);
    let landing = (winner_index as f64 + offset) * angle;

    let delta = f64::from(turns) * 360.0 + (-landing - current_rotation).rem_euclid(360.0);

    Some(SpinPlan {
        winner_index,
        rotation: current_rotation + delta,
    })
}

/// Index of the segment under the pointer at the given rotation.
pub fn segment_at(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let under_pointer = (-rotation).rem_euclid(360.0);
    let index = (under_pointer / segment_angle(count)).floor() as usize;
    Some(index.min(count - 1))
}

pub fn segment_shape(index: usize, count: usize, radius: f64) -> SegmentShape {
    let angle = segment_angle(count);
    let start = index as f64 * angle;
    let mid = start + angle / 2.0;

    let path = if count == 1 {
        format!(
            "M {c:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {c:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {c:.3} {top:.3} Z",
            c = radius,
            r = radius,
            top = 0.0,
            bottom = 2.0 * radius,
        )
    } else {
        let (x0, y0) = point_on_circle(radius, radius, start);
        let (x1, y1) = point_on_circle(radius, radius, start + angle);
        let large_arc = if angle > 180.0 { 1 } else { 0 };
        format!(
            "M {c:.3} {c:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z",
            c = radius,
            r = radius,
        )
    };

    let (label_x, label_y) = point_on_circle(radius, radius * LABEL_RADIUS, mid);

    SegmentShape {
        path,
        label_x,
        label_y,
        label_rotation: mid - 90.0,
    }
}

fn point_on_circle(center: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (center + radius * rad.sin(), center - radius * rad.cos())
}
