//! SVG pie chart geometry.
//!
//! Lays breakdown segments out as wedges in a `0 0 100 100` viewBox and
//! emits the inline `<svg>` markup. Angles are measured clockwise in
//! degrees from the top of the circle; one percentage point spans 3.6
//! degrees.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::models::BreakdownSegment;

/// Wedge fill colors, reused in order when segments outnumber them.
pub const PALETTE: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#6B7280",
];

const CENTER: f64 = 50.0;
const RADIUS: f64 = 40.0;
const DEGREES_PER_POINT: f64 = 3.6;

/// One laid-out pie wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl PieSlice {
    /// Arc flag for the wedge. Only a slice past the half circle takes
    /// the long way around.
    #[must_use]
    pub fn large_arc(&self) -> u8 {
        u8::from(self.percentage > 50.0)
    }

    /// SVG path: move to center, line out to the arc start, sweep
    /// clockwise to its end, close back to center.
    #[must_use]
    pub fn path(&self) -> String {
        let (x1, y1) = point_on_rim(self.start_angle);
        let (x2, y2) = point_on_rim(self.end_angle);
        format!(
            "M {CENTER} {CENTER} L {x1:.4} {y1:.4} A {RADIUS} {RADIUS} 0 {} 1 {x2:.4} {y2:.4} Z",
            self.large_arc()
        )
    }
}

/// Point on the pie rim at `angle` degrees, clockwise from twelve o'clock.
fn point_on_rim(angle: f64) -> (f64, f64) {
    let rad = (angle - 90.0) * PI / 180.0;
    (
        CENTER + RADIUS * rad.cos(),
        CENTER + RADIUS * rad.sin(),
    )
}

/// Lay out breakdown segments as wedges, accumulating angles in input
/// order and cycling the palette.
#[must_use]
pub fn pie_slices(segments: &[BreakdownSegment]) -> Vec<PieSlice> {
    let mut cumulative = 0.0;
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let start_angle = cumulative * DEGREES_PER_POINT;
            cumulative += segment.percentage;
            PieSlice {
                label: segment.crime_type,
                percentage: segment.percentage,
                start_angle,
                end_angle: cumulative * DEGREES_PER_POINT,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

/// Complete inline `<svg>` for the breakdown pie.
#[must_use]
pub fn pie_svg(segments: &[BreakdownSegment]) -> String {
    let mut svg = String::from(
        r#"<svg viewBox="0 0 100 100" class="pie" role="img" aria-label="Crime type breakdown">"#,
    );
    for slice in pie_slices(segments) {
        let _ = write!(
            svg,
            r#"<path d="{}" fill="{}" stroke="rgba(255,255,255,0.2)" stroke-width="0.5"><title>{}: {}%</title></path>"#,
            slice.path(),
            slice.color,
            slice.label,
            slice.percentage,
        );
    }
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CRIME_BREAKDOWN;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_slices_accumulate_angles() {
        let slices = pie_slices(&CRIME_BREAKDOWN);
        assert_eq!(slices.len(), 6);

        // 32% spans 0 to 115.2 degrees, then 22% carries on to 194.4.
        assert!(close(slices[0].start_angle, 0.0));
        assert!(close(slices[0].end_angle, 115.2));
        assert!(close(slices[1].start_angle, 115.2));
        assert!(close(slices[1].end_angle, 194.4));

        // The full table closes the circle.
        assert!(close(slices[5].end_angle, 360.0));
    }

    #[test]
    fn test_no_default_slice_needs_large_arc() {
        for slice in pie_slices(&CRIME_BREAKDOWN) {
            assert_eq!(slice.large_arc(), 0, "{} should be a short arc", slice.label);
        }
    }

    #[test]
    fn test_majority_slice_takes_long_arc() {
        let segments = [
            BreakdownSegment {
                crime_type: "Petty Theft",
                percentage: 60.0,
            },
            BreakdownSegment {
                crime_type: "Other",
                percentage: 40.0,
            },
        ];
        let slices = pie_slices(&segments);
        assert_eq!(slices[0].large_arc(), 1);
        assert_eq!(slices[1].large_arc(), 0);
    }

    #[test]
    fn test_palette_cycles_past_six() {
        let segments: Vec<BreakdownSegment> = (0..8)
            .map(|_| BreakdownSegment {
                crime_type: "Other",
                percentage: 12.5,
            })
            .collect();
        let slices = pie_slices(&segments);
        assert_eq!(slices[6].color, PALETTE[0]);
        assert_eq!(slices[7].color, PALETTE[1]);
    }

    #[test]
    fn test_path_anchors_at_top_of_circle() {
        let slices = pie_slices(&CRIME_BREAKDOWN);
        let path = slices[0].path();
        // Angle zero sits at twelve o'clock: (50, 10) on a radius-40 rim.
        assert!(path.starts_with("M 50 50 L 50.0000 10.0000 A 40 40 0 0 1 "));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn test_svg_wraps_every_segment() {
        let svg = pie_svg(&CRIME_BREAKDOWN);
        assert!(svg.starts_with(r#"<svg viewBox="0 0 100 100""#));
        assert_eq!(svg.matches("<path ").count(), 6);
        assert!(svg.contains("#3B82F6"));
        assert!(svg.contains("Petty Theft: 32%"));
        assert!(svg.ends_with("</svg>"));
    }
}
