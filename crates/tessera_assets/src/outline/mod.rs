//! Glyph outline commands and their cubic patch form.

pub mod parser;

use glam::Vec2;

pub use parser::{OutlineParser, ParsedOutline};

/// A drawing command read from an outline resource.  Coordinates are kept
/// exactly as written in the resource; scaling happens during layout.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GlyphCommand {
    /// Starts a subpath; sets both the subpath start and the current point.
    MoveTo(Vec2),
    /// Cubic from the current point to `to`.
    CurveTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    /// Straight segment from the current point.
    LineTo(Vec2),
    /// Straight segment back to the subpath start.  Leaves the current point
    /// where it was.
    ClosePath,
}

impl GlyphCommand {
    /// Coordinates written in the resource for this command, in order.
    pub fn points(&self) -> impl Iterator<Item = Vec2> {
        let (points, count) = match *self {
            Self::MoveTo(p) | Self::LineTo(p) => ([p, Vec2::ZERO, Vec2::ZERO], 1),
            Self::CurveTo { ctrl1, ctrl2, to } => ([ctrl1, ctrl2, to], 3),
            Self::ClosePath => ([Vec2::ZERO; 3], 0),
        };
        points.into_iter().take(count)
    }
}

/// Four control points of a cubic Bezier segment: the only primitive the
/// GPU pipeline consumes.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BezierPatch {
    pub points: [Vec2; 4],
}

impl BezierPatch {
    pub fn new(p0: Vec2, ctrl1: Vec2, ctrl2: Vec2, p3: Vec2) -> Self {
        Self {
            points: [p0, ctrl1, ctrl2, p3],
        }
    }

    /// A straight segment expressed as a cubic, controls at 25% and 75%.
    pub fn line(p0: Vec2, p1: Vec2) -> Self {
        let ctrl1 = p0 * 0.75 + p1 * 0.25;
        let ctrl2 = p0 * 0.25 + p1 * 0.75;
        Self::new(p0, ctrl1, ctrl2, p1)
    }

    /// Evaluates the cubic at `t` in `[0, 1]` (Bernstein form, the same
    /// expression the patch shader uses).
    pub fn eval(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
    }
}

/// The ordered commands for one character code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphOutline {
    pub code: u32,
    pub commands: Vec<GlyphCommand>,
}

impl GlyphOutline {
    pub fn new(code: u32) -> Self {
        Self {
            code,
            commands: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Walks the commands in order, tracking the current point and subpath
    /// start, and yields one patch per curve, line and close.
    ///
    /// `MoveTo` yields nothing.  A command before the first `MoveTo` starts
    /// from the origin.
    pub fn patches(&self) -> impl Iterator<Item = BezierPatch> + '_ {
        self.mapped_patches(|p| p)
    }

    /// Same walk as [`patches`](Self::patches) with `f` applied to every
    /// resource coordinate first.  Line controls are interpolated between the
    /// mapped endpoints, and the current point starts at the origin of the
    /// mapped space rather than at `f(0, 0)`.
    pub fn mapped_patches<'a, F>(&'a self, mut f: F) -> impl Iterator<Item = BezierPatch> + 'a
    where
        F: FnMut(Vec2) -> Vec2 + 'a,
    {
        let mut start = Vec2::ZERO;
        let mut current = Vec2::ZERO;
        self.commands.iter().filter_map(move |cmd| match *cmd {
            GlyphCommand::MoveTo(p) => {
                start = f(p);
                current = start;
                None
            }
            GlyphCommand::CurveTo { ctrl1, ctrl2, to } => {
                let to = f(to);
                let patch = BezierPatch::new(current, f(ctrl1), f(ctrl2), to);
                current = to;
                Some(patch)
            }
            GlyphCommand::LineTo(p) => {
                let p = f(p);
                let patch = BezierPatch::line(current, p);
                current = p;
                Some(patch)
            }
            GlyphCommand::ClosePath => Some(BezierPatch::line(current, start)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn line_controls_sit_at_quarter_points() {
        let p0 = v(1.0, 2.0);
        let p1 = v(5.0, -6.0);
        let patch = BezierPatch::line(p0, p1);
        assert_eq!(patch.points[0], p0);
        assert_eq!(patch.points[1], p0 * 0.75 + p1 * 0.25);
        assert_eq!(patch.points[2], p0 * 0.25 + p1 * 0.75);
        assert_eq!(patch.points[3], p1);
        assert_eq!(patch.points[1], v(2.0, 0.0));
        assert_eq!(patch.points[2], v(4.0, -4.0));
    }

    #[test]
    fn degenerate_line_cubic_stays_on_the_segment() {
        let patch = BezierPatch::line(v(0.0, 0.0), v(8.0, 4.0));
        for i in 0..=8 {
            let p = patch.eval(i as f32 / 8.0);
            assert!((p.y - p.x * 0.5).abs() < 1e-5, "{p:?} is off the line");
        }
        assert_eq!(patch.eval(0.0), v(0.0, 0.0));
        assert_eq!(patch.eval(1.0), v(8.0, 4.0));
    }

    #[test]
    fn bare_move_yields_no_patch() {
        let outline = GlyphOutline {
            code: 65,
            commands: vec![GlyphCommand::MoveTo(v(3.0, 4.0))],
        };
        assert_eq!(outline.patches().count(), 0);
    }

    #[test]
    fn patches_follow_the_current_point() {
        let outline = GlyphOutline {
            code: 65,
            commands: vec![
                GlyphCommand::MoveTo(v(0.0, 0.0)),
                GlyphCommand::LineTo(v(4.0, 0.0)),
                GlyphCommand::CurveTo {
                    ctrl1: v(5.0, 1.0),
                    ctrl2: v(5.0, 3.0),
                    to: v(4.0, 4.0),
                },
                GlyphCommand::LineTo(v(0.0, 4.0)),
                GlyphCommand::ClosePath,
            ],
        };
        let patches: Vec<_> = outline.patches().collect();
        assert_eq!(patches.len(), 4);
        assert_eq!(patches[0], BezierPatch::line(v(0.0, 0.0), v(4.0, 0.0)));
        assert_eq!(
            patches[1],
            BezierPatch::new(v(4.0, 0.0), v(5.0, 1.0), v(5.0, 3.0), v(4.0, 4.0))
        );
        assert_eq!(patches[2], BezierPatch::line(v(4.0, 4.0), v(0.0, 4.0)));
        assert_eq!(patches[3], BezierPatch::line(v(0.0, 4.0), v(0.0, 0.0)));
    }

    #[test]
    fn line_after_close_starts_at_last_endpoint() {
        let outline = GlyphOutline {
            code: 65,
            commands: vec![
                GlyphCommand::MoveTo(v(0.0, 0.0)),
                GlyphCommand::LineTo(v(4.0, 0.0)),
                GlyphCommand::ClosePath,
                GlyphCommand::LineTo(v(4.0, 4.0)),
            ],
        };
        let patches: Vec<_> = outline.patches().collect();
        assert_eq!(patches[1], BezierPatch::line(v(4.0, 0.0), v(0.0, 0.0)));
        assert_eq!(patches[2], BezierPatch::line(v(4.0, 0.0), v(4.0, 4.0)));
    }

    #[test]
    fn mapped_walk_starts_at_mapped_origin() {
        let outline = GlyphOutline {
            code: 65,
            commands: vec![GlyphCommand::LineTo(v(2.0, 0.0)), GlyphCommand::ClosePath],
        };
        let shift = |p: Vec2| p + v(10.0, 0.0);
        let patches: Vec<_> = outline.mapped_patches(shift).collect();
        // no MoveTo yet: the walk begins at (0, 0) after mapping, not at f(0, 0)
        assert_eq!(patches[0], BezierPatch::line(v(0.0, 0.0), v(12.0, 0.0)));
        assert_eq!(patches[1], BezierPatch::line(v(12.0, 0.0), v(0.0, 0.0)));
    }

    #[test]
    fn command_points_follow_resource_order() {
        let curve = GlyphCommand::CurveTo {
            ctrl1: v(1.0, 2.0),
            ctrl2: v(3.0, 4.0),
            to: v(5.0, 6.0),
        };
        assert_eq!(
            curve.points().collect::<Vec<_>>(),
            vec![v(1.0, 2.0), v(3.0, 4.0), v(5.0, 6.0)]
        );
        assert_eq!(GlyphCommand::MoveTo(v(7.0, 8.0)).points().count(), 1);
        assert_eq!(GlyphCommand::ClosePath.points().count(), 0);
    }

    #[test]
    fn close_draws_back_to_latest_subpath_start() {
        let outline = GlyphOutline {
            code: 111,
            commands: vec![
                GlyphCommand::MoveTo(v(0.0, 0.0)),
                GlyphCommand::LineTo(v(1.0, 0.0)),
                GlyphCommand::ClosePath,
                GlyphCommand::MoveTo(v(10.0, 10.0)),
                GlyphCommand::LineTo(v(12.0, 10.0)),
                GlyphCommand::ClosePath,
                // continues from the last explicit point, not the start
                GlyphCommand::LineTo(v(10.0, 20.0)),
            ],
        };
        let patches: Vec<_> = outline.patches().collect();
        assert_eq!(patches.len(), 5);
        assert_eq!(patches[1], BezierPatch::line(v(1.0, 0.0), v(0.0, 0.0)));
        assert_eq!(patches[3], BezierPatch::line(v(12.0, 10.0), v(10.0, 10.0)));
        assert_eq!(patches[4].points[0], v(12.0, 10.0));
    }
}
