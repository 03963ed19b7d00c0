use egui::Pos2;
use log::debug;

use crate::config::EditorConfig;
use crate::stroke::Stroke;
use crate::tools::{Tool, ToolContext};

/// Sample a disk of `radius` around `center` on a grid of `step` units.
///
/// The grid starts at `center - radius` on both axes and stops before
/// `center + radius`; only samples within `radius` of the center are kept.
pub fn fill_points(center: Pos2, radius: u32, step: u32) -> Vec<Pos2> {
    let step = step.max(1) as usize;
    let r = radius as f32;
    let offsets: Vec<f32> = (0..2 * radius).step_by(step).map(|i| i as f32 - r).collect();

    let mut points = Vec::new();
    for &dx in &offsets {
        for &dy in &offsets {
            if dx * dx + dy * dy <= r * r {
                points.push(Pos2::new(center.x + dx, center.y + dy));
            }
        }
    }
    points
}

/// Crude fill: stamps a dense disk stroke where the canvas is clicked.
#[derive(Debug, Clone, Default)]
pub struct FillTool;

impl FillTool {
    pub fn new() -> Self {
        Self
    }

    pub fn radius(brush_size: u32, config: &EditorConfig) -> u32 {
        config.fill_min_radius.max(brush_size * config.fill_radius_factor)
    }
}

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "Fill"
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        let radius = Self::radius(ctx.brush.size, ctx.config);
        let points = fill_points(pos, radius, ctx.config.fill_step);
        if points.is_empty() {
            return;
        }
        debug!("Fill at {:?} with radius {} ({} samples)", pos, radius, points.len());
        ctx.frame
            .add_stroke(Stroke::new(ctx.brush.color, ctx.config.fill_width, points));
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_>) {}

    fn deactivate(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_radius_has_minimum() {
        let config = EditorConfig::default();
        assert_eq!(FillTool::radius(3, &config), 40);
        assert_eq!(FillTool::radius(10, &config), 50);
    }

    #[test]
    fn test_fill_points_stay_inside_disk() {
        let center = pos2(100.0, 80.0);
        let points = fill_points(center, 40, 4);
        assert!(!points.is_empty());
        for p in &points {
            assert!(p.distance(center) <= 40.0);
            assert_eq!((p.x - 60.0) % 4.0, 0.0);
            assert_eq!((p.y - 40.0) % 4.0, 0.0);
        }
    }

    #[test]
    fn test_upper_edge_is_excluded() {
        let center = pos2(0.0, 0.0);
        let points = fill_points(center, 40, 4);
        assert!(points.contains(&pos2(-40.0, 0.0)));
        assert!(!points.contains(&pos2(40.0, 0.0)));
    }
}
