//! Rendering: draws the starfield to a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the field and produces pixels — it does not mutate any engine state.
//! None of the Canvas2D calls used here are fallible, so the draw is
//! infallible; acquiring the context is the host's problem.

use web_sys::CanvasRenderingContext2d;

use crate::consts::{STAR_GLOW_BLUR, STAR_LINE_WIDTH};
use crate::starfield::Starfield;

/// Clear the surface and stroke every star as a white, soft-glow segment
/// from its position along its heading, at its current opacity.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &Starfield) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    for star in field.stars() {
        ctx.save();
        ctx.set_global_alpha(star.alpha);
        ctx.set_stroke_style_str("white");
        ctx.set_shadow_color("#fff");
        ctx.set_shadow_blur(STAR_GLOW_BLUR);
        ctx.set_line_width(STAR_LINE_WIDTH);
        ctx.begin_path();
        ctx.move_to(star.x, star.y);
        ctx.line_to(
            star.angle.cos().mul_add(star.length, star.x),
            star.angle.sin().mul_add(star.length, star.y),
        );
        ctx.stroke();
        ctx.restore();
    }
}
