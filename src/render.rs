use crate::core::{Dot, Ring, Scene};
use std::f64::consts::TAU;
use web_sys as web;

// drawn white; the overlay's mix-blend-mode inverts it against the page
const INK: &str = "#ffffff";

pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

/// Draw one frame from the scene records. Sizes in the scene are CSS pixels.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
    dpr: f64,
) {
    clear(ctx, canvas);
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.set_fill_style_str(INK);
    ctx.set_stroke_style_str(INK);

    for dot in &scene.particles {
        fill_dot(ctx, dot);
    }
    if scene.visible {
        for orb in &scene.orbs {
            fill_dot(ctx, orb);
        }
        stroke_ring(ctx, &scene.follower);
        let c = &scene.cursor;
        fill_dot(
            ctx,
            &Dot {
                position: c.position,
                size: c.size,
                opacity: 1.0,
                scale: c.scale,
            },
        );
    }
    ctx.set_global_alpha(1.0);
}

#[inline]
fn fill_dot(ctx: &web::CanvasRenderingContext2d, dot: &Dot) {
    let r = (dot.size * dot.scale * 0.5) as f64;
    if r <= 0.0 || dot.opacity <= 0.0 {
        return;
    }
    ctx.set_global_alpha(dot.opacity as f64);
    ctx.begin_path();
    if ctx
        .arc(dot.position.x as f64, dot.position.y as f64, r, 0.0, TAU)
        .is_ok()
    {
        ctx.fill();
    }
}

#[inline]
fn stroke_ring(ctx: &web::CanvasRenderingContext2d, ring: &Ring) {
    // the CSS ring's border sits inside its box
    let r = ((ring.diameter - ring.border) * 0.5) as f64;
    if r <= 0.0 {
        return;
    }
    ctx.set_global_alpha(ring.opacity as f64);
    ctx.set_line_width(ring.border as f64);
    ctx.begin_path();
    if ctx
        .arc(ring.position.x as f64, ring.position.y as f64, r, 0.0, TAU)
        .is_ok()
    {
        ctx.stroke();
    }
}
