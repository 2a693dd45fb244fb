//! Canvas 2D render sink
//!
//! Pure presentation: reads the game state each frame and repaints the
//! 360x640 logical playfield. Nothing here feeds back into the sim.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{GameState, ItemKind};

/// Playfield background
const BG_COLOR: &str = "#e8f5e9";
/// Ground strip
const GROUND_COLOR: &str = "#a5d6a7";
/// Player body
const PLAYER_COLOR: &str = "#33691e";
/// Player eye marks
const EYE_COLOR: &str = "#fff";
/// Healthy item body (apple)
const HEALTHY_COLOR: &str = "#ff5252";
/// Healthy item stem
const STEM_COLOR: &str = "#2e7d32";
/// Junk item body
const JUNK_COLOR: &str = "#8d6e63";
/// Junk item wrapper stripe
const JUNK_STRIPE_COLOR: &str = "#ffeb3b";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Repaint the whole playfield from the current state
    pub fn render(&self, state: &GameState) {
        let ctx = &self.ctx;
        let w = WORLD_W as f64;
        let h = WORLD_H as f64;

        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(BG_COLOR);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str(GROUND_COLOR);
        ctx.fill_rect(0.0, GROUND_Y as f64, w, GROUND_H as f64);

        self.draw_player(state);
        for item in &state.items {
            match item.kind {
                ItemKind::Healthy => self.draw_healthy(item.pos.x as f64, item.pos.y as f64),
                ItemKind::Junk => self.draw_junk(item.pos.x as f64, item.pos.y as f64),
            }
        }
    }

    /// Colored rectangle with two eye marks
    fn draw_player(&self, state: &GameState) {
        let ctx = &self.ctx;
        let x = state.player.pos.x as f64;
        let y = state.player.pos.y as f64;

        ctx.set_fill_style_str(PLAYER_COLOR);
        ctx.fill_rect(x, y, PLAYER_W as f64, PLAYER_H as f64);

        ctx.set_fill_style_str(EYE_COLOR);
        ctx.fill_rect(x + 6.0, y + 10.0, 6.0, 6.0);
        ctx.fill_rect(x + 20.0, y + 10.0, 6.0, 6.0);
    }

    /// Red circle with a stem
    fn draw_healthy(&self, x: f64, y: f64) {
        let ctx = &self.ctx;
        let size = ITEM_SIZE as f64;
        let r = size / 2.0;

        ctx.set_fill_style_str(HEALTHY_COLOR);
        ctx.begin_path();
        ctx.ellipse(x + r, y + r, r, r, 0.0, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.fill();

        ctx.set_fill_style_str(STEM_COLOR);
        ctx.fill_rect(x + r - 2.0, y - 6.0, 4.0, 6.0);
    }

    /// Brown rectangle with a yellow wrapper stripe
    fn draw_junk(&self, x: f64, y: f64) {
        let ctx = &self.ctx;
        let size = ITEM_SIZE as f64;

        ctx.set_fill_style_str(JUNK_COLOR);
        ctx.fill_rect(x, y, size, size);

        ctx.set_fill_style_str(JUNK_STRIPE_COLOR);
        ctx.fill_rect(x + 4.0, y + 6.0, size - 8.0, 6.0);
    }
}
