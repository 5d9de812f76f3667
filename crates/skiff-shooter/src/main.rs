//! Example game: a ship sprite at the bottom of the window, steered with
//! Left/Right or A/D. Escape closes the window.

mod ship;

use anyhow::Result;
use skiff_engine::assets::EmbeddedAssets;
use skiff_engine::core::{FrameCtx, FrameInfo, Game, InitCtx};
use skiff_engine::input::Key;
use skiff_engine::logging::{init_logging, LoggingConfig};
use skiff_engine::render::DrawOptions;
use skiff_engine::texture::Texture;
use skiff_engine::window::{Runtime, RuntimeConfig};

use ship::Ship;

const SHIP_ASSET: &str = "/ship.png";

struct Shooter {
    assets: EmbeddedAssets,
    ship_texture: Option<Texture>,
    ship: Ship,
}

impl Shooter {
    fn new(assets: EmbeddedAssets) -> Self {
        Self {
            assets,
            ship_texture: None,
            ship: Ship::default(),
        }
    }
}

impl Game for Shooter {
    fn init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()> {
        let texture = Texture::load_from_resource(ctx.textures(), &self.assets, SHIP_ASSET)?;
        log::info!("loaded ship sprite ({}x{})", texture.width(), texture.height());
        self.ship_texture = Some(texture);
        Ok(())
    }

    fn render(&mut self, frame: FrameInfo, ctx: &mut FrameCtx<'_>) {
        let axis = ship::axis(
            ctx.is_key_down(Key::ArrowLeft) || ctx.is_key_down(Key::A),
            ctx.is_key_down(Key::ArrowRight) || ctx.is_key_down(Key::D),
        );
        let Some(texture) = self.ship_texture.as_ref() else {
            return;
        };
        self.ship.steer(axis, frame.delta, frame.width, texture.width());

        let rect = self.ship.rect((frame.width, frame.height), texture.width());
        ctx.draw_texture(Some(texture), Some(rect), &DrawOptions::new());
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let assets = EmbeddedAssets::new().with(SHIP_ASSET, include_bytes!("../assets/ship.png"));

    if let Err(err) = Runtime::new(RuntimeConfig::default()).run(Shooter::new(assets)) {
        eprintln!("skiff-shooter: {err:#}");
        std::process::exit(1);
    }
}
