use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

const GRAVE: Color = Color::Rgb(12, 14, 12);
const BLOOD: Color = Color::Rgb(200, 50, 50);

/// Opening sweep when the app starts
pub fn graveyard_rise() -> Effect {
    fx::sweep_in(
        Motion::DownToUp,
        8,
        2,
        GRAVE,
        (500, Interpolation::CubicOut),
    )
}

/// New wave: the horde materializes out of the ground
pub fn horde_arrival() -> Effect {
    fx::coalesce((450, Interpolation::CubicOut))
}

/// Strength spent by hand: the meter flashes red and settles back
pub fn strength_drain() -> Effect {
    let flash = fx::fade_to_fg(BLOOD, (150, Interpolation::QuadOut));
    let settle = fx::fade_from_fg(BLOOD, (500, Interpolation::QuadIn));
    fx::sequence(&[flash, settle])
}

/// A removed card's slot dissolves away
pub fn banish() -> Effect {
    fx::dissolve((300, Interpolation::QuadIn))
}
