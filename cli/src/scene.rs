//! Random demo scene: a permanent terrain grid under a handful of wandering
//! units and assorted primitives.

use std::f64::consts::TAU;
use std::io::Write;

use rand::Rng;
use rewind::{AreaType, ClientError, Color, DEFAULT_LAYER, Point, RewindClient, Side, Unit, UnitType};

/// Terrain cells per side.
pub const GRID: i32 = 32;
/// Side length of the square world; each terrain cell is 32 units wide.
pub const WORLD: f64 = 1024.0;

const UNIT_RADIUS: f64 = 8.0;
const UNIT_SPEED: f64 = 6.0;
const MAX_HP: i32 = 100;
const COOLDOWN: i32 = 30;

pub struct Scene<R> {
    rng: R,
    units: Vec<Unit>,
}

impl<R: Rng> Scene<R> {
    pub fn new(mut rng: R, count: usize) -> Self {
        let units = (0..count).map(|_| spawn_unit(&mut rng)).collect();
        Self { rng, units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Terrain grid drawn once into a permanent frame.
    pub fn draw_background<W: Write>(&mut self, viewer: &mut RewindClient<W>) -> Result<(), ClientError> {
        viewer.set_options(Some(1), Some(true))?;
        for x in 0..GRID {
            for y in 0..GRID {
                let area = AreaType::ALL[self.rng.random_range(0..AreaType::ALL.len())];
                if area != AreaType::Unknown {
                    viewer.area_description(x, y, area)?;
                }
            }
        }
        viewer.rectangle((0.0, 0.0), (WORLD, WORLD), Color::GRAY)?;
        viewer.end_frame()?;
        viewer.set_permanent(false)
    }

    /// Advance every unit one step and draw a full frame.
    pub fn draw_frame<W: Write>(&mut self, viewer: &mut RewindClient<W>, tick: u32) -> Result<(), ClientError> {
        for unit in &mut self.units {
            step_unit(unit, &mut self.rng);
        }

        let units = &self.units;
        let rng = &mut self.rng;
        viewer.frame(|v| {
            v.set_layer(DEFAULT_LAYER)?;
            for unit in units {
                v.living_unit(unit)?;
                v.circle_popup(
                    (unit.x, unit.y),
                    unit.r,
                    &format!("{:?} {:?}\nhp {}/{}", unit.side, unit.unit_type, unit.hp, unit.max_hp),
                )?;
            }

            v.set_layer(DEFAULT_LAYER + 1)?;
            v.fill_rectangle(random_point(rng), random_point(rng), Color::BLACK.with_alpha(70))?;
            v.fill_circle(random_point(rng), 40.0, Color::GREEN.with_alpha(Color::ALPHA_HALF))?;
            v.line(random_point(rng), random_point(rng), Color::YELLOW)?;
            v.polyline([random_point(rng), random_point(rng), random_point(rng)], Color::RED)?;
            v.triangle_gradient(
                [random_point(rng), random_point(rng), random_point(rng)],
                [Color::BLUE, Color::RED, Color::MAGENTA],
                true,
            )?;
            v.rect_popup(random_point(rng), random_point(rng), "random zone")?;
            v.message(&format!("tick {tick}\nunits {}", units.len()))
        })
    }
}

fn random_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.random_range(1.0..WORLD), rng.random_range(1.0..WORLD))
}

fn spawn_unit(rng: &mut impl Rng) -> Unit {
    let side = match rng.random_range(0..3) {
        0 => Side::Ally,
        1 => Side::Enemy,
        _ => Side::Neutral,
    };
    Unit {
        x: rng.random_range(UNIT_RADIUS..WORLD - UNIT_RADIUS),
        y: rng.random_range(UNIT_RADIUS..WORLD - UNIT_RADIUS),
        r: UNIT_RADIUS,
        hp: MAX_HP,
        max_hp: MAX_HP,
        rem_cooldown: 0,
        cooldown: COOLDOWN,
        side,
        course: rng.random_range(0.0..TAU),
        selected: rng.random_bool(0.1),
        unit_type: UnitType::ALL[rng.random_range(1..UnitType::ALL.len())],
    }
}

/// Move forward, turn back at the world edge, and tick the weapon cooldown.
fn step_unit(unit: &mut Unit, rng: &mut impl Rng) {
    unit.course = (unit.course + rng.random_range(-0.2..0.2)).rem_euclid(TAU);
    let x = unit.x + UNIT_SPEED * unit.course.cos();
    let y = unit.y + UNIT_SPEED * unit.course.sin();
    let inside = |v: f64| (unit.r..=WORLD - unit.r).contains(&v);
    if inside(x) && inside(y) {
        unit.x = x;
        unit.y = y;
    } else {
        unit.course = (unit.course + std::f64::consts::PI).rem_euclid(TAU);
    }

    if unit.rem_cooldown > 0 {
        unit.rem_cooldown -= 1;
    } else if rng.random_bool(0.05) {
        unit.rem_cooldown = unit.cooldown;
        unit.hp = (unit.hp - rng.random_range(1..=10)).max(1);
    }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod tests;
