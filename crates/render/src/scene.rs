//! Projection of the cart-pole state onto a 2D pixel-space scene
//!
//! The world x axis is scaled so that twice the position threshold spans the
//! screen width; the cart sits on a horizontal track and the pole rotates
//! about an axle slightly above the cart's centre. Pixel y grows upwards.

use glam::Vec2;
use physics::{PhysicalConstants, SimulationState, Thresholds};

/// Fixed screen and body dimensions, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub screen_width: f32,
    pub screen_height: f32,
    /// World-to-pixel scale along x.
    pub scale: f32,
    /// Height of the track and of the cart's centre.
    pub track_y: f32,
    pub cart_width: f32,
    pub cart_height: f32,
    pub pole_width: f32,
    /// Full pole length in pixels.
    pub pole_length: f32,
}

impl SceneLayout {
    /// 600×400 screen fitted to the track limits and the pole length.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(thresholds: &Thresholds, constants: &PhysicalConstants) -> Self {
        let screen_width = 600.0;
        let world_width = thresholds.x_threshold as f32 * 2.0;
        let scale = screen_width / world_width;
        Self {
            screen_width,
            screen_height: 400.0,
            scale,
            track_y: 100.0,
            cart_width: 50.0,
            cart_height: 30.0,
            pole_width: 10.0,
            pole_length: scale * (2.0 * constants.pole_half_length() as f32),
        }
    }

    /// Axle height above the cart's centre.
    #[must_use]
    pub fn axle_offset(&self) -> f32 {
        self.cart_height / 4.0
    }

    /// Cart outline around its own centre.
    #[must_use]
    pub fn cart_polygon(&self) -> [Vec2; 4] {
        rectangle(
            -self.cart_width / 2.0,
            self.cart_width / 2.0,
            self.cart_height / 2.0,
            -self.cart_height / 2.0,
        )
    }

    /// Pole outline with the axle at the origin, pointing straight up.
    #[must_use]
    pub fn pole_polygon(&self) -> [Vec2; 4] {
        rectangle(
            -self.pole_width / 2.0,
            self.pole_width / 2.0,
            self.pole_length - self.pole_width / 2.0,
            -self.pole_width / 2.0,
        )
    }

    /// Place the cart and pole for `state`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn project(&self, state: &SimulationState) -> SceneFrame {
        let cart_x = state.cart_position as f32 * self.scale + self.screen_width / 2.0;
        SceneFrame {
            cart_translation: Vec2::new(cart_x, self.track_y),
            axle: Vec2::new(cart_x, self.track_y + self.axle_offset()),
            pole_rotation: -state.pole_angle as f32,
            layout: *self,
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::new(&Thresholds::default(), &PhysicalConstants::default())
    }
}

/// Placement of every scene element for one state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneFrame {
    /// Centre of the cart in pixels.
    pub cart_translation: Vec2,
    /// Pole pivot in pixels.
    pub axle: Vec2,
    /// Counter-clockwise pole rotation in radians; the negated pole angle.
    pub pole_rotation: f32,
    pub layout: SceneLayout,
}

impl SceneFrame {
    /// Cart corners in pixels.
    #[must_use]
    pub fn cart_corners(&self) -> [Vec2; 4] {
        self.layout.cart_polygon().map(|p| p + self.cart_translation)
    }

    /// Pole corners in pixels.
    #[must_use]
    pub fn pole_corners(&self) -> [Vec2; 4] {
        let rotation = Vec2::from_angle(self.pole_rotation);
        self.layout.pole_polygon().map(|p| self.axle + rotation.rotate(p))
    }

    /// Centre of the pole's far end in pixels.
    #[must_use]
    pub fn pole_tip(&self) -> Vec2 {
        let tip = Vec2::new(0.0, self.layout.pole_length - self.layout.pole_width / 2.0);
        self.axle + Vec2::from_angle(self.pole_rotation).rotate(tip)
    }

    /// Endpoints of the track line.
    #[must_use]
    pub fn track(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(0.0, self.layout.track_y),
            Vec2::new(self.layout.screen_width, self.layout.track_y),
        )
    }
}

fn rectangle(left: f32, right: f32, top: f32, bottom: f32) -> [Vec2; 4] {
    [
        Vec2::new(left, bottom),
        Vec2::new(left, top),
        Vec2::new(right, top),
        Vec2::new(right, bottom),
    ]
}
