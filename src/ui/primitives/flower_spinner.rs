//! Flower loading indicator primitive
//!
//! Eight petals around a centre; the brightest petal travels around the
//! flower as `phase` advances.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use std::f32::consts::TAU;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Point, Renderer, Theme, mouse};

/// Number of petals
pub const PETALS: usize = 8;

/// Faintest petal opacity
const MIN_ALPHA: f32 = 0.25;

/// Flower spinner configuration
#[derive(Debug, Clone, Copy)]
pub struct FlowerSpinner {
    /// Rotation progress in turns (wraps at 1.0)
    pub phase: f32,
    pub petal_color: Color,
    pub center_color: Color,
}

impl Default for FlowerSpinner {
    fn default() -> Self {
        Self {
            phase: 0.0,
            petal_color: crate::ui::theme::UNAVAILABLE,
            center_color: iced::color!(0xf6c945),
        }
    }
}

impl FlowerSpinner {
    pub fn new(phase: f32) -> Self {
        Self {
            phase: phase.rem_euclid(1.0),
            ..Default::default()
        }
    }
}

/// A petal's position relative to the flower centre and its opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    pub offset: (f32, f32),
    pub alpha: f32,
}

/// Lay out the petals for `phase` on a flower of `radius`
///
/// Petal `i` sits at angle `i / PETALS` turns. Its opacity fades with the
/// distance behind the leading petal.
pub fn petal_layout(phase: f32, radius: f32) -> [Petal; PETALS] {
    let phase = phase.rem_euclid(1.0);
    std::array::from_fn(|i| {
        let position = i as f32 / PETALS as f32;
        let angle = position * TAU - std::f32::consts::FRAC_PI_2;
        let behind = (phase - position).rem_euclid(1.0);
        Petal {
            offset: (angle.cos() * radius, angle.sin() * radius),
            alpha: 1.0 - behind * (1.0 - MIN_ALPHA),
        }
    })
}

impl<Message> Program<Message> for FlowerSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let size = bounds.width.min(bounds.height) / 2.0;
        let petal_radius = size * 0.28;

        for petal in petal_layout(self.phase, size - petal_radius) {
            let petal_center = Point::new(center.x + petal.offset.0, center.y + petal.offset.1);
            frame.fill(
                &Path::circle(petal_center, petal_radius),
                Color {
                    a: petal.alpha,
                    ..self.petal_color
                },
            );
        }

        frame.fill(&Path::circle(center, size * 0.3), self.center_color);

        vec![frame.into_geometry()]
    }
}

/// Create a flower spinner element
pub fn view_flower_spinner<'a, Message: 'a>(spinner: FlowerSpinner, size: f32) -> Element<'a, Message> {
    Canvas::new(spinner).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn petals_surround_the_centre() {
        let petals = petal_layout(0.0, 10.0);
        for petal in petals {
            let distance = (petal.offset.0.powi(2) + petal.offset.1.powi(2)).sqrt();
            assert!((distance - 10.0).abs() < 1e-4);
        }
        // First petal points straight up
        assert!(petals[0].offset.0.abs() < 1e-4);
        assert!((petals[0].offset.1 + 10.0).abs() < 1e-4);
    }

    #[test]
    fn leading_petal_follows_phase() {
        let brightest = |phase: f32| {
            petal_layout(phase, 1.0)
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.alpha.total_cmp(&b.1.alpha))
                .map(|(i, _)| i)
                .unwrap()
        };
        assert_eq!(brightest(0.0), 0);
        assert_eq!(brightest(0.25), 2);
        assert_eq!(brightest(0.5), 4);
        assert_eq!(brightest(1.25), 2);
    }

    #[test]
    fn alphas_stay_in_range() {
        for step in 0..40 {
            for petal in petal_layout(step as f32 / 40.0, 5.0) {
                assert!((MIN_ALPHA..=1.0).contains(&petal.alpha));
            }
        }
    }
}
