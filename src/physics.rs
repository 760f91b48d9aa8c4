//! Per-frame particle physics.
//!
//! One step, in order:
//!
//! 1. Move: `position += velocity`.
//! 2. Bounce: a coordinate past either edge flips the sign of that velocity
//!    component. Position is not clamped, so a particle can sit outside the
//!    surface for a frame.
//! 3. Repel: inside the pointer radius, velocity is pushed away from the
//!    pointer by `(radius - distance) / radius`.
//!
//! Repulsion accumulates in velocity every frame a particle stays in range,
//! and there is no delta-time scaling.

use glam::Vec2;

use crate::input::{FieldContext, PointerState, SurfaceDimensions};
use crate::particle::Particle;

/// Advance one particle by one frame.
pub fn step_particle(particle: &mut Particle, ctx: &FieldContext) {
    particle.position += particle.velocity;
    bounce(particle, ctx.surface);
    repel(particle, &ctx.pointer);
}

/// Advance every particle in order.
pub fn step_all(particles: &mut [Particle], ctx: &FieldContext) {
    for particle in particles {
        step_particle(particle, ctx);
    }
}

/// Flip each velocity component whose coordinate lies outside the surface.
pub fn bounce(particle: &mut Particle, surface: SurfaceDimensions) {
    let size = surface.size();
    if particle.position.x > size.x || particle.position.x < 0.0 {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y > size.y || particle.position.y < 0.0 {
        particle.velocity.y = -particle.velocity.y;
    }
}

/// Scalar push in `(0, 1]` for a particle `distance` away from the pointer,
/// or `None` when it is out of range.
#[inline]
pub fn repulsion_force(distance: f32, radius: f32) -> Option<f32> {
    (distance < radius).then(|| (radius - distance) / radius)
}

/// Push the particle's velocity away from the pointer, if present and in range.
pub fn repel(particle: &mut Particle, pointer: &PointerState) {
    let Some(pointer_pos) = pointer.position else {
        return;
    };

    let delta: Vec2 = pointer_pos - particle.position;
    let distance = delta.length();

    if let Some(force) = repulsion_force(distance, pointer.radius) {
        let angle = delta.y.atan2(delta.x);
        particle.velocity.x -= force * angle.cos();
        particle.velocity.y -= force * angle.sin();
    }
}
