//! Kinematic integration system.
//!
//! Updates each center from its `Kinematics`: center += direction * speed * dt.
//! Also turns spinning entities.

use glam::Vec2;
use hecs::World;

use shooter_core::components::{Kinematics, Spin, Transform};

/// Position after `dt` seconds of straight-line motion.
pub fn integrate(center: Vec2, kinematics: &Kinematics, dt: f32) -> Vec2 {
    center + kinematics.direction * kinematics.speed * dt
}

/// Run kinematic integration for every entity with Transform + Kinematics.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, kinematics)) in world.query_mut::<(&mut Transform, &Kinematics)>() {
        transform.center = integrate(transform.center, kinematics, dt);
    }

    for (_entity, (transform, spin)) in world.query_mut::<(&mut Transform, &Spin)>() {
        transform.rotation_deg = (transform.rotation_deg + spin.deg_per_sec * dt).rem_euclid(360.0);
    }
}
