#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{ConfigError, GameConfig};
    use crate::cooldown::CooldownGate;
    use crate::enums::{EntityKind, ProjectileMotion};
    use crate::events::GameEvent;
    use crate::types::{Aabb, Playfield, SimTime};

    // ---- Cooldown gate ----

    #[test]
    fn test_gate_starts_ready() {
        let gate = CooldownGate::new(150);
        assert!(gate.ready(0));
        assert_eq!(gate.remaining_ms(0), 0);
    }

    #[test]
    fn test_gate_reopens_exactly_at_duration() {
        let mut gate = CooldownGate::new(150);
        gate.trigger(1_000);
        assert!(!gate.ready(1_000));
        assert!(!gate.ready(1_149), "ready one ms early");
        assert!(gate.ready(1_150), "should reopen at t + duration");
        assert!(gate.ready(5_000));
    }

    #[test]
    fn test_gate_read_does_not_mutate() {
        let mut gate = CooldownGate::new(500);
        gate.trigger(200);
        let before = gate;
        for now in [0, 200, 699, 700, 10_000] {
            let _ = gate.ready(now);
            let _ = gate.remaining_ms(now);
        }
        assert_eq!(gate, before);
    }

    #[test]
    fn test_gate_busy_start() {
        let gate = CooldownGate::busy(5_000, 0);
        assert!(!gate.ready(4_999));
        assert_eq!(gate.remaining_ms(1_000), 4_000);
        assert!(gate.ready(5_000));
    }

    #[test]
    fn test_gate_try_trigger() {
        let mut gate = CooldownGate::new(100);
        assert!(gate.try_trigger(10));
        assert!(!gate.try_trigger(50), "second trigger inside cooldown must fail");
        assert_eq!(gate.last_triggered_ms, Some(10));
        assert!(gate.try_trigger(110));
        assert_eq!(gate.last_triggered_ms, Some(110));
    }

    #[test]
    fn test_gate_zero_duration_always_ready() {
        let mut gate = CooldownGate::new(0);
        gate.trigger(42);
        assert!(gate.ready(42));
    }

    // ---- Geometry ----

    #[test]
    fn test_aabb_from_center() {
        let b = Aabb::from_center(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(b.left(), 90.0);
        assert_eq!(b.right(), 110.0);
        assert_eq!(b.top(), 45.0);
        assert_eq!(b.bottom(), 55.0);
        assert_eq!(b.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_aabb_disjoint() {
        let field = Playfield::new(100.0, 100.0).rect();
        let inside = Aabb::from_center(Vec2::new(50.0, 50.0), Vec2::splat(10.0));
        let straddling = Aabb::from_center(Vec2::new(-2.0, 50.0), Vec2::splat(10.0));
        let touching = Aabb::from_center(Vec2::new(-5.0, 50.0), Vec2::splat(10.0));
        let outside = Aabb::from_center(Vec2::new(-6.0, 50.0), Vec2::splat(10.0));
        assert!(!inside.is_disjoint(&field));
        assert!(!straddling.is_disjoint(&field));
        assert!(!touching.is_disjoint(&field));
        assert!(outside.is_disjoint(&field));
        assert!(!outside.is_disjoint(&field.expanded(2.0)));
    }

    #[test]
    fn test_clamp_center_pushes_each_edge_onto_boundary() {
        let field = Playfield::new(1920.0, 1080.0);
        let size = Vec2::new(70.0, 100.0);

        let c = field.clamp_center(Vec2::new(-300.0, -300.0), size);
        let b = Aabb::from_center(c, size);
        assert_eq!(b.left(), 0.0);
        assert_eq!(b.top(), 0.0);

        let c = field.clamp_center(Vec2::new(5000.0, 5000.0), size);
        let b = Aabb::from_center(c, size);
        assert_eq!(b.right(), 1920.0);
        assert_eq!(b.bottom(), 1080.0);

        let mid = Vec2::new(960.0, 540.0);
        assert_eq!(field.clamp_center(mid, size), mid, "inside boxes are untouched");
    }

    #[test]
    fn test_sim_time_ms() {
        let mut time = SimTime::default();
        for _ in 0..9 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 9);
        assert_eq!(time.now_ms(), 150);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_matches_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 1920.0);
        assert_eq!(config.window.height, 1080.0);
        assert_eq!(config.player.speed, 300.0);
        assert_eq!(config.player.shoot_cooldown_ms, 150);
        assert_eq!(config.player.teleport_cooldown_ms, 5_000);
        assert_eq!(config.player.teleport_radius, 320.0);
        assert_eq!(config.meteor.spawn_interval_ms, 500);
        assert_eq!(config.meteor.max_speed, 1_000);
        assert_eq!(config.stars.count, 50);
        assert_eq!(config.stars.waves.len(), 6);
        assert!(!config.stars.waves_enabled);
        assert_eq!(config.projectile.motion, ProjectileMotion::Aimed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = GameConfig::default();
        config.window.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::WindowSize { .. })));

        let mut config = GameConfig::default();
        config.timing.tick_rate = 0;
        assert_eq!(config.validate(), Err(ConfigError::TickRate));

        let mut config = GameConfig::default();
        config.player.speed = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "player.speed", .. })
        ));

        let mut config = GameConfig::default();
        config.meteor.spawn_near = 600;
        assert!(matches!(config.validate(), Err(ConfigError::SpawnBand { .. })));
    }

    #[test]
    fn test_zero_frame_cap_rejected() {
        let mut config = GameConfig::default();
        config.timing.max_frame_secs = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::FrameCap(0.0)));

        config.timing.max_frame_secs = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::FrameCap(_))));
    }

    #[test]
    fn test_window_larger_than_pixel_range_rejected() {
        let mut config = GameConfig::default();
        config.window.width = 1e12;
        assert!(matches!(config.validate(), Err(ConfigError::WindowSize { .. })));

        let mut config = GameConfig::default();
        config.window.height = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::WindowSize { .. })));
    }

    #[test]
    fn test_partial_config_json_fills_defaults() {
        let json = r#"{ "seed": 7, "player": { "speed": 450.0 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.player.speed, 450.0);
        assert_eq!(config.player.shoot_cooldown_ms, 150);
        assert_eq!(config.window.width, 1920.0);
    }

    // ---- Enums / events ----

    #[test]
    fn test_layer_order() {
        assert!(EntityKind::Star.layer() < EntityKind::Meteor.layer());
        assert!(EntityKind::Meteor.layer() < EntityKind::Projectile.layer());
        assert!(EntityKind::Projectile.layer() < EntityKind::Ship.layer());
    }

    #[test]
    fn test_game_event_is_tagged() {
        let json = serde_json::to_string(&GameEvent::QuitRequested).unwrap();
        assert_eq!(json, r#"{"type":"QuitRequested"}"#);

        let json = serde_json::to_string(&ProjectileMotion::Vertical).unwrap();
        assert_eq!(json, r#""vertical""#);
    }
}
