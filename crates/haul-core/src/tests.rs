//! Unit tests for haul-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, PlayerId};

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
        assert!(PlayerId(100) > PlayerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(PlayerId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod tile {
    use crate::{HexDir, TileCoord, Y_SCALE};

    #[test]
    fn six_neighbors_fixed_order() {
        // Even row: NE, E, SE, SW, W, NW.
        let t = TileCoord::new(4, 4);
        let n = t.neighbors();
        assert_eq!(n[0], TileCoord::new(4, 3)); // NE
        assert_eq!(n[1], TileCoord::new(5, 4)); // E
        assert_eq!(n[2], TileCoord::new(4, 5)); // SE
        assert_eq!(n[3], TileCoord::new(3, 5)); // SW
        assert_eq!(n[4], TileCoord::new(3, 4)); // W
        assert_eq!(n[5], TileCoord::new(3, 3)); // NW
    }

    #[test]
    fn odd_row_deltas_shift_east() {
        let t = TileCoord::new(4, 5);
        let n = t.neighbors();
        assert_eq!(n[0], TileCoord::new(5, 4)); // NE
        assert_eq!(n[2], TileCoord::new(5, 6)); // SE
        assert_eq!(n[5], TileCoord::new(4, 4)); // NW
    }

    #[test]
    fn neighbors_at_distance_one() {
        for &tile in &[TileCoord::new(4, 4), TileCoord::new(4, 5), TileCoord::new(0, 0)] {
            for n in tile.neighbors() {
                assert_eq!(tile.hex_distance(n), 1, "{tile} -> {n}");
                assert!(tile.is_adjacent(n));
            }
        }
    }

    #[test]
    fn distance_identity_and_symmetry() {
        let a = TileCoord::new(3, 7);
        let b = TileCoord::new(11, 2);
        assert_eq!(a.hex_distance(a), 0);
        assert_eq!(a.hex_distance(b), b.hex_distance(a));
    }

    #[test]
    fn triangle_inequality() {
        let tiles = [
            TileCoord::new(0, 0),
            TileCoord::new(5, 3),
            TileCoord::new(2, 9),
            TileCoord::new(8, 8),
        ];
        for &a in &tiles {
            for &b in &tiles {
                for &c in &tiles {
                    assert!(a.hex_distance(c) <= a.hex_distance(b) + b.hex_distance(c));
                }
            }
        }
    }

    #[test]
    fn same_row_distance_is_dx() {
        let a = TileCoord::new(50, 50);
        assert_eq!(a.hex_distance(TileCoord::new(60, 50)), 10);
        assert_eq!(a.hex_distance(TileCoord::new(61, 50)), 11);
    }

    #[test]
    fn world_step_is_near_unit_length() {
        for &tile in &[TileCoord::new(4, 4), TileCoord::new(4, 5)] {
            for n in tile.neighbors() {
                let d = tile.world_distance(n);
                assert!((d - 1.0).abs() < 1e-3, "step {tile} -> {n} has length {d}");
            }
        }
    }

    #[test]
    fn world_distance_bounded_by_hex_distance() {
        let a = TileCoord::new(2, 3);
        let b = TileCoord::new(14, 10);
        assert!(a.world_distance(b) <= a.hex_distance(b) as f32 + 1e-3);
    }

    #[test]
    fn y_scale_just_below_row_spacing() {
        let exact = (3.0f32).sqrt() / 2.0;
        assert!(Y_SCALE < exact);
        assert!((Y_SCALE - exact).abs() < 1e-5);
    }

    #[test]
    fn row_major_index() {
        assert_eq!(TileCoord::new(3, 2).index(10), 23);
        assert_eq!(HexDir::ALL.len(), 6);
    }
}

#[cfg(test)]
mod material {
    use crate::Material;

    #[test]
    fn display() {
        assert_eq!(Material::Log.to_string(), "log");
        assert_eq!(Material::IronOre.to_string(), "iron_ore");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(1.0), 10);
        assert_eq!(clock.ticks_for_secs(0.05), 1);
    }

    #[test]
    fn config_end_tick() {
        let cfg = SimConfig {
            tick_dt_secs: 0.1,
            total_ticks: 600,
            seed: 42,
        };
        assert_eq!(cfg.end_tick(), Tick(600));
        assert!((cfg.make_clock().tick_dt_secs - 0.1).abs() < 1e-9);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "sibling child streams should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod events {
    use crate::{EntityId, Event, EventLog, EventSink, Material, Tick};

    #[test]
    fn log_records_in_order() {
        let mut log = EventLog::new();
        log.emit(
            Tick(1),
            &Event::PickupComplete {
                carrier: EntityId(1),
                building: EntityId(200),
                material: Material::Log,
                amount: 1,
            },
        );
        log.emit(
            Tick(2),
            &Event::ReturnedHome {
                carrier: EntityId(1),
                home: EntityId(100),
            },
        );
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries[0].0, Tick(1));
        assert_eq!(log.named("pickupComplete").len(), 1);
        assert_eq!(log.named("deliveryComplete").len(), 0);
    }

    #[test]
    fn event_names() {
        let e = Event::ServiceAreaChanged {
            building: EntityId(9),
            center: crate::TileCoord::new(1, 1),
            radius: 5,
        };
        assert_eq!(e.name(), "serviceAreaChanged");
    }
}
