//! Tests for the CSV event sink.

use haul_core::{EntityId, Event, EventSink, Material, Tick, TileCoord};
use tempfile::tempdir;

use crate::{CsvEventWriter, EventRow};

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn pickup_fills_logistics_columns() {
        let event = Event::PickupComplete {
            carrier: EntityId(5),
            building: EntityId(200),
            material: Material::Log,
            amount: 2,
        };
        let row = EventRow::from_event(Tick(7), &event);
        assert_eq!(
            row.record(),
            ["7", "pickupComplete", "5", "200", "log", "2", "", ""].map(String::from)
        );
    }

    #[test]
    fn service_area_change_fills_radius() {
        let event = Event::ServiceAreaChanged {
            building: EntityId(100),
            center: TileCoord::new(4, 4),
            radius: 12,
        };
        let row = EventRow::from_event(Tick(0), &event);
        assert_eq!(row.radius, Some(12));
        assert_eq!(row.carrier, None);
        assert_eq!(
            row.record(),
            ["0", "serviceAreaChanged", "", "100", "", "", "", "12"].map(String::from)
        );
    }
}

#[cfg(test)]
mod writer {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_event() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.csv");

        let mut writer = CsvEventWriter::create(&path).unwrap();
        writer.emit(
            Tick(3),
            &Event::PickupComplete {
                carrier: EntityId(1),
                building: EntityId(200),
                material: Material::Log,
                amount: 1,
            },
        );
        writer.emit(
            Tick(9),
            &Event::DeliveryComplete {
                carrier: EntityId(1),
                building: EntityId(201),
                material: Material::Log,
                amount: 1,
                overflow: 0,
            },
        );
        writer.emit(Tick(15), &Event::ReturnedHome { carrier: EntityId(1), home: EntityId(100) });
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "tick,event,carrier,building,material,amount,overflow,radius");
        assert_eq!(lines[1], "3,pickupComplete,1,200,log,1,,");
        assert_eq!(lines[2], "9,deliveryComplete,1,201,log,1,0,");
        assert_eq!(lines[3], "15,returnedHome,1,100,,,,");
    }

    #[test]
    fn records_a_live_simulation_run() {
        use haul_core::{PlayerId, SimConfig};
        use haul_grid::TerrainGrid;
        use haul_sim::{BuildingKind, NoopObserver, SimBuilder};

        let dir = tempdir().unwrap();
        let path = dir.path().join("events.csv");
        let writer = CsvEventWriter::create(&path).unwrap();

        let config = SimConfig { tick_dt_secs: 0.5, total_ticks: 120, seed: 7 };
        let mut sim = SimBuilder::new(config, TerrainGrid::flat(24, 24))
            .sink(Box::new(writer))
            .build()
            .unwrap();

        let player = PlayerId(0);
        let hub = sim.spawn_hub(player, TileCoord::new(8, 8), 8);
        let wood = sim.spawn_building(BuildingKind::Woodcutter, player, TileCoord::new(5, 8));
        let mill = sim.spawn_building(BuildingKind::Sawmill, player, TileCoord::new(11, 8));
        sim.spawn_carrier_at(player, hub, TileCoord::new(8, 9), 1.0).unwrap();

        {
            use haul_carrier::InventoryProvider;
            sim.inventories.deposit_output(wood, Material::Log, 1);
        }
        assert!(sim.request_transport(wood, mill, Material::Log, 1).unwrap());
        sim.run(&mut NoopObserver).unwrap();
        drop(sim); // flushes the writer's file handle

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("pickupComplete"));
        assert!(contents.contains("deliveryComplete"));
        assert!(contents.contains("returnedHome"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut writer = CsvEventWriter::create(&dir.path().join("events.csv")).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
        assert!(writer.take_error().is_none());
    }
}
