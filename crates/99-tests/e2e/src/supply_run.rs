use std::thread;
use std::time::Duration;

use world_api::{Target, Tile};

use crate::harness::{goblin_hunter, Scenario};

#[test]
fn bank_trip_through_door_then_back_to_fighting() {
    let mut sc = Scenario::new(Tile::new(0, 0), goblin_hunter);
    let door = sc.world.add_wall(5, 0);
    sc.world.stock_bank(Tile::new(10, 0), "Trout", 10);
    sc.world.add_npc("Goblin", Tile::new(2, 0));
    sc.driver.start().expect("start");

    assert_eq!(sc.step().as_deref(), Some("bank"));
    assert_eq!(
        sc.world.journal(),
        [
            format!("Open {:?}", Target::Object(door)),
            "walk (10, 0)".to_owned(),
            "open bank".to_owned(),
            "withdraw Trout".to_owned(),
            "close bank".to_owned(),
            "walk (0, 0)".to_owned(),
        ]
    );
    assert_eq!(sc.world.state().player.tile, Tile::new(0, 0));
    assert_eq!(sc.step().as_deref(), Some("fight"));
}

#[test]
fn empty_bank_ends_the_script() {
    let mut sc = Scenario::new(Tile::new(0, 0), goblin_hunter);
    sc.world.stock_bank(Tile::new(0, 0), "Bones", 1);
    sc.world.add_npc("Goblin", Tile::new(2, 0));
    sc.driver.start().expect("start");

    assert_eq!(sc.step().as_deref(), Some("bank"));
    assert!(!sc.world.state().logged_in);
    assert!(!sc.store.snapshot().script_started);

    // Next boundary: combat units leave, the scan idles while logged out.
    assert_eq!(sc.step().as_deref(), Some("scan"));
    assert!(!sc.driver.is_running());
}

#[test]
fn threaded_run_stops_itself_and_shuts_down() {
    let sc = Scenario::new(Tile::new(0, 0), goblin_hunter);
    sc.world.stock_bank(Tile::new(0, 0), "Bones", 1);
    let world = sc.world.clone();
    let store = sc.store.clone();

    // Queued before the loop starts, so the first cycle already sees it.
    let handle = sc.driver.handle();
    assert!(handle.start());
    let (_, join) = sc.driver.spawn().expect("spawn");
    thread::sleep(Duration::from_millis(150));
    assert!(handle.shutdown());
    let stats = join.join().expect("thread").expect("run");

    assert_eq!(world.journal().last().map(String::as_str), Some("logout"));
    assert!(!store.snapshot().script_started);
    assert_eq!(stats.failures, 0);
    assert!(stats.actions >= 2, "bank then scan: {stats:?}");
}
