use world_api::{Target, Tile};

use crate::harness::{goblin_hunter, Scenario};

#[test]
fn started_driver_orders_all_units() {
    let mut sc = Scenario::new(Tile::new(0, 0), goblin_hunter);
    sc.driver.start().expect("start");
    sc.world.give("Trout", 1);
    sc.step();

    let names: Vec<_> = sc
        .driver
        .scheduler()
        .registry()
        .ordered()
        .into_iter()
        .map(|info| (info.name.to_owned(), info.priority.get()))
        .collect();
    assert_eq!(
        names,
        [
            ("bank".to_owned(), 8),
            ("eat".to_owned(), 5),
            ("equip".to_owned(), 5),
            ("walk".to_owned(), 4),
            ("fight".to_owned(), 1),
            ("scan".to_owned(), 0),
        ]
    );
}

#[test]
fn fight_then_eat_then_rest() {
    let mut sc = Scenario::new(Tile::new(0, 0), goblin_hunter);
    let goblin = sc.world.add_npc("Goblin", Tile::new(2, 0));
    sc.world.give("Trout", 2);
    sc.driver.start().expect("start");

    assert_eq!(sc.step().as_deref(), Some("fight"));
    assert_eq!(
        sc.world.journal(),
        [format!("Attack {:?}", Target::Npc(goblin)), "mouse away".to_owned()]
    );

    // In combat and healthy: nothing to do.
    assert_eq!(sc.step(), None);

    sc.world.state().player.health_percent = 35;
    assert_eq!(sc.step().as_deref(), Some("eat"));
    assert_eq!(sc.world.state().player.health_percent, 55);

    {
        let mut state = sc.world.state();
        state.player.in_combat = false;
        state.npcs.clear();
    }
    assert_eq!(sc.step(), None);
    assert_eq!(sc.driver.stats().actions, 2);
}

#[test]
fn walking_back_preempts_fighting() {
    let mut sc = Scenario::new(Tile::new(40, 0), |s| {
        goblin_hunter(s);
        s.fight_anchor = Some(Tile::new(0, 0));
    });
    sc.world.add_npc("Goblin", Tile::new(41, 0));
    sc.world.give("Trout", 1);
    sc.driver.start().expect("start");

    assert_eq!(sc.step().as_deref(), Some("walk"));
    assert_eq!(sc.world.state().player.tile, Tile::new(0, 0));
    assert_eq!(sc.step().as_deref(), Some("fight"));
}

#[test]
fn equips_before_fighting() {
    let mut sc = Scenario::new(Tile::new(0, 0), goblin_hunter);
    sc.world.add_npc("Goblin", Tile::new(1, 0));
    sc.world.give("Trout", 1);
    sc.world.give("Steel sword", 1);
    sc.driver.start().expect("start");

    assert_eq!(sc.step().as_deref(), Some("equip"));
    assert_eq!(sc.step().as_deref(), Some("fight"));
    assert_eq!(sc.world.journal()[0], "equip Weapon sword");
}
