//! Walking back to the anchor, equipping and scanning.

mod common;

use behaviors::{EquipTask, ScanTask, WalkTask};
use common::Fixture;
use scheduler::{EncodedPriority, Task};
use world_api::{EquipmentSlot, Tile, WorldError};

#[test]
fn walks_back_when_outside_radius() {
    let fx = Fixture::new(40, |s| s.fight_anchor = Some(Tile::new(0, 0)));
    let ctx = fx.ctx();
    let mut walk = WalkTask::new();
    assert_eq!(walk.priority(), EncodedPriority::flat(4));
    let anchor = walk.check(&ctx).expect("check").expect("too far");
    assert!(walk.act(&ctx, anchor).expect("act").is_zero());
    assert_eq!(fx.world.journal(), ["walk (0, 0)"]);
    assert_eq!(fx.world.state().player.tile, Tile::new(0, 0));
}

#[test]
fn stays_put_inside_radius_or_without_anchor() {
    let fx = Fixture::new(25, |s| s.fight_anchor = Some(Tile::new(0, 0)));
    assert!(WalkTask::new().check(&fx.ctx()).expect("check").is_none());

    let fx = Fixture::new(400, |_| {});
    assert!(WalkTask::new().check(&fx.ctx()).expect("check").is_none());
}

#[test]
fn does_not_click_while_still_moving() {
    let fx = Fixture::new(40, |s| s.fight_anchor = Some(Tile::new(0, 0)));
    fx.world.state().player.moving = true;
    let ctx = fx.ctx();
    WalkTask::new().act(&ctx, Tile::new(0, 0)).expect("act");
    assert!(fx.world.journal().is_empty());
}

#[test]
fn equips_only_empty_slots() {
    let fx = Fixture::new(0, |_| {});
    fx.world.give("Bronze sword", 1);
    fx.world.give("Wooden shield", 1);
    fx.world.give("Iron sword", 1);

    let ctx = fx.ctx();
    let mut equip = EquipTask::new();
    let missing = equip.check(&ctx).expect("check").expect("slots empty");
    assert_eq!(missing.len(), 2);
    equip.act(&ctx, missing).expect("act");
    assert_eq!(
        fx.world.journal(),
        ["equip Weapon sword", "equip Shield shield"]
    );
    assert!(equip.check(&ctx).expect("check").is_none());
    assert_eq!(fx.world.state().inventory.len(), 1);

    fx.world.state().equipment.remove(&EquipmentSlot::Weapon);
    let missing = equip.check(&ctx).expect("check").expect("weapon gone");
    assert_eq!(missing, [(EquipmentSlot::Weapon, "sword")]);
}

#[test]
fn nothing_to_equip() {
    let fx = Fixture::new(0, |_| {});
    fx.world.give("Trout", 5);
    assert!(EquipTask::new().check(&fx.ctx()).expect("check").is_none());
}

#[test]
fn scan_records_nearby_names_until_started() {
    let fx = Fixture::new(0, |s| s.select_npc("Goblin"));
    fx.world.add_npc("Goblin", Tile::new(1, 0));
    fx.world.add_npc("Cow", Tile::new(3, 0));
    fx.world.add_npc("Dragon", Tile::new(30, 0));

    let mut scan = ScanTask::new();
    assert_eq!(scan.priority(), EncodedPriority::UNSET);
    let ctx = fx.ctx();
    scan.check(&ctx).expect("check").expect("not started");
    assert_eq!(scan.act(&ctx, ()).expect("act"), ScanTask::PACING);

    let settings = fx.store.snapshot();
    assert_eq!(settings.known_npcs.iter().collect::<Vec<_>>(), ["Cow"]);

    fx.store.set_started(true).expect("start");
    assert!(scan.check(&fx.ctx()).expect("check").is_none());
}

#[test]
fn world_failures_surface_as_errors() {
    let fx = Fixture::new(40, |s| s.fight_anchor = Some(Tile::new(0, 0)));
    fx.world.fail_next(WorldError::unavailable("client busy"));
    let err = WalkTask::new().check(&fx.ctx()).unwrap_err();
    assert_eq!(err.to_string(), "world interface unavailable: client busy");
}
