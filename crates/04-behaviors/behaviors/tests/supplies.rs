//! Eating and banking for food.

mod common;

use behaviors::{BankTask, BehaviorError, EatTask};
use common::{eating, Fixture};
use scheduler::{EncodedPriority, Task};
use world_api::{Tab, Target, Tile};

#[test]
fn eats_at_threshold() {
    let fx = Fixture::new(0, eating("Trout", 50));
    fx.world.give("Bones", 1);
    fx.world.give("Trout", 2);
    fx.world.state().player.health_percent = 50;

    let ctx = fx.ctx();
    let mut eat = EatTask::new(0);
    assert_eq!(eat.priority(), EncodedPriority::flat(5));
    let food = eat.check(&ctx).expect("check").expect("hungry");
    assert_eq!(food.slot, 1);

    eat.act(&ctx, food).expect("act");
    assert_eq!(fx.world.journal(), [format!("Eat {:?}", Target::Inventory(1))]);
    let state = fx.world.state();
    assert_eq!(state.player.health_percent, 70);
    assert_eq!(state.inventory[1].amount, 1);
}

#[test]
fn healthy_or_disabled_does_not_eat() {
    let fx = Fixture::new(0, eating("Trout", 50));
    fx.world.give("Trout", 2);
    fx.world.state().player.health_percent = 51;
    assert!(EatTask::new(0).check(&fx.ctx()).expect("check").is_none());

    fx.world.state().player.health_percent = 10;
    fx.store.update(|s| s.food_name.clear()).expect("update");
    assert!(EatTask::new(0).check(&fx.ctx()).expect("check").is_none());
}

#[test]
fn opens_inventory_before_eating() {
    let fx = Fixture::new(0, eating("Trout", 50));
    fx.world.give("Trout", 1);
    {
        let mut state = fx.world.state();
        state.player.health_percent = 20;
        state.open_tab = Tab::Combat;
    }
    let ctx = fx.ctx();
    let mut eat = EatTask::new(0);
    let food = eat.check(&ctx).expect("check").expect("hungry");
    eat.act(&ctx, food).expect("act");
    assert_eq!(
        fx.world.journal(),
        ["tab Inventory".to_owned(), format!("Eat {:?}", Target::Inventory(0))]
    );
    assert!(fx.world.state().inventory.is_empty());
}

#[test]
fn bank_is_eligible_only_without_food() {
    let fx = Fixture::new(0, eating("Trout", 50));
    let mut bank = BankTask::new();
    assert_eq!(bank.priority(), EncodedPriority::flat(8));
    assert!(bank.check(&fx.ctx()).expect("check").is_some());

    fx.world.give("Trout", 1);
    assert!(bank.check(&fx.ctx()).expect("check").is_none());

    let fx = Fixture::new(0, |s| s.script_started = true);
    assert!(bank.check(&fx.ctx()).expect("check").is_none());
}

#[test]
fn restocks_through_door_and_returns() {
    let fx = Fixture::new(0, |s| {
        eating("Trout", 50)(s);
        s.fight_anchor = Some(Tile::new(1, 0));
    });
    let door = fx.world.add_wall(5, 0);
    fx.world.stock_bank(Tile::new(10, 0), "Trout", 20);

    let ctx = fx.ctx();
    let mut bank = BankTask::new();
    bank.check(&ctx).expect("check").expect("out of food");
    assert!(bank.act(&ctx, ()).expect("act").is_zero());

    assert_eq!(
        fx.world.journal(),
        [
            format!("Open {:?}", Target::Object(door)),
            "walk (10, 0)".to_owned(),
            "open bank".to_owned(),
            "withdraw Trout".to_owned(),
            "close bank".to_owned(),
            "walk (1, 0)".to_owned(),
        ]
    );
    let state = fx.world.state();
    assert_eq!(state.player.tile, Tile::new(1, 0));
    assert_eq!(state.inventory[0].amount, 20);
}

#[test]
fn empty_bank_logs_out_and_stops() {
    let fx = Fixture::new(10, eating("Trout", 50));
    fx.world.stock_bank(Tile::new(10, 0), "Bones", 3);

    let ctx = fx.ctx();
    BankTask::new().act(&ctx, ()).expect("act");
    assert_eq!(
        fx.world.journal(),
        ["walk (10, 0)", "open bank", "withdraw Trout", "close bank", "logout"]
    );
    assert!(!fx.world.state().logged_in);
    assert!(!fx.store.snapshot().script_started);
    assert!(ctx.settings.script_started, "snapshot for this cycle is unchanged");
}

#[test]
fn missing_bank_is_an_error() {
    let fx = Fixture::new(0, eating("Trout", 50));
    let err = BankTask::new().act(&fx.ctx(), ()).unwrap_err();
    assert!(matches!(err, BehaviorError::NoBank));
}
