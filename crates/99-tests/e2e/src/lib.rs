//! End-to-end scenarios: driver, scheduler and behaviour units over the
//! mock world.

#[cfg(test)]
mod harness;

#[cfg(test)]
mod combat_loop;

#[cfg(test)]
mod supply_run;
