//! Given steps for session login BDD scenarios.

use super::world::SessionWorld;
use rstest_bdd_macros::given;

#[given("no one is logged in")]
fn nobody_logged_in(world: &mut SessionWorld) {
    let _ = world;
}

#[given("the intern has logged in with remember me")]
fn logged_in_remembered(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let outcome = world.service.login("intern@demo.com", "intern123", true);
    if !outcome.is_success() {
        return Err(eyre::eyre!("demo login unexpectedly rejected"));
    }
    Ok(())
}

#[given("the intern has logged in without remember me")]
fn logged_in_unremembered(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let outcome = world.service.login("intern@demo.com", "intern123", false);
    if !outcome.is_success() {
        return Err(eyre::eyre!("demo login unexpectedly rejected"));
    }
    Ok(())
}
