//! When steps for session login BDD scenarios.

use super::world::SessionWorld;
use rstest_bdd_macros::when;

#[when(r#"logging in as "{email}" with password "{password}""#)]
fn login_plain(world: &mut SessionWorld, email: String, password: String) {
    world.last_outcome = Some(world.service.login(&email, &password, false));
}

#[when(r#"logging in as "{email}" with password "{password}" and remember me"#)]
fn login_remembered(world: &mut SessionWorld, email: String, password: String) {
    world.last_outcome = Some(world.service.login(&email, &password, true));
}

#[when("the intern logs out")]
fn log_out(world: &mut SessionWorld) {
    world.service.logout();
}

#[when("the application restarts")]
fn restart_application(world: &mut SessionWorld) {
    world.restart();
}

#[when("the stored session is restored")]
fn restore_stored_session(world: &mut SessionWorld) {
    world.service.restore_session();
}
