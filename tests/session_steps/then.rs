//! Then steps for session login BDD scenarios.

use super::world::SessionWorld;
use rstest_bdd_macros::then;

#[then("the login succeeds")]
fn login_succeeds(world: &SessionWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no login was attempted"))?;
    if !outcome.is_success() {
        return Err(eyre::eyre!("login unexpectedly rejected"));
    }
    Ok(())
}

#[then(r#"the login is rejected with "{message}""#)]
fn login_rejected_with(world: &SessionWorld, message: String) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no login was attempted"))?;
    match outcome.message() {
        Some(found) if found == message => Ok(()),
        Some(found) => Err(eyre::eyre!(
            "expected rejection {message:?}, found {found:?}"
        )),
        None => Err(eyre::eyre!("login unexpectedly succeeded")),
    }
}

#[then(r#"the session belongs to "{name}""#)]
fn session_belongs_to(world: &SessionWorld, name: String) -> Result<(), eyre::Report> {
    let identity = world
        .service
        .current()
        .ok_or_else(|| eyre::eyre!("no one is logged in"))?;
    if identity.name != name {
        return Err(eyre::eyre!(
            "expected session for {name:?}, found {:?}",
            identity.name
        ));
    }
    Ok(())
}

#[then("no one is logged in")]
fn nobody_logged_in(world: &SessionWorld) -> Result<(), eyre::Report> {
    if world.service.is_logged_in() {
        return Err(eyre::eyre!("someone is unexpectedly logged in"));
    }
    Ok(())
}

#[then("the session is marked ready")]
fn session_is_ready(world: &SessionWorld) -> Result<(), eyre::Report> {
    if !world.service.is_ready() {
        return Err(eyre::eyre!("session manager never became ready"));
    }
    Ok(())
}

#[then("the durable store holds the identity")]
fn durable_holds_identity(world: &SessionWorld) -> Result<(), eyre::Report> {
    if !SessionWorld::store_holds_identity(&world.durable)? {
        return Err(eyre::eyre!("durable store holds no identity"));
    }
    Ok(())
}

#[then("the durable store is empty")]
fn durable_is_empty(world: &SessionWorld) -> Result<(), eyre::Report> {
    if SessionWorld::store_holds_identity(&world.durable)? {
        return Err(eyre::eyre!("durable store unexpectedly holds an identity"));
    }
    Ok(())
}

#[then("the ephemeral store holds the identity")]
fn ephemeral_holds_identity(world: &SessionWorld) -> Result<(), eyre::Report> {
    if !SessionWorld::store_holds_identity(&world.ephemeral)? {
        return Err(eyre::eyre!("ephemeral store holds no identity"));
    }
    Ok(())
}

#[then("the ephemeral store is empty")]
fn ephemeral_is_empty(world: &SessionWorld) -> Result<(), eyre::Report> {
    if SessionWorld::store_holds_identity(&world.ephemeral)? {
        return Err(eyre::eyre!(
            "ephemeral store unexpectedly holds an identity"
        ));
    }
    Ok(())
}
