//! Then steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use corkboard::board::domain::Board;
use corkboard::board::services::BOARD_KEY;
use corkboard::storage::ports::BlobStore;
use rstest_bdd_macros::then;

#[then(r#"the board lists "{title}""#)]
fn board_lists(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.id_of(&title).map(|_| ())
}

#[then(r#"the board does not list "{title}""#)]
fn board_does_not_list(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    if world.id_of(&title).is_ok() {
        return Err(eyre::eyre!("task {title:?} is unexpectedly on the board"));
    }
    Ok(())
}

#[then(r#"the task "{title}" sits in "{column}""#)]
fn task_sits_in(world: &BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let expected = BoardWorld::column_named(&column)?;
    let id = world.id_of(&title)?;
    let status = world
        .service
        .task(id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task {title:?} disappeared"))?;
    if status != expected {
        return Err(eyre::eyre!(
            "expected {title:?} in {expected}, found it in {status}"
        ));
    }
    Ok(())
}

#[then(r#"the newest activity entry is "{message}""#)]
fn newest_entry_is(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let newest = world
        .service
        .logs()
        .first()
        .ok_or_else(|| eyre::eyre!("activity log is empty"))?;
    if newest.message() != message {
        return Err(eyre::eyre!(
            "expected newest entry {message:?}, found {:?}",
            newest.message()
        ));
    }
    Ok(())
}

#[then("the activity log has exactly one entry")]
fn log_has_one_entry(world: &BoardWorld) -> Result<(), eyre::Report> {
    let found = world.service.logs().len();
    if found != 1 {
        return Err(eyre::eyre!("expected a single log entry, found {found}"));
    }
    Ok(())
}

#[then("the stored board matches the live board")]
fn stored_matches_live(world: &BoardWorld) -> Result<(), eyre::Report> {
    let blob = world
        .store
        .read(BOARD_KEY)?
        .ok_or_else(|| eyre::eyre!("no board blob in the store"))?;
    let stored: Board = serde_json::from_str(&blob)?;
    if stored != *world.service.board() {
        return Err(eyre::eyre!("stored board diverges from the live board"));
    }
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.service.tasks().is_empty() {
        return Err(eyre::eyre!(
            "expected an empty board, found {} tasks",
            world.service.tasks().len()
        ));
    }
    Ok(())
}
