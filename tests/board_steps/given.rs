//! Given steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use corkboard::board::domain::TaskDraft;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    let _ = world;
}

#[given(r#"a task titled "{title}" in "{column}""#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = BoardWorld::column_named(&column)?;
    world
        .service
        .add_task(TaskDraft::new(title).with_status(status));
    Ok(())
}
