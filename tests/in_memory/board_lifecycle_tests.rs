//! In-memory integration tests for board operations.

use super::helpers::{
    TestController, assert_unique_placement, column_ids, controller, observed_controller,
};
use eyre::ensure;
use rstest::rstest;
use taskboard::board::{
    domain::{BoardDomainError, Column},
    services::{BoardError, CreateThingRequest, EditThingRequest},
};

#[rstest]
fn todo_to_doing_walkthrough(controller: TestController) -> eyre::Result<()> {
    let a = controller.create(CreateThingRequest::new(Column::Todo).with_title("A"))?;
    let b = controller.create(CreateThingRequest::new(Column::Todo).with_title("B"))?;

    controller.move_thing(a.id(), Column::Doing, 0)?;
    ensure!(column_ids(&controller, Column::Todo)? == vec![b.id()]);
    ensure!(column_ids(&controller, Column::Doing)? == vec![a.id()]);

    controller.move_thing(a.id(), Column::Doing, 0)?;
    ensure!(column_ids(&controller, Column::Doing)? == vec![a.id()]);

    controller.delete(b.id())?;
    ensure!(column_ids(&controller, Column::Todo)?.is_empty());
    ensure!(column_ids(&controller, Column::Done)?.is_empty());
    assert_unique_placement(&controller)
}

#[rstest]
fn full_lifecycle_todo_doing_done(controller: TestController) -> eyre::Result<()> {
    let created = controller.create(
        CreateThingRequest::new(Column::Todo)
            .with_title("Draft proposal")
            .with_due_date(1_767_225_600.0),
    )?;

    controller.move_thing(created.id(), Column::Doing, 0)?;
    let edited = controller.edit(
        EditThingRequest::new(created.id()).with_detail("outline agreed with team"),
    )?;
    ensure!(edited.column() == Column::Doing);
    controller.move_thing(created.id(), Column::Done, 0)?;

    let done = controller.find(created.id())?;
    ensure!(done.as_ref().map(|thing| thing.column()) == Some(Column::Done));
    ensure!(done.as_ref().and_then(|thing| thing.detail()) == Some("outline agreed with team"));
    ensure!(done.as_ref().and_then(|thing| thing.title()) == Some("Draft proposal"));
    assert_unique_placement(&controller)
}

#[rstest]
fn done_things_can_move_back(controller: TestController) -> eyre::Result<()> {
    let created = controller.create(CreateThingRequest::new(Column::Done))?;
    for column in [Column::Todo, Column::Doing, Column::Done, Column::Todo] {
        let outcome = controller.move_thing(created.id(), column, 0)?;
        ensure!(outcome.thing.column() == column);
    }
    assert_unique_placement(&controller)
}

#[rstest]
fn edit_after_delete_is_not_found(controller: TestController) -> eyre::Result<()> {
    let created = controller.create(CreateThingRequest::new(Column::Todo))?;
    controller.delete(created.id())?;

    let result = controller.edit(EditThingRequest::new(created.id()).with_title("late"));

    ensure!(matches!(
        result,
        Err(BoardError::Domain(BoardDomainError::ThingNotFound(_)))
    ));
    Ok(())
}

#[rstest]
fn projection_mirrors_board_through_a_session() -> eyre::Result<()> {
    let (controller, projection) = observed_controller()?;
    let mut ids = Vec::new();
    for title in ["plan", "build", "test", "ship"] {
        ids.push(controller.create(CreateThingRequest::new(Column::Todo).with_title(title))?.id());
    }
    for (step, id) in ids.iter().enumerate() {
        let column = if step % 2 == 0 { Column::Doing } else { Column::Done };
        controller.move_thing(*id, column, 0)?;
    }
    if let Some(first) = ids.first() {
        controller.delete(*first)?;
    }

    for column in Column::ALL {
        ensure!(
            projection.ids(column) == column_ids(&controller, column)?,
            "projection of {column} diverged"
        );
    }
    ensure!(projection.deliveries() > 0);
    Ok(())
}
