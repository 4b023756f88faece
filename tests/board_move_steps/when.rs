//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, parse_column};
use rstest_bdd_macros::when;
use taskboard::board::{config::DEFAULT_TRANSFER_TYPE_IDENTIFIER, services::DropEvent};

#[when(r#""{title}" is dropped on "{column}" at row {row:u64}"#)]
fn dropped_at_row(
    world: &mut BoardWorld,
    title: String,
    column: String,
    row: u64,
) -> Result<(), eyre::Report> {
    let destination = parse_column(&column)?;
    let id = world.thing_id(&title)?;
    let index = isize::try_from(row)?;
    let result = world
        .resolver
        .resolve(DropEvent::new(id, destination).at(index))
        .map(|_| ());
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{title}" is dropped on "{column}" past the last row"#)]
fn dropped_past_last_row(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let destination = parse_column(&column)?;
    let id = world.thing_id(&title)?;
    let result = world
        .resolver
        .resolve(DropEvent::new(id, destination))
        .map(|_| ());
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{title}" is deleted"#)]
fn deleted(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.thing_id(&title)?;
    let result = world.controller().delete(id).map(|_| ());
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"a drag payload "{payload}" is dropped on "{column}""#)]
fn payload_dropped(
    world: &mut BoardWorld,
    payload: String,
    column: String,
) -> Result<(), eyre::Report> {
    let destination = parse_column(&column)?;
    let result = world
        .resolver
        .resolve_payload(
            DEFAULT_TRANSFER_TYPE_IDENTIFIER,
            payload.as_bytes(),
            destination,
            None,
        )
        .map(|_| ());
    world.last_result = Some(result);
    Ok(())
}
