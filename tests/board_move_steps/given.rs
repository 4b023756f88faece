//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, parse_column};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::services::CreateThingRequest;

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) {
    *world = BoardWorld::new();
}

#[given(r#"a thing titled "{title}" in "{column}""#)]
fn thing_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let target = parse_column(&column)?;
    let created = world
        .controller()
        .create(CreateThingRequest::new(target).with_title(title.clone()))
        .wrap_err("create thing for scenario setup")?;
    world.things.insert(title, created.id());
    Ok(())
}
