use clap::ArgMatches;
use colored::*;

use super::{apply_edits, cancel_on_interrupt, entity_arg, field_edits, id_arg};
use crate::admin_error;
use crate::cli_context::CliContext;
use crate::error::{AdminError, AdminResult};
use crate::formatting::print_record;
use crate::models::{Entity, EntityKind, Project, Team, User};
use crate::table::{page_from_query, LoadingPolicy};

pub async fn handle_update(matches: &ArgMatches) -> AdminResult<()> {
    match entity_arg(matches, "entity")? {
        EntityKind::User => update_record::<User>(matches).await,
        EntityKind::Team => update_record::<Team>(matches).await,
        EntityKind::Project => update_record::<Project>(matches).await,
    }
}

async fn update_record<E: Entity>(matches: &ArgMatches) -> AdminResult<()> {
    let id = id_arg(matches)?;
    let page = page_from_query(matches.get_one::<String>("page").map(String::as_str));
    let edits = field_edits::<E>(matches, E::KIND)?;
    if edits.is_empty() {
        return Err(admin_error!(InvalidInput, "Nothing to update"));
    }

    let mut context = CliContext::load()?;
    let mut controller = context.controller_with_policy::<E>(LoadingPolicy::immediate())?;
    let _interrupt = cancel_on_interrupt(controller.cancel_handle());

    controller.load(page).await?;
    if !controller.select_id(id) {
        return Err(AdminError::InvalidInput(format!(
            "No {} with id {} on page {}",
            E::KIND,
            id,
            page
        )));
    }

    controller.open_update();
    if let Some(record) = controller.selected_mut() {
        apply_edits(record, edits);
    }
    controller.submit_update().await?;

    println!(
        "{} {}",
        "✅".green(),
        format!("Updated {} {} successfully!", E::KIND, id).green().bold()
    );
    if let Some(record) = controller.records().iter().find(|r| r.id() == id) {
        print_record(record);
    }
    Ok(())
}
