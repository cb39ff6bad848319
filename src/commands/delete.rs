use clap::ArgMatches;
use colored::*;

use super::{cancel_on_interrupt, entity_arg, id_arg};
use crate::cli_context::CliContext;
use crate::error::AdminResult;
use crate::formatting::{print_records, OutputFormat};
use crate::models::{Entity, EntityKind, Project, Team, User};
use crate::table::{page_from_query, LoadingPolicy};

pub async fn handle_delete(matches: &ArgMatches) -> AdminResult<()> {
    match entity_arg(matches, "entity")? {
        EntityKind::User => delete_record::<User>(matches).await,
        EntityKind::Team => delete_record::<Team>(matches).await,
        EntityKind::Project => delete_record::<Project>(matches).await,
    }
}

/// With `--page`, the page is loaded first and printed without the deleted row.
async fn delete_record<E: Entity>(matches: &ArgMatches) -> AdminResult<()> {
    let id = id_arg(matches)?;
    let page = matches
        .get_one::<String>("page")
        .map(|raw| page_from_query(Some(raw)));

    let mut context = CliContext::load()?;
    let mut controller = context.controller_with_policy::<E>(LoadingPolicy::immediate())?;
    let _interrupt = cancel_on_interrupt(controller.cancel_handle());

    if let Some(page) = page {
        controller.load(page).await?;
    }

    controller.delete(id).await?;

    println!(
        "{} {}",
        "✅".green(),
        format!("Deleted {} {}", E::KIND, id).green().bold()
    );

    if page.is_some() {
        let remaining = controller.filter("");
        print_records(&remaining, controller.pagination(), OutputFormat::Simple)?;
    }
    Ok(())
}
