use clap::ArgMatches;
use colored::*;

use super::{apply_edits, cancel_on_interrupt, field_edits};
use crate::cli_context::CliContext;
use crate::error::{AdminError, AdminResult};
use crate::formatting::print_record;
use crate::models::{Draft, Entity, EntityKind, Project, Team, User};
use crate::table::LoadingPolicy;

pub async fn handle_create(kind: EntityKind, matches: &ArgMatches) -> AdminResult<()> {
    match kind {
        EntityKind::User => create_record::<User>(matches).await,
        EntityKind::Team => create_record::<Team>(matches).await,
        EntityKind::Project => create_record::<Project>(matches).await,
    }
}

async fn create_record<E: Entity>(matches: &ArgMatches) -> AdminResult<()> {
    let mut draft = E::Draft::default();
    apply_edits(&mut draft, field_edits::<E::Draft>(matches, E::KIND)?);

    if !draft.is_submittable() {
        return Err(AdminError::InvalidInput(format!("{} name is required", E::KIND)));
    }

    let mut context = CliContext::load()?;
    let mut controller = context.controller_with_policy::<E>(LoadingPolicy::immediate())?;
    let _interrupt = cancel_on_interrupt(controller.cancel_handle());

    let dialog = controller.create_dialog_mut();
    dialog.open();
    *dialog.draft_mut() = draft;

    controller.submit_create().await?;

    println!(
        "{} {}",
        "✅".green(),
        format!("Created {} successfully!", E::KIND).green().bold()
    );
    if let Some(record) = controller.records().last() {
        print_record(record);
    }
    Ok(())
}
