use clap::ArgMatches;
use colored::*;

use super::cancel_on_interrupt;
use crate::cli_context::CliContext;
use crate::error::AdminResult;
use crate::formatting::{print_records, OutputFormat};
use crate::models::{Entity, EntityKind, Project, Team, User};
use crate::table::{page_from_query, LoadingPolicy};

pub async fn handle_list(kind: EntityKind, matches: &ArgMatches) -> AdminResult<()> {
    let page = page_from_query(matches.get_one::<String>("page").map(String::as_str));
    let search = matches
        .get_one::<String>("search")
        .map(String::as_str)
        .unwrap_or("");
    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or(OutputFormat::Simple);

    let mut context = CliContext::load()?;
    show_table(&mut context, kind, page, search, format).await
}

/// Load one page of `kind` and print the rows matching `search`.
pub async fn show_table(
    context: &mut CliContext,
    kind: EntityKind,
    page: u32,
    search: &str,
    format: OutputFormat,
) -> AdminResult<()> {
    match kind {
        EntityKind::User => list_records::<User>(context, page, search, format).await,
        EntityKind::Team => list_records::<Team>(context, page, search, format).await,
        EntityKind::Project => list_records::<Project>(context, page, search, format).await,
    }
}

async fn list_records<E: Entity>(
    context: &mut CliContext,
    page: u32,
    search: &str,
    format: OutputFormat,
) -> AdminResult<()> {
    let mut controller = context.controller_with_policy::<E>(LoadingPolicy::immediate())?;
    let _interrupt = cancel_on_interrupt(controller.cancel_handle());

    controller.load(page).await?;

    let records = controller.filter(search);
    if !search.is_empty() && format != OutputFormat::Json {
        println!(
            "{}",
            format!(
                "{} of {} rows on this page match '{}'",
                records.len(),
                controller.records().len(),
                search
            )
            .dimmed()
        );
    }
    print_records(&records, controller.pagination(), format)
}
