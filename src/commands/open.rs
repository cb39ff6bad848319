use clap::ArgMatches;
use colored::*;

use super::list::show_table;
use crate::cli_context::CliContext;
use crate::error::{AdminError, AdminResult};
use crate::filtering::DateRange;
use crate::formatting::OutputFormat;
use crate::nav::{Location, Route};

pub async fn handle_open(matches: &ArgMatches) -> AdminResult<()> {
    let requested = matches
        .get_one::<String>("location")
        .ok_or_else(|| AdminError::InvalidInput("Location is required".to_string()))?;
    let location = Location::parse(requested)?;

    let mut context = CliContext::load()?;
    render(&mut context, location).await
}

pub async fn handle_dashboard(matches: &ArgMatches) -> AdminResult<()> {
    let from = matches.get_one::<String>("from").map(String::as_str).unwrap_or("");
    let to = matches.get_one::<String>("to").map(String::as_str).unwrap_or("");
    let range = DateRange::parse_input(&format!("{}..{}", from, to))?;

    let mut context = CliContext::load()?;
    render(&mut context, range.apply()).await
}

async fn render(context: &mut CliContext, requested: Location) -> AdminResult<()> {
    let original = requested.to_string();
    let location = requested.resolve(context.session());
    let resolved = location.to_string();

    if resolved != original {
        println!("{} {} {}", original.dimmed(), "→".dimmed(), resolved.bold());
    } else {
        println!("{}", resolved.bold());
    }

    match location.route {
        Route::Login | Route::Root => {
            println!("Log in with 'admin login --role <Admin|Colaborador>'.");
            Ok(())
        }
        Route::Dashboard => {
            let range = DateRange::from_location(&location);
            println!("{}: {}", "Date range".dimmed(), range.label());
            Ok(())
        }
        route => match route.entity() {
            Some(kind) => {
                show_table(context, kind, location.page(), "", OutputFormat::Table).await
            }
            None => Ok(()),
        },
    }
}
