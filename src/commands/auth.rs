use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{AdminError, AdminResult};
use crate::formatting::{print_session, print_sidebar};
use crate::nav::Sidebar;
use crate::session::{Role, Session};

pub async fn handle_login(matches: &ArgMatches) -> AdminResult<()> {
    let role: Role = matches
        .get_one::<String>("role")
        .ok_or_else(|| AdminError::InvalidInput("Role is required".to_string()))?
        .parse()?;
    let token = matches.get_one::<String>("token").cloned();

    let mut context = CliContext::load()?;
    context.set_session(Session::authenticated(role, token))?;

    println!("{} {}", "✅".green(), "Session saved.".green().bold());
    let sidebar = Sidebar::for_session(context.session())?;
    print_sidebar(&sidebar);
    Ok(())
}

pub async fn handle_logout(_matches: &ArgMatches) -> AdminResult<()> {
    let mut context = CliContext::load()?;
    if !context.session().is_authenticated() {
        println!("{}", "Not logged in.".yellow());
        return Ok(());
    }

    context.logout().await?;
    println!("{}", "Logged out.".green());
    Ok(())
}

pub async fn handle_whoami(_matches: &ArgMatches) -> AdminResult<()> {
    let context = CliContext::load()?;
    print_session(context.session());

    if let Ok(sidebar) = Sidebar::for_session(context.session()) {
        println!();
        print_sidebar(&sidebar);
    }
    Ok(())
}
