use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{AdminError, AdminResult};
use crate::logging::get_log_file_path;

pub async fn handle_config(matches: &ArgMatches) -> AdminResult<()> {
    let mut context = CliContext::load()?;
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("api-url") {
        context.config_mut().api_url = Some(url.trim_end_matches('/').to_string());
        changed = true;
    }

    if let Some(raw) = matches.get_one::<String>("page-size") {
        let size: u32 = raw
            .parse()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| AdminError::InvalidInput(format!("Invalid page size: {}", raw)))?;
        context.config_mut().page_size = Some(size);
        changed = true;
    }

    if changed {
        context.save()?;
        println!("{}", "Configuration saved.".green());
    }

    if matches.get_flag("show") || !changed {
        let config = context.config();
        println!("{}: {}", "Config file".dimmed(), context.config_path().display());
        println!("{}: {}", "API URL".dimmed(), config.api_url());
        println!("{}: {}", "Page size".dimmed(), config.page_size());
        println!(
            "{}: {} ms",
            "Minimum loading time".dimmed(),
            config.loading_policy().min_visible().as_millis()
        );
        println!("{}: {}", "Session".dimmed(), context.session());
        if let Some(path) = get_log_file_path() {
            println!("{}: {}", "Log file".dimmed(), path.display());
        }
    }
    Ok(())
}
