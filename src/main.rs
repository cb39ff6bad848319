use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};

use admin_console::commands::auth::{handle_login, handle_logout, handle_whoami};
use admin_console::commands::config::handle_config;
use admin_console::commands::create::handle_create;
use admin_console::commands::delete::handle_delete;
use admin_console::commands::list::handle_list;
use admin_console::commands::open::{handle_dashboard, handle_open};
use admin_console::commands::update::handle_update;
use admin_console::error::AdminResult;
use admin_console::interactive::run_interactive_mode;
use admin_console::logging::{init_logging, install_panic_hook};
use admin_console::models::EntityKind;

const ENTITY_VALUES: [&str; 3] = ["user", "team", "project"];

fn list_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .value_name("N")
                .help("Page to load (defaults to 1)"),
        )
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .value_name("TERM")
                .help("Only show rows whose id or name contains TERM"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["simple", "table", "json"])
                .default_value("simple"),
        )
}

fn name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .help("Name of the new record")
        .required(true)
        .index(1)
}

fn entity_and_id(command: Command) -> Command {
    command
        .arg(
            Arg::new("entity")
                .value_name("ENTITY")
                .help("Record type")
                .value_parser(ENTITY_VALUES)
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("id")
                .value_name("ID")
                .help("Record ID")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .value_name("N")
                .help("Page holding the record"),
        )
}

fn build_cli() -> Command {
    Command::new("admin")
        .about("Admin console - manage users, teams and projects from the terminal")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Store a session for the given role")
                .arg(
                    Arg::new("role")
                        .short('r')
                        .long("role")
                        .value_name("ROLE")
                        .help("Admin or Colaborador")
                        .required(true),
                )
                .arg(
                    Arg::new("token")
                        .short('t')
                        .long("token")
                        .value_name("TOKEN")
                        .help("Bearer token sent with API requests"),
                ),
        )
        .subcommand(Command::new("logout").about("End the session"))
        .subcommand(Command::new("whoami").about("Show the session and visible pages"))
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("Base URL of the API"),
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .value_name("N")
                        .help("Rows per page"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Print the current settings")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(list_command("users", "List users"))
        .subcommand(list_command("teams", "List teams"))
        .subcommand(list_command("projects", "List projects"))
        .subcommand(
            Command::new("create")
                .about("Create a record")
                .subcommand_required(true)
                .subcommand(
                    Command::new("user")
                        .about("Create a user")
                        .arg(name_arg())
                        .arg(
                            Arg::new("email")
                                .short('e')
                                .long("email")
                                .value_name("EMAIL")
                                .help("User email"),
                        )
                        .arg(
                            Arg::new("role")
                                .short('r')
                                .long("role")
                                .value_name("ROLE")
                                .help("User role"),
                        ),
                )
                .subcommand(Command::new("team").about("Create a team").arg(name_arg()))
                .subcommand(
                    Command::new("project")
                        .about("Create a project")
                        .arg(name_arg()),
                ),
        )
        .subcommand(
            entity_and_id(Command::new("update").about("Update a record"))
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("New name"),
                )
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .value_name("EMAIL")
                        .help("New email (users only)"),
                )
                .arg(
                    Arg::new("role")
                        .short('r')
                        .long("role")
                        .value_name("ROLE")
                        .help("New role (users only)"),
                ),
        )
        .subcommand(entity_and_id(Command::new("delete").about("Delete a record")))
        .subcommand(
            Command::new("open")
                .about("Open a console location, e.g. /projetos?page=2")
                .arg(
                    Arg::new("location")
                        .value_name("LOCATION")
                        .help("Path with optional query")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Apply a date range filter to the dashboard")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("YYYY-MM-DD")
                        .help("Start date"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("YYYY-MM-DD")
                        .help("End date"),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .about("Launch the interactive console")
                .arg(
                    Arg::new("location")
                        .value_name("LOCATION")
                        .help("Where to start, e.g. /equipes")
                        .index(1),
                ),
        )
}

async fn dispatch(matches: &ArgMatches) -> AdminResult<()> {
    match matches.subcommand() {
        Some(("login", sub_matches)) => handle_login(sub_matches).await,
        Some(("logout", sub_matches)) => handle_logout(sub_matches).await,
        Some(("whoami", sub_matches)) => handle_whoami(sub_matches).await,
        Some(("config", sub_matches)) => handle_config(sub_matches).await,
        Some(("users", sub_matches)) => handle_list(EntityKind::User, sub_matches).await,
        Some(("teams", sub_matches)) => handle_list(EntityKind::Team, sub_matches).await,
        Some(("projects", sub_matches)) => handle_list(EntityKind::Project, sub_matches).await,
        Some(("create", sub_matches)) => match sub_matches.subcommand() {
            Some((entity, create_matches)) => {
                handle_create(entity.parse()?, create_matches).await
            }
            None => {
                eprintln!("Unknown create subcommand. Use 'admin create --help' for available options.");
                process::exit(1);
            }
        },
        Some(("update", sub_matches)) => handle_update(sub_matches).await,
        Some(("delete", sub_matches)) => handle_delete(sub_matches).await,
        Some(("open", sub_matches)) => handle_open(sub_matches).await,
        Some(("dashboard", sub_matches)) => handle_dashboard(sub_matches).await,
        Some(("interactive", sub_matches)) => {
            let location = sub_matches.get_one::<String>("location").map(String::as_str);
            run_interactive_mode(location).await
        }
        _ => {
            eprintln!("Unknown command. Use 'admin --help' for available commands.");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    install_panic_hook();

    let matches = build_cli().get_matches();

    if let Err(e) = dispatch(&matches).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e.user_message());
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_update_accepts_field_flags() {
        let matches = build_cli()
            .try_get_matches_from(["admin", "update", "user", "7", "--email", "a@b.c", "--page", "2"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "update");
        assert_eq!(sub.get_one::<String>("id").map(String::as_str), Some("7"));
        assert_eq!(sub.get_one::<String>("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_unknown_entity_is_rejected() {
        assert!(build_cli()
            .try_get_matches_from(["admin", "delete", "invoice", "1"])
            .is_err());
    }
}
