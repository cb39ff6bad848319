use std::str::FromStr;

use colored::*;

use super::utils::{pad, truncate};
use crate::error::{AdminError, AdminResult};
use crate::models::Entity;
use crate::nav::Sidebar;
use crate::session::Session;
use crate::table::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(OutputFormat::Simple),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(AdminError::InvalidInput(format!("Unknown format: {}", other))),
        }
    }
}

/// Header and cell text for a table of `E`, ID and name first.
pub fn table_columns<E: Entity>() -> Vec<&'static str> {
    let mut columns = vec!["ID", "Name"];
    columns.extend_from_slice(E::extra_columns());
    columns
}

pub fn row_cells<E: Entity>(record: &E) -> Vec<String> {
    let mut cells = vec![record.id().to_string(), record.name().to_string()];
    cells.extend(record.extra_cells());
    cells
}

pub fn print_records<E: Entity>(
    records: &[&E],
    pagination: Pagination,
    format: OutputFormat,
) -> AdminResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", format!("No {}s found.", E::KIND).dimmed());
        print_pagination(pagination);
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            let columns = table_columns::<E>();
            let widths: Vec<usize> = columns
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    records
                        .iter()
                        .map(|r| row_cells(*r)[i].chars().count().min(40))
                        .chain(std::iter::once(header.len()))
                        .max()
                        .unwrap_or(header.len())
                })
                .collect();
            let rule_width = widths.iter().sum::<usize>() + 2 * widths.len();

            println!("{}", "─".repeat(rule_width).dimmed());
            let header: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(h, w)| pad(h, *w).bold().to_string())
                .collect();
            println!("{}", header.join("  "));
            println!("{}", "─".repeat(rule_width).dimmed());

            for record in records {
                let cells: Vec<String> = row_cells(*record)
                    .iter()
                    .zip(&widths)
                    .enumerate()
                    .map(|(i, (cell, w))| {
                        let text = pad(&truncate(cell, 40), *w);
                        if i == 0 {
                            text.blue().to_string()
                        } else {
                            text
                        }
                    })
                    .collect();
                println!("{}", cells.join("  "));
            }
            println!("{}", "─".repeat(rule_width).dimmed());
        }
        _ => {
            println!("{}", E::KIND.title().bold());
            for record in records {
                let extras: Vec<String> = record
                    .extra_cells()
                    .into_iter()
                    .filter(|cell| !cell.is_empty())
                    .collect();
                if extras.is_empty() {
                    println!("  {} {}", format!("#{}", record.id()).blue(), record.name());
                } else {
                    println!(
                        "  {} {} {}",
                        format!("#{}", record.id()).blue(),
                        record.name(),
                        format!("({})", extras.join(", ")).dimmed()
                    );
                }
            }
        }
    }

    print_pagination(pagination);
    Ok(())
}

fn print_pagination(pagination: Pagination) {
    println!("{}", pagination.label().dimmed());
}

/// Print a single record after a mutation.
pub fn print_record<E: Entity>(record: &E) {
    println!("{}: {}", "ID".dimmed(), record.id().to_string().blue());
    println!("{}: {}", "Name".dimmed(), record.name().bold());
    for (column, cell) in E::extra_columns().iter().zip(record.extra_cells()) {
        if !cell.is_empty() {
            println!("{}: {}", column.dimmed(), cell);
        }
    }
}

pub fn print_sidebar(sidebar: &Sidebar) {
    println!("{}", sidebar.title(false).bold().blue());
    if sidebar.links.is_empty() {
        println!("  {}", "No pages available for this role.".dimmed());
    }
    for link in sidebar.links {
        println!("  {} {}", link.label, link.route.path().dimmed());
    }
    for action in sidebar.footer() {
        println!("  {}", action.label().dimmed());
    }
}

pub fn print_session(session: &Session) {
    match session.role() {
        Some(role) => println!("Logged in as {}", role.to_string().green().bold()),
        None => println!("{}", "Not logged in.".yellow()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, User};
    use serde_json::Map;

    #[test]
    fn test_columns_include_entity_specific_fields() {
        assert_eq!(table_columns::<User>(), vec!["ID", "Name", "Email", "Role"]);
        assert_eq!(table_columns::<Project>(), vec!["ID", "Name"]);
    }

    #[test]
    fn test_row_cells_match_columns() {
        let user = User {
            id: 4,
            name: "Bia".to_string(),
            email: Some("bia@example.com".to_string()),
            role: None,
            extra: Map::new(),
        };
        assert_eq!(row_cells(&user), vec!["4", "Bia", "bia@example.com", ""]);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
