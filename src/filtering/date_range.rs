use chrono::NaiveDate;

use crate::error::{AdminError, AdminResult};
use crate::nav::{Location, Route};

const ISO_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%d %b, %Y";
const PLACEHOLDER: &str = "Filtrar por data";

/// Optional start and end dates for the dashboard filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn parse_date(input: Option<&str>) -> Option<NaiveDate> {
    let input = input?.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, ISO_FORMAT).ok()
}

impl DateRange {
    /// Build from ISO strings; missing or unparsable ends stay unset.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: parse_date(from),
            to: parse_date(to),
        }
    }

    /// Read a dashboard location's `from`/`to` parameters.
    pub fn from_location(location: &Location) -> Self {
        Self::parse(location.query_value("from"), location.query_value("to"))
    }

    /// Parse typed input such as `2024-01-01..2024-01-31`, `2024-01-01..`
    /// or a single date. Unlike `parse`, bad dates are reported.
    pub fn parse_input(input: &str) -> AdminResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }

        let (from, to) = match input.split_once("..") {
            Some((from, to)) => (from.trim(), to.trim()),
            None => (input, ""),
        };

        let strict = |value: &str| -> AdminResult<Option<NaiveDate>> {
            if value.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(value, ISO_FORMAT)
                .map(Some)
                .map_err(|_| AdminError::InvalidInput(format!("Invalid date '{}', expected yyyy-mm-dd", value)))
        };

        let range = Self {
            from: strict(from)?,
            to: strict(to)?,
        };
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(AdminError::InvalidInput(format!(
                    "Start date {} is after end date {}",
                    from.format(ISO_FORMAT),
                    to.format(ISO_FORMAT)
                )));
            }
        }
        Ok(range)
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    /// Button text: the placeholder until a start date is picked.
    pub fn label(&self) -> String {
        match (self.from, self.to) {
            (None, _) => PLACEHOLDER.to_string(),
            (Some(from), None) => from.format(LABEL_FORMAT).to_string(),
            (Some(from), Some(to)) => format!(
                "{} - {}",
                from.format(LABEL_FORMAT),
                to.format(LABEL_FORMAT)
            ),
        }
    }

    /// The dashboard location this filter leads to when applied.
    pub fn apply(&self) -> Location {
        let iso = |date: Option<NaiveDate>| {
            date.map(|d| d.format(ISO_FORMAT).to_string())
                .unwrap_or_default()
        };
        Location::new(Route::Dashboard)
            .with_query("from", iso(self.from))
            .with_query("to", iso(self.to))
    }
}
