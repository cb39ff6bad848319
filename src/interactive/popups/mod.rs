pub mod confirm;
pub mod date_range;
pub mod form;
pub mod help;

use ratatui::{layout::Rect, Frame};

use crate::interactive::app::{InteractiveApp, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(popup) = app.popup else { return };

    match popup {
        Popup::Create { field } => form::draw(frame, area, app, field, true),
        Popup::Update { field } => form::draw(frame, area, app, field, false),
        Popup::ConfirmDelete(id) => confirm::draw(frame, area, app, id),
        Popup::DateRange => date_range::draw(frame, area, app),
        Popup::Help => help::draw(frame, area, app),
    }
}
