// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! Television state is only ever read through its query methods, so what is
//! drawn is exactly what a caller of the television would observe.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;
mod icons;
mod screen;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{
    App,
    render::{commander::draw_commander, screen::draw_screen},
};

const SCREEN_WIDTH: u16 = 48;
const SCREEN_HEIGHT: u16 = 9;

const KEY_HELP: &str =
    "p power  m mute  \u{2191}/\u{2193} channel  +/- volume  0-9 keypad  : command  q quit";

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: A centred television screen, a key help line and the
///   command line.
/// * **State Mapping**: Converting the television's power, mute, channel and
///   volume into widgets.
/// * **Styling**: Applying colors and borders defined in the application theme.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: main, help, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_screen(f, centred(outer[0], SCREEN_WIDTH, SCREEN_HEIGHT), app);

    f.render_widget(
        Paragraph::new(KEY_HELP).style(Style::default().fg(app.theme.hint_fg)),
        outer[1],
    );

    draw_commander(f, outer[2], app);
}

// Centres a fixed size rectangle inside `area`, shrinking it if necessary.
fn centred(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
