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

//! Render the television screen.
//!
//! This module renders the power indicator, the current channel, the volume
//! bar and the one-line state summary.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{
        ICON_MUTED, ICON_POWER, ICON_VOLUME_HIGH, ICON_VOLUME_LOW, ICON_VOLUME_MEDIUM,
    },
};

/// Renders the television screen, reading state through its queries only.
pub(crate) fn draw_screen(f: &mut Frame, area: Rect, app: &App) {
    let tv = &app.television;
    let theme = &app.theme;

    let (border_colour, fg) = if tv.is_powered() {
        (theme.accent_colour, theme.screen_on_fg)
    } else {
        (theme.border_colour, theme.screen_off_fg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .title(" TV ")
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let power_line = Line::from(vec![
        Span::styled(format!("{} ", ICON_POWER), Style::default().fg(border_colour)),
        Span::styled(
            if tv.is_powered() { "ON" } else { "OFF" },
            Style::default().add_modifier(Modifier::BOLD),
        )
        .fg(fg),
    ]);
    f.render_widget(Paragraph::new(power_line), chunks[0]);

    let channel_line = Line::from(vec![
        Span::raw("Channel ").fg(fg),
        Span::styled(
            tv.channel().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )
        .fg(if tv.is_powered() { theme.accent_colour } else { fg }),
    ]);
    f.render_widget(
        Paragraph::new(channel_line).alignment(Alignment::Center),
        chunks[2],
    );

    let volume_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(chunks[4]);

    let ratio = tv.bounds().volume_ratio(tv.volume());
    let icon_fg = if tv.is_muted() { theme.muted_fg } else { fg };
    f.render_widget(
        Paragraph::new(volume_icon(tv.is_muted(), ratio)).fg(icon_fg),
        volume_chunks[0],
    );

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(if tv.is_powered() { theme.accent_colour } else { fg })
                .bg(theme.gauge_track_colour),
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_chunks[1]);

    f.render_widget(
        Paragraph::new(tv.volume().to_string())
            .alignment(Alignment::Right)
            .fg(fg),
        volume_chunks[2],
    );

    f.render_widget(
        Paragraph::new(tv.describe())
            .alignment(Alignment::Center)
            .fg(theme.hint_fg),
        chunks[6],
    );
}

// Picks the speaker symbol for the audible volume level.
fn volume_icon(muted: bool, ratio: f64) -> &'static str {
    if muted {
        ICON_MUTED
    } else if ratio < 1.0 / 3.0 {
        ICON_VOLUME_LOW
    } else if ratio < 2.0 / 3.0 {
        ICON_VOLUME_MEDIUM
    } else {
        ICON_VOLUME_HIGH
    }
}
