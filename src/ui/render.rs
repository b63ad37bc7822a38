use crate::links::{TravelLink, TravelLinks};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::planner::{Field, PlannerState, StatusKind};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_GREEN, BRAND_YELLOW, GLOBAL_BORDER, HEADER_TEXT, LINK_TEXT,
    MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (form, links, summary) = body_columns(body);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let planner = app.planner();
    frame.render_widget(
        Paragraph::new(form_lines(planner)).block(section("Destination in Brazil")),
        form,
    );

    let trip_links = planner.session.links();
    frame.render_widget(
        Paragraph::new(link_lines(&trip_links))
            .wrap(Wrap { trim: false })
            .block(section("Recommended Flights & Stays")),
        links,
    );

    let text = planner.session.summary().text().to_string();
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false })
            .block(section("Share your trip")),
        summary,
    );

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn section(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(BRAND_YELLOW),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Form rows: a label line and a value line per field, then the status.
pub fn form_lines(state: &PlannerState) -> Vec<Line<'static>> {
    let session = &state.session;
    let selection = session.selection();
    let mut lines = Vec::new();

    for field in Field::ALL {
        let focused = state.focus == field;
        let value = match field {
            Field::Origin => {
                if focused {
                    format!("{}▏", selection.origin)
                } else {
                    selection.origin.clone()
                }
            }
            Field::State => format!(
                "{}  (capital: {})",
                selection.state,
                session.state().capital
            ),
            Field::Style => selection.style.label().to_string(),
            Field::City => {
                let offered = session.filtered_cities();
                let position = offered
                    .iter()
                    .position(|city| city.name == selection.city)
                    .map_or(0, |index| index + 1);
                format!("{}  ({}/{})", selection.city, position, offered.len())
            }
            // Shown empty until a digit replaces the minimum.
            Field::Days if state.days_cleared => String::new(),
            Field::Days => selection.days.to_string(),
        };

        let label_style = if focused {
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        lines.push(Line::from(Span::styled(format!(" {}", field.label()), label_style)));

        let mut spans = Vec::new();
        if focused && (field.is_selector() || field == Field::Days) {
            spans.push(Span::styled(" ◀ ", Style::default().fg(BRAND_YELLOW)));
            spans.push(Span::styled(value, Style::default().fg(HEADER_TEXT)));
            spans.push(Span::styled(" ▶", Style::default().fg(BRAND_YELLOW)));
        } else {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(value, Style::default().fg(HEADER_TEXT)));
        }
        let mut value_line = Line::from(spans);
        if focused {
            value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(value_line);
        lines.push(Line::from(""));
    }

    if let Some(status) = &state.status {
        let color = match status.kind {
            StatusKind::Info => STATUS_OK,
            StatusKind::Error => STATUS_ERROR,
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", status.message),
            Style::default().fg(color),
        )));
    }

    lines
}

fn link_lines(links: &TravelLinks) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "✈️ Flights",
        Style::default().fg(BRAND_GREEN),
    ))];
    lines.extend(links.flights().map(link_line));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "🏨 Stays",
        Style::default().fg(BRAND_GREEN),
    )));
    lines.extend(links.stays().map(link_line));
    lines
}

fn link_line(link: &TravelLink) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("- {}: ", link.label), Style::default().fg(HEADER_TEXT)),
        Span::styled(link.url.clone(), Style::default().fg(LINK_TEXT)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::planner::StatusLine;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn form_shows_city_position_in_filtered_list() {
        let rendered = text(&form_lines(&PlannerState::default()));
        assert!(rendered.contains("Búzios  (1/5)"));
        assert!(rendered.contains("Rio de Janeiro  (capital: Rio de Janeiro)"));
    }

    #[test]
    fn focused_origin_shows_caret() {
        let rendered = text(&form_lines(&PlannerState::default()));
        assert!(rendered.contains("New York▏"));
    }

    #[test]
    fn status_is_rendered_last() {
        let state = PlannerState {
            status: Some(StatusLine::error("PDF export failed")),
            ..PlannerState::default()
        };
        let lines = form_lines(&state);
        assert!(text(&lines[lines.len() - 1..]).contains("PDF export failed"));
    }

    #[test]
    fn cleared_days_render_empty() {
        let state = PlannerState {
            focus: Field::Days,
            days_cleared: true,
            ..PlannerState::default()
        };
        let lines = form_lines(&state);
        let days_value = text(&lines[Field::ALL.len() * 3 - 2..Field::ALL.len() * 3 - 1]);
        assert_eq!(days_value.trim(), "◀  ▶");
    }

    #[test]
    fn links_are_grouped() {
        let links = TravelLinks::build("Lima", "Santos, São Paulo, Brazil");
        let rendered = text(&link_lines(&links));
        let flights = rendered.find("Flights").unwrap();
        let stays = rendered.find("Stays").unwrap();
        let airbnb = rendered.find("Airbnb").unwrap();
        assert!(flights < stays && stays < airbnb);
    }
}
