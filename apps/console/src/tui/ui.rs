use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Status, TuiState};
use crate::palette::Tone;
use crate::render;
use crate::screen::{ItemRow, RequestRow, Screen, StatusCount};

pub(crate) fn draw(f: &mut Frame, state: &TuiState) {
    let footer = footer_lines(state);
    let footer_height = u16::try_from(footer.len())
        .unwrap_or(u16::MAX)
        .saturating_add(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(f.area());

    render_header(f, chunks[0], state.screen());
    render_body(f, chunks[1], state.screen());
    render_footer(f, chunks[2], footer, state.input());
}

fn render_header(f: &mut Frame, area: Rect, screen: &Screen) {
    let title = Paragraph::new(Line::from(Span::styled(
        "e-Delivery",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let cart =
        Paragraph::new(format!("Cart ({})", screen.cart_size())).alignment(Alignment::Right);

    f.render_widget(title, area);
    f.render_widget(cart, area);
}

fn render_body(f: &mut Frame, area: Rect, screen: &Screen) {
    let (title, lines) = match screen {
        Screen::List { items, summary, .. } => {
            ("Delivery Items".to_string(), list(items, summary))
        }
        Screen::Detail { item, in_cart, .. } => {
            ("Item Details".to_string(), detail(item, *in_cart))
        }
        Screen::Cart {
            items, can_request, ..
        } => (
            format!("Your Cart ({} items)", items.len()),
            cart(items, *can_request),
        ),
        Screen::DevTools {
            operator,
            pending,
            processing,
            requests,
            ..
        } => (
            format!("Development Tools ({operator})"),
            dev_tools((*pending, *processing), requests),
        ),
    };

    let body = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    f.render_widget(body, area);
}

fn render_footer(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, input: &str) {
    let input_row = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let input_width = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);

    let footer = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);

    let x = area.x.saturating_add(2).saturating_add(input_width);
    let y = area.y.saturating_add(input_row);
    if x < area.right() && y < area.bottom() {
        f.set_cursor_position((x, y));
    }
}

fn footer_lines(state: &TuiState) -> Vec<Line<'static>> {
    let mut lines = match state.status() {
        Status::Hint => vec![Line::styled(
            "Type a command and press Enter · help · Esc to quit",
            Style::default().fg(Color::DarkGray),
        )],
        Status::Notice(text) => {
            vec![Line::styled(text.clone(), Style::default().fg(Color::Green))]
        }
        Status::Error(text) => {
            vec![Line::styled(text.clone(), Style::default().fg(Color::Red))]
        }
        Status::Help => render::help().lines().map(Line::from).collect(),
    };
    lines.push(Line::from(format!("> {}", state.input())));
    lines
}

// =============================================================================
// Views
// =============================================================================

fn badge(label: &'static str, tone: Tone) -> Span<'static> {
    Span::styled(
        label,
        Style::default().fg(tone.into()).add_modifier(Modifier::BOLD),
    )
}

fn item_badge(item: &ItemRow) -> Span<'static> {
    badge(item.status.label(), Tone::for_item(item.status))
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn list(items: &[ItemRow], summary: &[StatusCount]) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::raw(format!("[{}] {:<36} ", item.id, item.name)),
                item_badge(item),
            ])
        })
        .collect();

    let mut spans = Vec::new();
    for (index, entry) in summary.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" · "));
        }
        spans.push(badge(entry.status.label(), Tone::for_item(entry.status)));
        spans.push(Span::raw(format!(" {}", entry.count)));
    }

    lines.push(Line::default());
    lines.push(Line::from(spans));
    lines.push(dim("show <id> for details · cart · devtools (Delivery Agent)"));
    lines
}

fn detail(item: &ItemRow, in_cart: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        dim("back -> list"),
        Line::default(),
        Line::styled(
            item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(item_badge(item)),
        Line::default(),
        dim("Delivery Location"),
        Line::from(format!("  {}", item.destination)),
        dim("Availability"),
        Line::from(format!("  {}", item.availability)),
        Line::default(),
    ];
    if in_cart {
        lines.push(dim("(already in your cart)"));
    }
    lines.push(Line::from("add -> Add Item"));
    lines
}

fn cart(items: &[ItemRow], can_request: bool) -> Vec<Line<'static>> {
    let mut lines = vec![dim("back -> list"), Line::default()];

    if items.is_empty() {
        lines.push(Line::from("Your cart is empty"));
    }
    for item in items {
        lines.push(Line::from(vec![
            Span::raw(format!("[{}] {:<36} ", item.id, item.name)),
            item_badge(item),
        ]));
        lines.push(Line::from(format!("    {}", item.destination)));
        lines.push(dim(format!("    Availability: {}", item.availability)));
    }

    if can_request {
        lines.push(Line::default());
        lines.push(Line::styled(
            "request -> Request Delivery",
            Style::default().fg(Color::Green),
        ));
    }
    lines
}

fn dev_tools(
    (pending, processing): (usize, usize),
    requests: &[RequestRow],
) -> Vec<Line<'static>> {
    let mut lines = vec![
        dim("back -> list"),
        Line::default(),
        Line::from(format!(
            "Requested Carts ({}) · Pending {pending} · Processing {processing}",
            requests.len()
        )),
    ];

    if requests.is_empty() {
        lines.push(dim("No delivery requests yet"));
    }
    for request in requests {
        let action = if request.can_accept {
            Span::styled(
                format!("accept {} -> Accept Delivery", request.id),
                Style::default().fg(Color::Cyan),
            )
        } else {
            badge(request.status.label(), Tone::for_request(request.status))
        };

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("Cart #{:<8}", request.id),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            action,
        ]));
        lines.push(dim(format!("Requested: {}", request.requested)));
        lines.push(Line::from(format!("Items ({})", request.item_count)));
        for item in &request.items {
            lines.push(Line::from(format!("  - {} ({})", item.name, item.destination)));
        }
    }
    lines
}
