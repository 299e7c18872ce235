use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::toast::ToastKind;
use crate::workflow::WorkflowState;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + tagline
            Constraint::Length(3), // URL input
            Constraint::Min(0),    // Result / error / loading
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_url_input(frame, app, chunks[1]);
    render_content(frame, app, chunks[2]);
    render_hints(frame, app, chunks[3]);

    // Toast sits on top of everything, top-right corner
    render_toast(frame, app);

    if app.show_help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Resumido",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Cole o link de uma notícia e obtenha um resumo instantâneo.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_url_input(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.url_input_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" URL da notícia ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let cursor = if app.url_input_active { "█" } else { "" };
    let text = format!("{}{}", app.url_input, cursor);

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.workflow.state() {
        WorkflowState::Idle => {
            let hint = Paragraph::new("Digite uma URL e pressione Enter para resumir.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
        }

        WorkflowState::Loading => {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", app.spinner()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("Resumindo..."),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }

        WorkflowState::Failed(message) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red));
            let text = Line::from(vec![
                Span::styled(
                    "Erro: ",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.clone(), Style::default().fg(Color::Red)),
            ]);
            frame.render_widget(Paragraph::new(text).block(block), area);
        }

        WorkflowState::Success(summary) => {
            let block = Block::default()
                .title(" Resumo Gerado ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let width = inner.width.saturating_sub(1) as usize;
            let mut lines = markdown_lines(&summary.summary, width.max(20));

            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Link Original:",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                summary.original_url.clone(),
                Style::default().fg(Color::Cyan),
            )));

            if let Some(link) = app.workflow.share_link(&app.share_origin) {
                lines.push(Line::from(Span::styled(
                    "Link para Compartilhar:",
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(Span::styled(
                    link,
                    Style::default().fg(Color::Cyan),
                )));
            }

            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.url_input_active {
        " Enter resumir · Esc sair do campo · Ctrl+U limpar"
    } else {
        " e editar URL · Enter resumir · y copiar link · o abrir original · s abrir resumo · ? ajuda · q sair"
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_toast(frame: &mut Frame, app: &App) {
    let Some(toast) = app.toasts.current() else {
        return;
    };

    let area = frame.area();
    if area.height < 4 || area.width < 20 {
        return;
    }

    let width = (toast.message.chars().count() as u16 + 4)
        .clamp(12, area.width.saturating_sub(2));
    let rect = Rect {
        x: area.width.saturating_sub(width + 1),
        y: 1,
        width,
        height: 3,
    };

    let color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Danger => Color::Red,
        ToastKind::Warning => Color::Yellow,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(toast.message.clone())
            .style(Style::default().fg(color))
            .block(block),
        rect,
    );
}

fn render_help(frame: &mut Frame) {
    let area = frame.area();
    let width = 48.min(area.width);
    let height = 13.min(area.height);
    let rect = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(""),
        Line::from("  e / i     editar URL"),
        Line::from("  Enter     resumir"),
        Line::from("  y         copiar link de compartilhamento"),
        Line::from("  o         abrir notícia original"),
        Line::from("  s         abrir resumo no navegador"),
        Line::from("  x         dispensar notificação"),
        Line::from("  ?         ajuda"),
        Line::from("  q         sair"),
        Line::from(""),
        Line::from(Span::styled(
            "  qualquer tecla fecha esta janela",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Atalhos ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Minimal line-based markdown styling: headings highlighted, list items
/// bulleted, bold markers stripped. Visual fidelity is not the point.
fn markdown_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let trimmed = raw.trim_end();
        if trimmed.is_empty() {
            lines.push(Line::default());
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix('#') {
            let heading = heading.trim_start_matches('#').trim().replace("**", "");
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else if let Some(item) = trimmed
            .trim_start()
            .strip_prefix("- ")
            .or_else(|| trimmed.trim_start().strip_prefix("* "))
        {
            let body = item.replace("**", "");
            for (i, piece) in textwrap::wrap(&body, width.saturating_sub(2).max(10))
                .into_iter()
                .enumerate()
            {
                let prefix = if i == 0 { "• " } else { "  " };
                lines.push(Line::from(format!("{prefix}{piece}")));
            }
        } else {
            let body = trimmed.replace("**", "");
            for piece in textwrap::wrap(&body, width.max(10)) {
                lines.push(Line::from(piece.into_owned()));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_stripped_and_styled() {
        let lines = markdown_lines("## Título da Notícia", 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Título da Notícia");
    }

    #[test]
    fn bullets_are_rendered_with_marker() {
        let lines = markdown_lines("- primeiro ponto", 80);
        assert_eq!(lines[0].spans[0].content, "• primeiro ponto");
    }

    #[test]
    fn long_lines_wrap_to_width() {
        let text = "palavra ".repeat(30);
        let lines = markdown_lines(&text, 40);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 40));
    }

    #[test]
    fn bold_markers_are_stripped() {
        let lines = markdown_lines("um **destaque** aqui", 80);
        assert_eq!(lines[0].spans[0].content, "um destaque aqui");
    }
}
