use crate::config::DemoKind;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::theme::{ACCENT, BORDER, FOCUS_BG, MUTED, TEXT};
use crate::host::Element;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, tree: &Element) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (nav, main, notes) = body_columns(body);
    let demo = app.demo();

    frame.render_widget(Header::new().widget(demo.kind(), demo.route()), header);
    frame.render_widget(navigation(demo.kind()), nav);

    let focus_style = Style::default()
        .bg(FOCUS_BG)
        .add_modifier(Modifier::REVERSED);
    let component = Paragraph::new(tree.lines(Some(app.focus()), focus_style))
        .style(Style::default().fg(TEXT))
        .block(panel(demo.kind().title()));
    frame.render_widget(component, main);

    let notes_widget = Paragraph::new(demo.notes())
        .wrap(Wrap { trim: true })
        .block(panel("Notes"));
    frame.render_widget(notes_widget, notes);

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
        .title(format!(" {title} "))
}

fn navigation(active: DemoKind) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = DemoKind::ALL
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let style = if *kind == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            Line::from(vec![
                Span::styled(format!(" F{} ", index + 1), Style::default().fg(MUTED)),
                Span::styled(kind.title(), style),
            ])
        })
        .collect();

    Paragraph::new(lines).block(panel("Demos"))
}
