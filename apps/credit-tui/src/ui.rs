use crate::app::{App, HitMap};
use crate::hex::{HexNode, color};
use credit_engine::{
    Bounds, Category, DetailSection, DetailVariant, DetailView, Glyph, GlyphSize, IconSet,
    ListEntry, Modal, NodeState, Role, Stroke, Theme, Viewport,
    grid::{CONNECTORS, ConnectorLabel, GridLayout, NODE_HEIGHT, Side},
    modal::{about, showcase},
    theme,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

pub const TITLE: &str = "CRediT Role Icons";
pub const SUBTITLE: &str = "CONTRIBUTOR ROLES TAXONOMY";

const BRAND: Color = Color::Rgb(0x4F, 0x46, 0xE5);
const MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
const BODY: Color = Color::Rgb(0xCB, 0xD5, 0xE1);

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.sync_viewport(area.width);
    app.hits.clear();

    match app.viewport {
        Viewport::Desktop => draw_desktop(f, app, area),
        Viewport::Mobile => draw_mobile(f, app, area),
    }

    if let Some(modal) = app.modals.active() {
        draw_modal(f, app, modal, area);
    }
}

// --- Desktop ---

fn draw_desktop(f: &mut Frame, app: &mut App, area: Rect) {
    let panel_width = (area.width / 3).clamp(36, 56);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(panel_width)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Diagram
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Footer
        ])
        .split(columns[0]);

    draw_header(f, left[0]);
    draw_grid(f, app, left[1]);
    draw_legend(f, left[2]);
    draw_desktop_footer(f, app, left[3]);

    let role = app.desktop.displayed().and_then(|id| app.catalog.get(id));
    draw_detail_panel(f, &*app.icons, role, columns[1]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )),
    ];
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(BRAND));
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let grid = &app.grid;
    if grid.width() > area.width || grid.height() > area.height {
        f.render_widget(
            Paragraph::new("Enlarge the terminal to see the diagram")
                .style(Style::default().fg(MUTED))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let bounds = Bounds::new(area.x, area.y, area.width, area.height);
    for connector in CONNECTORS {
        draw_connector(f.buffer_mut(), grid, bounds, area, connector);
    }

    let mut hits = Vec::new();
    for (id, b) in grid.node_rects(bounds) {
        let Some(role) = app.catalog.get(id) else {
            continue;
        };
        let state = app.desktop.node_state(id);
        let stroke = if state == NodeState::Idle {
            Stroke::Thin
        } else {
            Stroke::Bold
        };
        let rect = Rect::new(b.x, b.y, b.width, b.height);
        f.render_widget(
            HexNode {
                role,
                state,
                glyph: app.icons.render(role.icon, GlyphSize::Small, stroke),
            },
            rect,
        );
        hits.push((id, rect));
    }
    app.hits.nodes = hits;
}

fn draw_connector(
    buf: &mut Buffer,
    grid: &GridLayout<'_>,
    bounds: Bounds,
    clip: Rect,
    connector: ConnectorLabel,
) {
    let Some(row) = grid.row_bounds(bounds, connector.row) else {
        return;
    };
    let palette = theme(connector.category);
    let label_style = Style::default()
        .fg(color(palette.text))
        .add_modifier(Modifier::BOLD);
    let line_style = Style::default().fg(color(palette.stroke));
    let text = connector.text().to_uppercase();
    let len = text.chars().count() as u16;
    let mid_x = row.x + row.width / 2;
    let mid_y = row.y + NODE_HEIGHT / 2;

    match connector.side {
        Side::Top => {
            if row.y >= 2 {
                let x = mid_x.saturating_sub(len / 2);
                put_clipped(buf, clip, x, row.y - 2, &text, label_style);
                put_clipped(buf, clip, mid_x, row.y - 1, "│", line_style);
            }
        }
        Side::Bottom => {
            put_clipped(buf, clip, mid_x, row.bottom(), "│", line_style);
            put_clipped(
                buf,
                clip,
                mid_x.saturating_sub(len / 2),
                row.bottom() + 1,
                &text,
                label_style,
            );
        }
        Side::Right => {
            let x = row.right() + 1;
            put_clipped(buf, clip, x, mid_y, "●──", line_style);
            put_clipped(buf, clip, x + 4, mid_y, &text, label_style);
        }
        Side::Left => {
            let start = row.x.saturating_sub(len + 5);
            put_clipped(buf, clip, start, mid_y, &text, label_style);
            put_clipped(buf, clip, start + len + 1, mid_y, "──●", line_style);
        }
    }
}

fn put_clipped(buf: &mut Buffer, clip: Rect, x: u16, y: u16, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        let pos = Position::new(x.saturating_add(i as u16), y);
        if !clip.contains(pos) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn draw_legend(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for category in Category::ALL {
        spans.push(Span::styled(
            "● ",
            Style::default().fg(color(theme(category).bold_fill)),
        ));
        spans.push(Span::styled(
            category.label().to_uppercase(),
            Style::default().fg(MUTED),
        ));
        spans.push(Span::raw("   "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_desktop_footer(f: &mut Frame, app: &App, area: Rect) {
    let status = match app.desktop.locked().and_then(|id| app.catalog.get(id)) {
        Some(role) => format!(" LOCKED: {} ", role.title),
        None => " FOLLOWING FOCUS ".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            status,
            Style::default()
                .fg(Color::Black)
                .bg(if app.desktop.is_locked() { BRAND } else { MUTED })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " [ARROWS] Focus | [ENTER] Lock/Unlock | [A] About | [S] Showcase | [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_detail_panel(
    f: &mut Frame,
    icons: &dyn IconSet,
    role: Option<&Role>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = padded(block.inner(area), 3, 1);
    f.render_widget(block, area);

    let view = DetailView::new(role, DetailVariant::Panel);
    let lines = detail_lines(&view, icons, false);
    if view.is_placeholder() {
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let centred = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centred,
        );
    } else {
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

fn padded(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x.saturating_add(horizontal),
        area.y.saturating_add(vertical),
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

// --- Detail rendering shared by the panel and the drawer ---

fn detail_lines(
    view: &DetailView,
    icons: &dyn IconSet,
    centre_header: bool,
) -> Vec<Line<'static>> {
    let header = |line: Line<'static>| {
        if centre_header {
            line.alignment(Alignment::Center)
        } else {
            line
        }
    };

    let (palette, sections) = match view {
        DetailView::Placeholder { heading, hint } => {
            let glyph = icons.render(Glyph::Hexagon, GlyphSize::Large, Stroke::Thin);
            let mut lines = emblem_lines(&glyph, &theme::NEUTRAL);
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                *heading,
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(Span::styled(
                *hint,
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }
        DetailView::Populated {
            theme: palette,
            sections,
        } => (palette, sections),
    };

    let heading_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for section in sections {
        match section {
            DetailSection::Badge(category) => {
                lines.push(header(Line::from(Span::styled(
                    format!("[ {} ]", category.label().to_uppercase()),
                    Style::default()
                        .fg(color(palette.text))
                        .add_modifier(Modifier::BOLD),
                ))));
                lines.push(Line::default());
            }
            DetailSection::Emblem(glyph) => {
                let glyph = icons.render(*glyph, GlyphSize::Large, Stroke::Thin);
                lines.extend(emblem_lines(&glyph, palette).into_iter().map(&header));
                lines.push(Line::default());
            }
            DetailSection::Title(title) => {
                lines.push(header(Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))));
            }
            DetailSection::Divider => {
                lines.push(header(Line::from(Span::styled(
                    "────",
                    Style::default().fg(Color::DarkGray),
                ))));
                lines.push(Line::default());
            }
            DetailSection::Description { heading, body } => {
                let info = icons.render(Glyph::Info, GlyphSize::Small, Stroke::Thin);
                lines.push(Line::from(Span::styled(
                    format!("{} {}", info, heading.to_uppercase()),
                    heading_style,
                )));
                lines.push(Line::from(Span::styled(*body, Style::default().fg(BODY))));
                lines.push(Line::default());
            }
            DetailSection::Activities { heading, items } => {
                let check = icons.render(Glyph::CheckCircle, GlyphSize::Small, Stroke::Thin);
                lines.push(Line::from(Span::styled(
                    format!("{} {}", check, heading.to_uppercase()),
                    heading_style,
                )));
                for item in items.iter() {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(color(palette.bold_fill))),
                        Span::styled(*item, Style::default().fg(BODY)),
                    ]));
                }
            }
        }
    }
    lines
}

/// Glyph framed by a small polygon, three lines tall.
fn emblem_lines(glyph: &str, palette: &Theme) -> Vec<Line<'static>> {
    let span = glyph.chars().count() + 2;
    let edge = Style::default().fg(color(palette.stroke));
    let icon = Style::default()
        .fg(color(palette.text))
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(format!("  ╱{}╲", "‾".repeat(span)), edge)),
        Line::from(vec![
            Span::styled(" ▕  ", edge),
            Span::styled(glyph.to_string(), icon),
            Span::styled("  ▏", edge),
        ]),
        Line::from(Span::styled(format!("  ╲{}╱", "_".repeat(span)), edge)),
    ]
}

// --- Mobile ---

fn draw_mobile(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(f, chunks[0]);

    let catalog = app.catalog;
    let icons: &dyn IconSet = &*app.icons;
    let Some(mobile) = app.mobile.as_mut() else {
        return;
    };

    let list = chunks[1];
    mobile.follow_cursor(list.height);
    let entries = mobile.entries();
    let offset = (mobile.list_offset() as usize).min(entries.len().saturating_sub(1));
    let chevron = icons.render(Glyph::ChevronRight, GlyphSize::Small, Stroke::Thin);
    let hexagon = icons.render(Glyph::Hexagon, GlyphSize::Small, Stroke::Thin);

    for (i, entry) in entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(list.height as usize)
    {
        let row = Rect::new(list.x, list.y + (i - offset) as u16, list.width, 1);
        match entry {
            ListEntry::Header(category) => {
                let palette = theme(*category);
                let line = Line::from(vec![
                    Span::styled(" ● ", Style::default().fg(color(palette.accent))),
                    Span::styled(
                        category.label().to_uppercase(),
                        Style::default()
                            .fg(color(palette.text))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]);
                f.render_widget(Paragraph::new(line), row);
            }
            ListEntry::Role(id) => {
                let Some(role) = catalog.get(*id) else {
                    continue;
                };
                let palette = theme(role.category);
                let glyph = icons.render(role.icon, GlyphSize::Small, Stroke::Thin);
                let selected = i == mobile.cursor();
                let base = if selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                let label = format!("{} {}  {}", hexagon, glyph, role.title);
                let pad = (list.width as usize)
                    .saturating_sub(label.chars().count() + chevron.chars().count() + 4);
                let line = Line::from(vec![
                    Span::styled("   ", base),
                    Span::styled(format!("{} ", hexagon), base.fg(color(palette.stroke))),
                    Span::styled(format!("{}  ", glyph), base.fg(MUTED)),
                    Span::styled(
                        role.title,
                        base.fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" ".repeat(pad), base),
                    Span::styled(chevron.clone(), base.fg(Color::DarkGray)),
                ]);
                f.render_widget(Paragraph::new(line), row);
                app.hits.list_rows.push((*id, row));
            }
        }
    }

    let footer = if mobile.drawer().is_some() {
        " [ESC/X] Close | [UP/DOWN] Scroll | [Q] Quit"
    } else {
        " [UP/DOWN] Move | [ENTER] Open | [A] About | [S] Showcase | [Q] Quit"
    };
    f.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(drawer) = mobile.drawer() {
        if let Some(role) = catalog.get(drawer.role()) {
            draw_drawer(f, &mut app.hits, icons, role, drawer.scroll(), area);
        }
    }
}

fn draw_drawer(
    f: &mut Frame,
    hits: &mut HitMap,
    icons: &dyn IconSet,
    role: &Role,
    scroll: u16,
    area: Rect,
) {
    let height = ((area.height as u32 * 85) / 100) as u16;
    let drawer = Rect::new(area.x, area.bottom() - height, area.width, height);
    let backdrop = Rect::new(area.x, area.y, area.width, area.height - height);
    f.buffer_mut().set_style(
        backdrop,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );
    f.render_widget(Clear, drawer);

    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(drawer);
    f.render_widget(block, drawer);

    let handle = Rect::new(
        inner.x + inner.width.saturating_sub(8) / 2,
        inner.y,
        8.min(inner.width),
        1,
    );
    f.render_widget(
        Paragraph::new("━━━━━━━━").style(Style::default().fg(Color::DarkGray)),
        handle,
    );

    let close = Rect::new(inner.right().saturating_sub(4), inner.y, 3.min(inner.width), 1);
    f.render_widget(
        Paragraph::new(format!(
            " {} ",
            icons.render(Glyph::Close, GlyphSize::Small, Stroke::Thin)
        ))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray)),
        close,
    );

    let view = DetailView::new(Some(role), DetailVariant::Drawer);
    let mut lines = detail_lines(&view, icons, true);
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "▁▁▁▁▁▁▁▁▁▁▁▁",
            Style::default().fg(color(theme(role.category).accent)),
        ))
        .alignment(Alignment::Center),
    );

    let content = Rect::new(
        inner.x + 2,
        inner.y + 2,
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(2),
    );
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        content,
    );

    hits.drawer = Some(drawer);
    hits.drawer_handle = Some(handle);
    hits.drawer_close = Some(close);
}

// --- Modals ---

fn draw_modal(f: &mut Frame, app: &mut App, modal: Modal, area: Rect) {
    let rect = centered_rect(80, 85, area);
    f.buffer_mut().set_style(
        area,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );
    f.render_widget(Clear, rect);

    let title = match modal {
        Modal::About => about::TITLE.to_string(),
        Modal::Showcase => format!("{} | {}", showcase::JOURNAL, showcase::ISSUE),
    };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND));
    let inner = padded(block.inner(rect), 2, 1);
    f.render_widget(block, rect);

    let close = Rect::new(rect.right().saturating_sub(6), rect.y, 3, 1);
    f.render_widget(
        Paragraph::new(format!(
            " {} ",
            app.icons.render(Glyph::Close, GlyphSize::Small, Stroke::Thin)
        ))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray)),
        close,
    );

    let lines = match modal {
        Modal::About => about_lines(),
        Modal::Showcase => showcase_lines(app),
    };
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.modal_scroll, 0)),
        inner,
    );

    app.hits.modal = Some(rect);
    app.hits.modal_close = Some(close);
}

fn section_heading(text: &str, fg: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    ))
}

fn link_line(link: &about::Link) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("↗ {} ", link.label),
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})", link.url),
            Style::default()
                .fg(MUTED)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

fn about_lines() -> Vec<Line<'static>> {
    let strategy = color(theme(Category::Strategy).text);
    let research = color(theme(Category::Research).text);
    let dissemination = color(theme(Category::Dissemination).text);

    let mut lines = vec![
        section_heading(about::HYPOTHESIS_HEADING, strategy),
        Line::from(Span::styled(about::HYPOTHESIS, Style::default().fg(BODY))),
        Line::default(),
        section_heading(about::CREDIT_HEADING, MUTED),
        Line::from(Span::styled(about::CREDIT_BODY, Style::default().fg(BODY))),
        link_line(&about::CREDIT_LINK),
        Line::default(),
        section_heading(about::PROCESS_HEADING, research),
    ];
    for step in about::PROCESS {
        lines.push(Line::from(Span::styled(
            format!("▸ {}", step.name.to_uppercase()),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", step.body),
            Style::default().fg(BODY),
        )));
        if let Some(link) = &step.link {
            lines.push(link_line(link));
        }
    }
    lines.push(Line::default());
    lines.push(section_heading(about::FINDINGS_HEADING, dissemination));
    for finding in about::FINDINGS {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(dissemination)),
            Span::styled(
                format!("{}: ", finding.label),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(finding.body, Style::default().fg(BODY)),
        ]));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            about::FOOTER.to_uppercase(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );
    lines
}

fn showcase_lines(app: &App) -> Vec<Line<'static>> {
    let strategy = color(theme(Category::Strategy).text);
    let mut lines = vec![
        section_heading(showcase::ARTICLE_TYPE, strategy),
        Line::from(Span::styled(
            showcase::TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let mut byline = Vec::new();
    for (i, author) in showcase::AUTHOR_ORDER.iter().enumerate() {
        byline.push(Span::styled(*author, Style::default().fg(BODY)));
        byline.push(Span::styled(
            format!("[{}]", showcase::affiliation_marker(i)),
            Style::default().fg(MUTED),
        ));
        if i + 1 < showcase::AUTHOR_ORDER.len() {
            byline.push(Span::raw(", "));
        }
    }
    lines.push(Line::from(byline));
    lines.push(Line::default());
    for (i, affiliation) in showcase::AFFILIATIONS.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", i + 1, affiliation),
            Style::default().fg(MUTED),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("* {}", showcase::CORRESPONDING),
        Style::default().fg(MUTED),
    )));
    lines.push(Line::default());
    lines.push(section_heading("Abstract", MUTED));
    lines.push(Line::from(Span::styled(
        showcase::ABSTRACT,
        Style::default().fg(BODY),
    )));
    lines.push(Line::default());

    let tab = |view: showcase::ShowcaseView| {
        let style = if view == app.showcase_view {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(view.label().to_uppercase(), style)
    };
    lines.push(Line::from(vec![
        Span::styled(
            "AUTHOR CONTRIBUTIONS    ",
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ),
        tab(showcase::ShowcaseView::Standard),
        Span::raw("  "),
        tab(showcase::ShowcaseView::Credit),
        Span::styled("   [V] switch", Style::default().fg(Color::DarkGray)),
    ]));

    match app.showcase_view {
        showcase::ShowcaseView::Standard => {
            lines.push(Line::from(Span::styled(
                showcase::standard_statement(),
                Style::default().fg(BODY),
            )));
        }
        showcase::ShowcaseView::Credit => {
            for group in showcase::contribution_groups(app.catalog) {
                let palette = theme(group.role.category);
                let glyph = app.icons.render(group.role.icon, GlyphSize::Small, Stroke::Bold);
                let title = Span::styled(
                    format!("{} {}", glyph, group.role.title.to_uppercase()),
                    Style::default()
                        .fg(color(palette.text))
                        .add_modifier(Modifier::BOLD),
                );
                let names = Span::styled(group.names.join(", "), Style::default().fg(BODY));
                if group.wide {
                    lines.push(Line::from(title));
                    lines.push(Line::from(vec![Span::raw("  "), names]));
                } else {
                    lines.push(Line::from(vec![title, Span::raw("  "), names]));
                }
            }
            lines.push(Line::from(Span::styled(
                showcase::SOURCE_NOTE,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(section_heading("Publications", MUTED));
    lines.extend(publication_table(app));
    lines
}

fn publication_table(app: &App) -> Vec<Line<'static>> {
    let glyphs: Vec<String> = showcase::PUBLICATION_COLUMNS
        .iter()
        .map(|(_, id)| {
            app.catalog
                .get(*id)
                .map(|r| app.icons.render(r.icon, GlyphSize::Small, Stroke::Thin))
                .unwrap_or_default()
        })
        .collect();

    let mut header = format!(
        "{:<30}{:<22}{:<9}{:<16}",
        "Topic", "Publication", "Chapter", "Status"
    );
    for glyph in &glyphs {
        header.push_str(&format!("{:<4}", glyph));
    }
    let mut lines = vec![Line::from(Span::styled(
        header,
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    ))];

    for publication in showcase::PUBLICATIONS {
        let mut row = format!(
            "{:<30}{:<22}{:<9}{:<16}",
            publication.topic,
            publication.citation,
            publication.chapter,
            publication.status.label()
        );
        for contributed in publication.contributions {
            row.push_str(if contributed { "✓   " } else { "·   " });
        }
        lines.push(Line::from(Span::styled(row, Style::default().fg(BODY))));
    }

    let legend: Vec<Span> = showcase::PUBLICATION_COLUMNS
        .iter()
        .zip(&glyphs)
        .map(|((label, _), glyph)| {
            Span::styled(format!("{} {}   ", glyph, label), Style::default().fg(Color::DarkGray))
        })
        .collect();
    lines.push(Line::from(legend));
    lines
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
