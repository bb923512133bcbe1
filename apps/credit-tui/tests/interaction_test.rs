use credit_engine::{LayoutMode, Modal, RoleId, ViewerConfig};
use credit_tui::app::App;
use credit_tui::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

fn app(layout: LayoutMode) -> App {
    App::new(ViewerConfig {
        layout,
        ..ViewerConfig::default()
    })
    .unwrap()
}

fn draw(app: &mut App, width: u16, height: u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
}

fn centre(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn node(app: &App, id: &'static str) -> Rect {
    app.hits
        .nodes
        .iter()
        .find(|(role, _)| *role == RoleId::new(id))
        .map(|(_, rect)| *rect)
        .unwrap()
}

fn list_row(app: &App, id: &'static str) -> Rect {
    app.hits
        .list_rows
        .iter()
        .find(|(role, _)| *role == RoleId::new(id))
        .map(|(_, rect)| *rect)
        .unwrap()
}

#[test]
fn test_hover_previews_and_click_locks() {
    let mut app = app(LayoutMode::Desktop);
    draw(&mut app, 140, 45);

    let (x, y) = centre(node(&app, "software"));
    app.on_mouse(mouse(MouseEventKind::Moved, x, y));
    assert_eq!(app.desktop.displayed(), Some(RoleId::new("software")));

    click(&mut app, x, y);
    assert_eq!(app.desktop.locked(), Some(RoleId::new("software")));

    // Hovering elsewhere no longer changes the detail while locked.
    draw(&mut app, 140, 45);
    let (ox, oy) = centre(node(&app, "methodology"));
    app.on_mouse(mouse(MouseEventKind::Moved, ox, oy));
    assert_eq!(app.desktop.displayed(), Some(RoleId::new("software")));

    // Second click on the locked node unlocks it.
    app.on_mouse(mouse(MouseEventKind::Moved, x, y));
    click(&mut app, x, y);
    assert_eq!(app.desktop.locked(), None);
    assert_eq!(app.desktop.displayed(), Some(RoleId::new("software")));
}

#[test]
fn test_pointer_leaving_keeps_detail() {
    let mut app = app(LayoutMode::Desktop);
    draw(&mut app, 140, 45);

    let (x, y) = centre(node(&app, "validation"));
    app.on_mouse(mouse(MouseEventKind::Moved, x, y));
    app.on_mouse(mouse(MouseEventKind::Moved, 0, 0));
    assert_eq!(app.desktop.hovered(), None);
    assert_eq!(app.desktop.displayed(), Some(RoleId::new("validation")));
}

#[test]
fn test_drawer_backdrop_closes_and_releases_lock() {
    let mut app = app(LayoutMode::Mobile);
    draw(&mut app, 60, 40);

    let (x, y) = centre(list_row(&app, "software"));
    click(&mut app, x, y);
    assert!(app.scroll_lock.is_locked());
    assert_eq!(
        app.mobile.as_ref().unwrap().selected(),
        Some(RoleId::new("software"))
    );

    draw(&mut app, 60, 40);
    // Clicks inside the drawer body do nothing.
    let drawer = app.hits.drawer.unwrap();
    click(&mut app, drawer.x + 5, drawer.bottom() - 2);
    assert!(app.scroll_lock.is_locked());

    click(&mut app, 1, 1);
    assert_eq!(app.mobile.as_ref().unwrap().selected(), None);
    assert!(!app.scroll_lock.is_locked());
    assert_eq!(app.scroll_lock.acquisitions(), 1);
    assert_eq!(app.scroll_lock.releases(), 1);
}

#[test]
fn test_drawer_close_button_and_handle() {
    let mut app = app(LayoutMode::Mobile);
    draw(&mut app, 60, 40);

    for target in ["close", "handle"] {
        let (x, y) = centre(list_row(&app, "investigation"));
        click(&mut app, x, y);
        draw(&mut app, 60, 40);
        let rect = match target {
            "close" => app.hits.drawer_close.unwrap(),
            _ => app.hits.drawer_handle.unwrap(),
        };
        let (cx, cy) = centre(rect);
        click(&mut app, cx, cy);
        assert_eq!(app.mobile.as_ref().unwrap().selected(), None, "{target}");
        draw(&mut app, 60, 40);
    }
    assert_eq!(app.scroll_lock.releases(), 2);
}

#[test]
fn test_list_is_frozen_while_drawer_open() {
    let mut app = app(LayoutMode::Mobile);
    draw(&mut app, 60, 40);
    app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    draw(&mut app, 60, 40);

    let cursor = app.mobile.as_ref().unwrap().cursor();
    app.on_mouse(mouse(MouseEventKind::ScrollDown, 1, 1));
    let mobile = app.mobile.as_ref().unwrap();
    assert_eq!(mobile.cursor(), cursor);
    assert_eq!(mobile.list_offset(), 0);
    assert_eq!(mobile.drawer().unwrap().scroll(), 1);
}

#[test]
fn test_modal_close_button_and_backdrop() {
    let mut app = app(LayoutMode::Desktop);
    app.open_modal(Modal::About);
    draw(&mut app, 140, 45);

    let (x, y) = centre(app.hits.modal_close.unwrap());
    click(&mut app, x, y);
    assert_eq!(app.modals.active(), None);

    app.open_modal(Modal::Showcase);
    draw(&mut app, 140, 45);
    // Clicks inside the dialog leave it open.
    let (mx, my) = centre(app.hits.modal.unwrap());
    click(&mut app, mx, my);
    assert!(app.modals.is_open(Modal::Showcase));
    click(&mut app, 0, 0);
    assert_eq!(app.modals.active(), None);
}

#[test]
fn test_modal_blocks_grid_clicks() {
    let mut app = app(LayoutMode::Desktop);
    draw(&mut app, 140, 45);
    let (x, y) = centre(node(&app, "software"));

    app.open_modal(Modal::About);
    draw(&mut app, 140, 45);
    click(&mut app, x, y);
    assert_eq!(app.desktop.locked(), None);
}

#[test]
fn test_growing_terminal_unmounts_drawer() {
    let mut app = app(LayoutMode::Auto);
    draw(&mut app, 60, 40);
    let (x, y) = centre(list_row(&app, "resources"));
    click(&mut app, x, y);
    assert!(app.scroll_lock.is_locked());

    draw(&mut app, 140, 45);
    assert!(app.mobile.is_none());
    assert!(!app.scroll_lock.is_locked());
    assert_eq!(app.scroll_lock.releases(), 1);
}
