use credit_engine::{DesktopSelection, IconStyle, LayoutMode, RoleId, ViewerConfig};
use credit_tui::app::App;
use credit_tui::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

fn app(layout: LayoutMode) -> App {
    App::new(ViewerConfig {
        layout,
        ..ViewerConfig::default()
    })
    .unwrap()
}

fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_desktop_initial_render() {
    let mut app = app(LayoutMode::Auto);
    let buffer = render(&mut app, 140, 45);
    let text = screen_text(&buffer);

    assert!(text.contains(ui::TITLE), "header missing:\n{text}");
    assert!(text.contains("CONCEPTUA…"), "active node label missing:\n{text}");
    assert!(text.contains("Conceptualization"));
    assert!(text.contains("[ STRATEGY & LEADERSHIP ]"));
    assert!(text.contains("ROLE DEFINITION"));
    assert!(text.contains("KEY ACTIVITIES"));
    assert!(text.contains("FOLLOWING FOCUS"));
    assert_eq!(app.hits.nodes.len(), 14);
}

#[test]
fn test_desktop_connector_labels() {
    let mut app = app(LayoutMode::Desktop);
    let text = screen_text(&render(&mut app, 140, 45));

    for label in ["STRATEGY", "INVESTIGATION", "INFRASTRUCTURE", "DISSEMINATION"] {
        assert!(text.contains(label), "connector {label} missing:\n{text}");
    }
}

#[test]
fn test_desktop_placeholder_when_nothing_displayed() {
    let mut app = app(LayoutMode::Desktop);
    app.desktop = DesktopSelection::new(None);
    let text = screen_text(&render(&mut app, 140, 45));

    assert!(text.contains("Contributor Roles Taxonomy"));
    assert!(text.contains("Select a node to explore"));
    assert!(!text.contains("ROLE DEFINITION"));
}

#[test]
fn test_locked_status_in_footer() {
    let mut app = app(LayoutMode::Desktop);
    render(&mut app, 140, 45);
    press(&mut app, KeyCode::Enter);
    let text = screen_text(&render(&mut app, 140, 45));

    assert!(text.contains("LOCKED: Conceptualization"));
}

#[test]
fn test_desktop_too_small_for_diagram() {
    let mut app = app(LayoutMode::Desktop);
    let text = screen_text(&render(&mut app, 80, 20));

    assert!(text.contains("Enlarge the terminal"));
    assert!(app.hits.nodes.is_empty());
}

#[test]
fn test_mobile_list_render() {
    let mut app = app(LayoutMode::Auto);
    let text = screen_text(&render(&mut app, 60, 40));

    assert!(app.mobile.is_some());
    assert!(text.contains("STRATEGY & LEADERSHIP"));
    assert!(text.contains("RESEARCH & DATA"));
    assert!(text.contains("Writing - Review & Editing"));
    assert!(!text.contains("ROLE DEFINITION"));
    assert_eq!(app.hits.list_rows.len(), 14);
}

#[test]
fn test_mobile_drawer_render() {
    let mut app = app(LayoutMode::Mobile);
    render(&mut app, 60, 40);
    app.mobile
        .as_mut()
        .unwrap()
        .tap(RoleId::new("software"));
    let text = screen_text(&render(&mut app, 60, 40));

    assert!(text.contains("Software"));
    assert!(text.contains("DESCRIPTION"));
    assert!(!text.contains("ROLE DEFINITION"));
    assert!(text.contains("✕"));
    assert!(app.hits.drawer.is_some());
    assert!(app.hits.drawer_handle.is_some());
}

#[test]
fn test_about_modal_render() {
    let mut app = app(LayoutMode::Desktop);
    press(&mut app, KeyCode::Char('a'));
    let text = screen_text(&render(&mut app, 140, 45));

    assert!(text.contains("About the Project"));
    assert!(text.contains("THE HYPOTHESIS"));
    assert!(text.contains("WHAT ARE CREDIT ROLES?"));
    assert!(app.hits.modal_close.is_some());
}

#[test]
fn test_showcase_modal_views() {
    let mut app = app(LayoutMode::Desktop);
    press(&mut app, KeyCode::Char('s'));
    let text = screen_text(&render(&mut app, 140, 45));

    assert!(text.contains("Journal of Metascience"));
    assert!(text.contains("AUTHOR CONTRIBUTIONS"));
    assert!(text.contains("ABSTRACT"));

    press(&mut app, KeyCode::Char('v'));
    let text = screen_text(&render(&mut app, 140, 45));
    assert!(text.contains("STANDARD"));
    assert!(!text.contains("Source: CRediT Taxonomy"));
}

#[test]
fn test_ascii_icons_render() {
    let mut app = App::new(ViewerConfig {
        layout: LayoutMode::Mobile,
        icons: IconStyle::Ascii,
        ..ViewerConfig::default()
    })
    .unwrap();
    let text = screen_text(&render(&mut app, 60, 40));

    assert!(text.contains("Conceptualization"));
    assert!(!text.contains('⬡'));
    assert!(!text.contains('›'));
}
