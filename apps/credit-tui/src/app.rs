use anyhow::{Context, Result};
use credit_engine::{
    Catalog, CloseReason, DesktopSelection, Direction, GridLayout, IconSet, Modal, ModalState,
    MobileSelection, RoleId, ScrollLock, ViewerConfig, Viewport,
    modal::showcase::ShowcaseView,
};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

/// Screen regions recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub nodes: Vec<(RoleId, Rect)>,
    pub list_rows: Vec<(RoleId, Rect)>,
    pub drawer: Option<Rect>,
    pub drawer_close: Option<Rect>,
    pub drawer_handle: Option<Rect>,
    pub modal: Option<Rect>,
    pub modal_close: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = HitMap::default();
    }

    // Rows overlap by a line; the lower row is drawn last and wins.
    fn node_at(&self, x: u16, y: u16) -> Option<RoleId> {
        self.nodes
            .iter()
            .rev()
            .find(|(_, r)| hex_hit(*r, x, y))
            .map(|(id, _)| *id)
    }

    fn list_row_at(&self, x: u16, y: u16) -> Option<RoleId> {
        self.list_rows
            .iter()
            .find(|(_, r)| contains(*r, x, y))
            .map(|(id, _)| *id)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

// Corners of a node's box are empty space outside the polygon.
fn hex_hit(rect: Rect, x: u16, y: u16) -> bool {
    if !contains(rect, x, y) {
        return false;
    }
    let dx = x - rect.x;
    let dy = y - rect.y;
    let inset = match dy {
        0 => 4,
        1 => 2,
        2 => 1,
        3 => 2,
        _ => 4,
    };
    dx >= inset && dx < rect.width.saturating_sub(inset)
}

pub struct App {
    pub catalog: &'static Catalog,
    pub grid: GridLayout<'static>,
    pub config: ViewerConfig,
    pub icons: Box<dyn IconSet>,
    pub desktop: DesktopSelection,
    pub mobile: Option<MobileSelection>,
    pub scroll_lock: ScrollLock,
    pub modals: ModalState,
    pub showcase_view: ShowcaseView,
    pub modal_scroll: u16,
    pub viewport: Viewport,
    pub hits: HitMap,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let catalog = Catalog::builtin();
        catalog.validate().context("Built-in role catalog is invalid")?;
        let grid = GridLayout::build(catalog).context("Failed to lay out the role grid")?;
        let icons = config.icons.icon_set();

        Ok(Self {
            catalog,
            grid,
            icons,
            desktop: DesktopSelection::for_catalog(catalog),
            mobile: None,
            scroll_lock: ScrollLock::new(),
            modals: ModalState::new(),
            showcase_view: ShowcaseView::default(),
            modal_scroll: 0,
            viewport: Viewport::Desktop,
            hits: HitMap::default(),
            should_quit: false,
            config,
        })
    }

    /// Picks the layout for the current terminal size. Leaving the mobile
    /// layout drops its state, which releases a held scroll lock.
    pub fn sync_viewport(&mut self, columns: u16) {
        let viewport = self.config.layout.resolve(columns, self.config.breakpoint);
        match viewport {
            Viewport::Mobile if self.mobile.is_none() => {
                self.mobile = Some(MobileSelection::new(
                    self.catalog,
                    self.scroll_lock.clone(),
                ));
                info!(columns, "mobile layout mounted");
            }
            Viewport::Desktop if self.mobile.is_some() => {
                self.mobile = None;
                info!(columns, "mobile layout unmounted");
            }
            _ => {}
        }
        self.viewport = viewport;
    }

    pub fn shutdown(&mut self) {
        self.mobile = None;
        self.modals.request_close();
    }

    pub fn open_modal(&mut self, modal: Modal) {
        if !self.modals.is_open(modal) {
            self.modal_scroll = 0;
        }
        self.modals.open(modal);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if let Some(modal) = self.modals.active() {
            self.on_modal_key(modal, key.code);
            return;
        }

        match key.code {
            KeyCode::Char('a') => return self.open_modal(Modal::About),
            KeyCode::Char('s') => return self.open_modal(Modal::Showcase),
            _ => {}
        }

        match self.viewport {
            Viewport::Desktop => self.on_desktop_key(key.code),
            Viewport::Mobile => self.on_mobile_key(key.code),
        }
    }

    fn on_modal_key(&mut self, modal: Modal, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('x') => {
                self.modals.request_close();
            }
            KeyCode::Char('a') => self.open_modal(Modal::About),
            KeyCode::Char('s') => self.open_modal(Modal::Showcase),
            KeyCode::Char('v') if modal == Modal::Showcase => {
                self.showcase_view = self.showcase_view.toggled();
                debug!(view = self.showcase_view.label(), "showcase view toggled");
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.modal_scroll = self.modal_scroll.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.modal_scroll = self.modal_scroll.saturating_add(1)
            }
            _ => {}
        }
    }

    /// The node keyboard focus sits on: the hovered one, else the displayed one.
    pub fn focused(&self) -> Option<RoleId> {
        self.desktop
            .hovered()
            .or(self.desktop.displayed())
            .or(self.grid.first().map(|r| r.id))
    }

    fn on_desktop_key(&mut self, code: KeyCode) {
        let direction = match code {
            KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
            KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
            _ => None,
        };
        if let Some(direction) = direction {
            let Some(current) = self.focused() else {
                return;
            };
            // the first key press only reveals the focus ring
            let target = if self.desktop.hovered().is_none() {
                Some(current)
            } else {
                self.grid.step(current, direction).map(|r| r.id)
            };
            if let Some(id) = target {
                self.desktop.hover(id);
            }
            return;
        }

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.focused() {
                    self.desktop.click(id);
                }
            }
            KeyCode::Esc => self.desktop.leave(),
            _ => {}
        }
    }

    fn on_mobile_key(&mut self, code: KeyCode) {
        let Some(mobile) = self.mobile.as_mut() else {
            return;
        };
        if mobile.drawer().is_some() {
            match code {
                KeyCode::Esc | KeyCode::Char('x') => {
                    mobile.close(CloseReason::CloseButton);
                }
                KeyCode::Up | KeyCode::Char('k') => mobile.scroll_drawer(-1),
                KeyCode::Down | KeyCode::Char('j') => mobile.scroll_drawer(1),
                _ => {}
            }
            return;
        }
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                mobile.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                mobile.move_cursor(1);
            }
            KeyCode::PageUp => {
                mobile.scroll_list(-5);
            }
            KeyCode::PageDown => {
                mobile.scroll_list(5);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = mobile.cursor_role() {
                    mobile.tap(id);
                }
            }
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, event: MouseEvent) {
        let (x, y) = (event.column, event.row);

        if self.modals.active().is_some() {
            match event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let on_close = self.hits.modal_close.is_some_and(|r| contains(r, x, y));
                    let outside = self.hits.modal.is_some_and(|r| !contains(r, x, y));
                    if on_close || outside {
                        self.modals.request_close();
                    }
                }
                MouseEventKind::ScrollUp => self.modal_scroll = self.modal_scroll.saturating_sub(1),
                MouseEventKind::ScrollDown => {
                    self.modal_scroll = self.modal_scroll.saturating_add(1)
                }
                _ => {}
            }
            return;
        }

        match self.viewport {
            Viewport::Desktop => self.on_desktop_mouse(event.kind, x, y),
            Viewport::Mobile => self.on_mobile_mouse(event.kind, x, y),
        }
    }

    fn on_desktop_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let target = self.hits.node_at(x, y);
        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => match target {
                Some(id) => self.desktop.hover(id),
                None if self.desktop.hovered().is_some() => self.desktop.leave(),
                None => {}
            },
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = target {
                    self.desktop.hover(id);
                    self.desktop.click(id);
                }
            }
            _ => {}
        }
    }

    fn on_mobile_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let hits = &self.hits;
        let Some(mobile) = self.mobile.as_mut() else {
            return;
        };

        if mobile.drawer().is_some() {
            match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let reason = if hits.drawer_close.is_some_and(|r| contains(r, x, y)) {
                        Some(CloseReason::CloseButton)
                    } else if hits.drawer_handle.is_some_and(|r| contains(r, x, y)) {
                        Some(CloseReason::HandleBar)
                    } else if hits.drawer.is_some_and(|r| !contains(r, x, y)) {
                        Some(CloseReason::Backdrop)
                    } else {
                        None
                    };
                    if let Some(reason) = reason {
                        mobile.close(reason);
                    }
                }
                MouseEventKind::ScrollUp => mobile.scroll_drawer(-1),
                MouseEventKind::ScrollDown => mobile.scroll_drawer(1),
                _ => {}
            }
            return;
        }

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = hits.list_row_at(x, y) {
                    mobile.tap(id);
                }
            }
            MouseEventKind::ScrollUp => {
                mobile.scroll_list(-1);
            }
            MouseEventKind::ScrollDown => {
                mobile.scroll_list(1);
            }
            _ => {}
        }
    }
}
