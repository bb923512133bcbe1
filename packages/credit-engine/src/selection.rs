//! Selection state for the two layouts.
//!
//! Desktop keeps a displayed role that follows the pointer until a node is
//! clicked, which locks it in place. Mobile has no lock: tapping a row opens
//! a drawer, closing it goes back to "nothing selected".

use crate::catalog::{Catalog, Category, RoleId};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Idle,
    Hovered,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopSelection {
    displayed: Option<RoleId>,
    hovered: Option<RoleId>,
    locked: Option<RoleId>,
}

impl DesktopSelection {
    pub fn new(initial: Option<RoleId>) -> Self {
        Self {
            displayed: initial,
            hovered: None,
            locked: None,
        }
    }

    /// Starts with the first catalog entry displayed and nothing locked.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.first().map(|r| r.id))
    }

    pub fn displayed(&self) -> Option<RoleId> {
        self.locked.or(self.displayed)
    }

    pub fn hovered(&self) -> Option<RoleId> {
        self.hovered
    }

    pub fn locked(&self) -> Option<RoleId> {
        self.locked
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    pub fn hover(&mut self, id: RoleId) {
        if self.hovered == Some(id) {
            return;
        }
        self.hovered = Some(id);
        if self.locked.is_none() {
            self.displayed = Some(id);
            debug!(role = %id, "hover preview");
        }
    }

    /// Pointer left the node it was over. What is displayed stays put.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn click(&mut self, id: RoleId) {
        if self.locked == Some(id) {
            self.locked = None;
            if let Some(hovered) = self.hovered {
                self.displayed = Some(hovered);
            }
            debug!(role = %id, displayed = ?self.displayed, "selection unlocked");
        } else {
            self.locked = Some(id);
            self.displayed = Some(id);
            debug!(role = %id, "selection locked");
        }
    }

    pub fn node_state(&self, id: RoleId) -> NodeState {
        if self.displayed() == Some(id) || self.locked == Some(id) {
            NodeState::Active
        } else if self.hovered == Some(id) {
            NodeState::Hovered
        } else {
            NodeState::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    HandleBar,
}

#[derive(Debug)]
pub struct Drawer {
    role: RoleId,
    scroll: u16,
    _lock: ScrollLockGuard,
}

impl Drawer {
    pub fn role(&self) -> RoleId {
        self.role
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

/// One row of the grouped mobile list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry {
    Header(Category),
    Role(RoleId),
}

#[derive(Debug)]
pub struct MobileSelection {
    lock: ScrollLock,
    entries: Vec<ListEntry>,
    cursor: usize,
    offset: u16,
    drawer: Option<Drawer>,
}

impl MobileSelection {
    pub fn new(catalog: &Catalog, lock: ScrollLock) -> Self {
        let mut entries = Vec::with_capacity(catalog.len() + Category::ALL.len());
        for category in Category::ALL {
            entries.push(ListEntry::Header(category));
            entries.extend(catalog.in_category(category).map(|r| ListEntry::Role(r.id)));
        }
        let cursor = entries
            .iter()
            .position(|e| matches!(e, ListEntry::Role(_)))
            .unwrap_or(0);
        Self {
            lock,
            entries,
            cursor,
            offset: 0,
            drawer: None,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_role(&self) -> Option<RoleId> {
        match self.entries.get(self.cursor) {
            Some(ListEntry::Role(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn list_offset(&self) -> u16 {
        self.offset
    }

    pub fn drawer(&self) -> Option<&Drawer> {
        self.drawer.as_ref()
    }

    pub fn selected(&self) -> Option<RoleId> {
        self.drawer.as_ref().map(|d| d.role)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn tap(&mut self, id: RoleId) {
        if let Some(pos) = self.entries.iter().position(|e| *e == ListEntry::Role(id)) {
            self.cursor = pos;
        }
        match self.drawer.as_mut() {
            Some(drawer) => {
                drawer.role = id;
                drawer.scroll = 0;
            }
            None => {
                self.drawer = Some(Drawer {
                    role: id,
                    scroll: 0,
                    _lock: self.lock.acquire(),
                });
            }
        }
        debug!(role = %id, "drawer opened");
    }

    /// Returns false when no drawer was open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match self.drawer.take() {
            Some(drawer) => {
                debug!(role = %drawer.role, ?reason, "drawer closed");
                true
            }
            None => false,
        }
    }

    /// Moves the list cursor to the next role row. Ignored while the drawer
    /// holds the scroll lock.
    pub fn move_cursor(&mut self, delta: i32) -> bool {
        if self.is_scroll_locked() {
            return false;
        }
        let mut pos = self.cursor as i64;
        let step = delta.signum() as i64;
        let mut remaining = delta.unsigned_abs();
        while remaining > 0 {
            let next = pos + step;
            if next < 0 || next >= self.entries.len() as i64 {
                break;
            }
            pos = next;
            if matches!(self.entries[pos as usize], ListEntry::Role(_)) {
                remaining -= 1;
                self.cursor = pos as usize;
            }
        }
        true
    }

    pub fn scroll_list(&mut self, delta: i32) -> bool {
        if self.is_scroll_locked() {
            return false;
        }
        self.offset = apply_delta(self.offset, delta);
        true
    }

    /// Keeps the cursor row inside a viewport of `height` rows.
    pub fn follow_cursor(&mut self, height: u16) {
        if self.is_scroll_locked() || height == 0 {
            return;
        }
        let cursor = self.cursor as u16;
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }
    }

    pub fn scroll_drawer(&mut self, delta: i32) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.scroll = apply_delta(drawer.scroll, delta);
        }
    }
}

fn apply_delta(value: u16, delta: i32) -> u16 {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs() as u16)
    } else {
        value.saturating_add(delta as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOFTWARE: RoleId = RoleId::new("software");
    const METHODOLOGY: RoleId = RoleId::new("methodology");
    const VALIDATION: RoleId = RoleId::new("validation");

    fn desktop() -> DesktopSelection {
        DesktopSelection::for_catalog(Catalog::builtin())
    }

    #[test]
    fn test_initial_desktop_state() {
        let s = desktop();
        assert_eq!(s.displayed(), Some(RoleId::new("conceptualization")));
        assert_eq!(s.locked(), None);
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn test_hover_follows_pointer_while_unlocked() {
        let mut s = desktop();
        s.hover(METHODOLOGY);
        assert_eq!(s.displayed(), Some(METHODOLOGY));
        s.leave();
        assert_eq!(s.displayed(), Some(METHODOLOGY));
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn test_click_same_node_twice_unlocks() {
        let mut s = desktop();
        s.click(SOFTWARE);
        assert_eq!(s.locked(), Some(SOFTWARE));
        s.click(SOFTWARE);
        assert_eq!(s.locked(), None);
    }

    #[test]
    fn test_click_other_node_moves_lock_directly() {
        let mut s = desktop();
        s.click(SOFTWARE);
        s.click(METHODOLOGY);
        assert_eq!(s.locked(), Some(METHODOLOGY));
        assert_eq!(s.displayed(), Some(METHODOLOGY));
    }

    #[test]
    fn test_hover_is_suppressed_while_locked() {
        let mut s = desktop();
        s.click(SOFTWARE);
        for id in Catalog::builtin().roles().iter().map(|r| r.id) {
            s.hover(id);
            assert_eq!(s.displayed(), Some(SOFTWARE));
        }
    }

    #[test]
    fn test_unlock_shows_hovered_role_if_pointer_on_a_node() {
        let mut s = desktop();
        s.hover(SOFTWARE);
        s.click(SOFTWARE);
        s.hover(VALIDATION);
        assert_eq!(s.displayed(), Some(SOFTWARE));
        s.click(SOFTWARE);
        assert_eq!(s.locked(), None);
        assert_eq!(s.displayed(), Some(VALIDATION));
    }

    #[test]
    fn test_unlock_keeps_last_role_when_pointer_left() {
        let mut s = desktop();
        s.hover(SOFTWARE);
        s.click(SOFTWARE);
        s.leave();
        s.click(SOFTWARE);
        assert_eq!(s.locked(), None);
        assert_eq!(s.displayed(), Some(SOFTWARE));
    }

    #[test]
    fn test_node_states() {
        let mut s = desktop();
        s.click(SOFTWARE);
        s.hover(VALIDATION);
        assert_eq!(s.node_state(SOFTWARE), NodeState::Active);
        assert_eq!(s.node_state(VALIDATION), NodeState::Hovered);
        assert_eq!(s.node_state(METHODOLOGY), NodeState::Idle);
    }

    #[test]
    fn test_mobile_starts_closed() {
        let m = MobileSelection::new(Catalog::builtin(), ScrollLock::new());
        assert_eq!(m.selected(), None);
        assert!(!m.is_scroll_locked());
        assert_eq!(m.cursor_role(), Some(RoleId::new("conceptualization")));
        assert_eq!(m.entries().len(), 18);
    }

    #[test]
    fn test_drawer_lock_released_once_per_close_path() {
        for reason in [CloseReason::CloseButton, CloseReason::Backdrop] {
            let lock = ScrollLock::new();
            let mut m = MobileSelection::new(Catalog::builtin(), lock.clone());
            m.tap(SOFTWARE);
            assert!(lock.is_locked());
            assert_eq!(m.selected(), Some(SOFTWARE));

            assert!(m.close(reason));
            assert!(!lock.is_locked());
            assert_eq!(lock.releases(), 1);
            assert_eq!(m.selected(), None);

            assert!(!m.close(reason));
            assert_eq!(lock.releases(), 1);
        }
    }

    #[test]
    fn test_tapping_while_open_keeps_one_lock() {
        let lock = ScrollLock::new();
        let mut m = MobileSelection::new(Catalog::builtin(), lock.clone());
        m.tap(SOFTWARE);
        m.tap(VALIDATION);
        assert_eq!(m.selected(), Some(VALIDATION));
        assert_eq!(lock.acquisitions(), 1);
        m.close(CloseReason::HandleBar);
        assert_eq!(lock.releases(), 1);
    }

    #[test]
    fn test_dropping_view_releases_lock() {
        let lock = ScrollLock::new();
        let mut m = MobileSelection::new(Catalog::builtin(), lock.clone());
        m.tap(SOFTWARE);
        drop(m);
        assert!(!lock.is_locked());
        assert_eq!(lock.releases(), 1);
    }

    #[test]
    fn test_list_frozen_while_drawer_open() {
        let mut m = MobileSelection::new(Catalog::builtin(), ScrollLock::new());
        assert!(m.scroll_list(3));
        assert_eq!(m.list_offset(), 3);
        m.tap(SOFTWARE);
        assert!(!m.scroll_list(2));
        assert!(!m.move_cursor(1));
        assert_eq!(m.list_offset(), 3);
        m.scroll_drawer(2);
        assert_eq!(m.drawer().unwrap().scroll(), 2);
        m.close(CloseReason::Backdrop);
        assert!(m.scroll_list(-10));
        assert_eq!(m.list_offset(), 0);
    }

    #[test]
    fn test_cursor_skips_category_headers() {
        let mut m = MobileSelection::new(Catalog::builtin(), ScrollLock::new());
        m.move_cursor(4);
        assert_eq!(m.cursor_role(), Some(RoleId::new("data-curation")));
        m.move_cursor(-1);
        assert_eq!(m.cursor_role(), Some(RoleId::new("supervision")));
        m.move_cursor(-10);
        assert_eq!(m.cursor_role(), Some(RoleId::new("conceptualization")));
    }
}
