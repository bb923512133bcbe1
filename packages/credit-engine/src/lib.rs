pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod grid;
pub mod icons;
pub mod modal;
pub mod scroll_lock;
pub mod selection;
pub mod theme;

pub use catalog::{Catalog, Category, ROLE_COUNT, Role, RoleId};
pub use config::{IconStyle, LayoutMode, ViewerConfig, Viewport, load_config};
pub use detail::{DetailSection, DetailVariant, DetailView};
pub use error::{CatalogError, ConfigError, LayoutError};
pub use grid::{Bounds, Direction, GridLayout};
pub use icons::{Glyph, GlyphSize, IconSet, Stroke};
pub use modal::{Modal, ModalState};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use selection::{CloseReason, DesktopSelection, ListEntry, MobileSelection, NodeState};
pub use theme::{Swatch, Theme, theme};
