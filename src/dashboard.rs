//! Dashboard shell state: sidebar visibility and the active navigation
//! section. The section can be owned locally or backed by a cell the
//! caller shares with other views; both go through the same accessors.

use std::sync::{Arc, Mutex};

/// Below this viewport width navigation closes the sidebar.
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const DEFAULT_SECTION: &str = "home";

/// Backing store for the active section, chosen once at construction.
#[derive(Clone, Debug)]
pub enum SectionStore {
    Local(String),
    Shared(Arc<Mutex<String>>),
}

impl SectionStore {
    fn get(&self) -> String {
        match self {
            SectionStore::Local(section) => section.clone(),
            SectionStore::Shared(cell) => cell.lock().expect("section cell poisoned").clone(),
        }
    }

    fn set(&mut self, section: String) {
        match self {
            SectionStore::Local(current) => *current = section,
            SectionStore::Shared(cell) => {
                *cell.lock().expect("section cell poisoned") = section;
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct DashboardShell {
    pub sidebar_open: bool,
    section: SectionStore,
}

impl Default for DashboardShell {
    fn default() -> Self {
        DashboardShell::new()
    }
}

impl DashboardShell {
    /// Uncontrolled shell: the active section lives in the shell itself.
    pub fn new() -> DashboardShell {
        DashboardShell {
            sidebar_open: false,
            section: SectionStore::Local(DEFAULT_SECTION.to_string()),
        }
    }

    /// Controlled shell: the active section lives in a cell the caller
    /// owns and may read or write from outside.
    #[allow(dead_code)]
    pub fn controlled(section: Arc<Mutex<String>>) -> DashboardShell {
        DashboardShell {
            sidebar_open: false,
            section: SectionStore::Shared(section),
        }
    }

    pub fn active_section(&self) -> String {
        self.section.get()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Switches section; on narrow viewports the sidebar also closes so
    /// the content is not left covered.
    pub fn handle_navigate(&mut self, section: &str, viewport_width: u32) {
        self.section.set(section.to_string());
        if viewport_width < MOBILE_BREAKPOINT {
            self.sidebar_open = false;
        }
    }
}
