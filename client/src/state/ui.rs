//! Local page chrome state (tabs, sidebar visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of conversation state so the
//! page layout can evolve independently of the chat model.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level tabs on the index page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Assistant chat with the related products sidebar.
    #[default]
    AiCompare,
    Trending,
    Categories,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::AiCompare, Tab::Trending, Tab::Categories];

    pub fn label(self) -> &'static str {
        match self {
            Tab::AiCompare => "AI Compare",
            Tab::Trending => "Trending",
            Tab::Categories => "Categories",
        }
    }

    /// Placeholder body for tabs that have no content yet.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Tab::AiCompare => None,
            Tab::Trending => Some("Popular comparisons will appear here."),
            Tab::Categories => Some("Product comparisons by category will appear here."),
        }
    }
}

/// UI state for the index page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    /// The related products sidebar appears after the first user message.
    pub show_sidebar: bool,
}

impl UiState {
    /// Show the sidebar. Repeated calls are no-ops.
    pub fn reveal_sidebar(&mut self) {
        self.show_sidebar = true;
    }
}
