//! Page stack with back/home semantics and search-box synchronization.
//!
//! DESIGN
//! ======
//! `history` holds every page left behind, in visit order, and never the
//! current page: a page is pushed only when navigating away from it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// The page currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Home,
    Search {
        query: String,
    },
    Category {
        category: String,
    },
}

/// Navigation controller state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: PageState,
    pub history: Vec<PageState>,
    /// Text shown in the header search box.
    pub search_text: String,
}

impl NavigationState {
    /// Push the current page onto history and show `next`.
    pub fn navigate_to(&mut self, next: PageState) {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
    }

    /// Reset to the home page with an empty history and search box.
    pub fn go_home(&mut self) {
        self.current = PageState::Home;
        self.history.clear();
        self.search_text.clear();
    }

    /// Return to the previous page; with no history this is `go_home`.
    ///
    /// Restoring a search page puts its query back in the search box and
    /// restoring home clears it. Restoring a category page leaves the box as is.
    pub fn go_back(&mut self) {
        let Some(previous) = self.history.pop() else {
            self.go_home();
            return;
        };
        match &previous {
            PageState::Search { query } => self.search_text.clone_from(query),
            PageState::Home => self.search_text.clear(),
            PageState::Category { .. } => {}
        }
        self.current = previous;
    }

    /// Search for `query`; a blank query resets navigation entirely.
    pub fn handle_search(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.go_home();
            return;
        }
        self.search_text = query.to_owned();
        self.navigate_to(PageState::Search { query: trimmed.to_owned() });
    }

    /// Open a category page and clear the search box.
    pub fn handle_category_select(&mut self, category: &str) {
        self.navigate_to(PageState::Category { category: category.to_owned() });
        self.search_text.clear();
    }

    /// Whether the header shows a back button.
    pub fn can_go_back(&self) -> bool {
        self.current != PageState::Home
    }
}
