//! Mobile navigation toggle.

/// Where a click landed, relative to the navigation elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The `.nav-toggle` button
    Toggle,
    /// A `.nav-link` inside the menu
    Link,
    /// Inside `.nav-menu` but not on a link
    Menu,
    /// Anywhere else on the page
    Outside,
}

/// Open state shared by `.nav-toggle` and `.nav-menu`; both carry `active` together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    active: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active
    }

    pub fn click(&mut self, target: NavTarget) {
        match target {
            NavTarget::Toggle => self.active = !self.active,
            NavTarget::Link | NavTarget::Outside => self.close(),
            NavTarget::Menu => {}
        }
    }

    pub fn close(&mut self) {
        self.active = false;
    }
}
