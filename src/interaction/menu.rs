use crate::config::MenuConfig;
use crate::host::Element;

/// Hamburger toggle for the nav link list on narrow screens
pub struct MobileMenu<E: Element> {
    links: E,
    burger: E,
    open_class: String,
    active_class: String,
    open: bool,
}

impl<E: Element> MobileMenu<E> {
    /// Starts closed
    pub fn new(links: E, burger: E, config: &MenuConfig) -> Self {
        let menu = Self {
            links,
            burger,
            open_class: config.open_class.clone(),
            active_class: config.active_class.clone(),
            open: false,
        };
        menu.apply();
        menu
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Burger clicked
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.apply();
    }

    /// A link inside the list was clicked; always closes
    pub fn close(&mut self) {
        self.open = false;
        self.apply();
    }

    fn apply(&self) {
        self.links.set_class(&self.open_class, self.open);
        self.burger.set_class(&self.active_class, self.open);
    }
}
