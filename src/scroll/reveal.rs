use crate::config::RevealConfig;
use crate::host::{Element, Visibility};

/// Position of each target among earlier targets sharing its parent.
///
/// `parents` lists each target's parent in document order; targets without a
/// parent get index 0.
pub fn stagger_indices<K: PartialEq>(parents: impl IntoIterator<Item = Option<K>>) -> Vec<usize> {
    let mut seen: Vec<(K, usize)> = Vec::new();
    parents
        .into_iter()
        .map(|parent| {
            let Some(parent) = parent else {
                return 0;
            };
            match seen.iter_mut().find(|(key, _)| *key == parent) {
                Some((_, count)) => {
                    let index = *count;
                    *count += 1;
                    index
                }
                None => {
                    seen.push((parent, 1));
                    0
                }
            }
        })
        .collect()
}

/// CSS `transition-delay` for a target, or `None` for the first sibling
pub fn stagger_delay(index: usize, step_s: f64) -> Option<String> {
    if index == 0 {
        return None;
    }
    let millis = (index as f64 * step_s * 1000.0).round();
    Some(format!("{}ms", millis))
}

/// An element that fades in the first time it scrolls into view
pub struct RevealTarget<E: Element> {
    element: E,
    threshold: f64,
    revealed_class: String,
    revealed: bool,
}

impl<E: Element> RevealTarget<E> {
    /// Hide the element and apply its stagger delay
    pub fn new(element: E, index: usize, config: &RevealConfig) -> Self {
        element.add_class(&config.hidden_class);
        if let Some(delay) = stagger_delay(index, config.stagger_step_s) {
            element.set_style("transition-delay", &delay);
        }
        Self {
            element,
            threshold: config.threshold,
            revealed_class: config.revealed_class.clone(),
            revealed: false,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` exactly once: when the element is revealed and should
    /// no longer be observed.
    pub fn on_visibility(&mut self, visibility: Visibility) -> bool {
        if self.revealed || !visibility.reaches(self.threshold) {
            return false;
        }
        self.revealed = true;
        self.element.add_class(&self.revealed_class);
        true
    }
}
