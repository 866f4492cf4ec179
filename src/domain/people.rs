use serde::{Deserialize, Serialize};

/// Ordered display labels for the people sharing the bill.
///
/// Names are cosmetic only: they never influence arithmetic and are
/// reattached to results after computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct People {
    names: Vec<String>,
}

impl People {
    pub fn new(count: usize) -> Self {
        Self {
            names: (1..=count).map(default_label).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Renames one person; a blank name restores the default label.
    pub fn rename(&mut self, index: usize, name: &str) {
        if let Some(slot) = self.names.get_mut(index) {
            let trimmed = name.trim();
            *slot = if trimmed.is_empty() {
                default_label(index + 1)
            } else {
                trimmed.to_string()
            };
        }
    }

    /// Grows or shrinks to `count`, keeping existing names where possible.
    pub fn resize(&mut self, count: usize) {
        if count < self.names.len() {
            self.names.truncate(count);
        } else {
            for n in self.names.len() + 1..=count {
                self.names.push(default_label(n));
            }
        }
    }
}

fn default_label(n: usize) -> String {
    format!("Person {n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_numbered_labels() {
        let people = People::new(3);
        assert_eq!(people.names(), ["Person 1", "Person 2", "Person 3"]);
    }

    #[test]
    fn blank_rename_restores_the_default_label() {
        let mut people = People::new(2);
        people.rename(0, "Alice");
        people.rename(1, "   ");
        assert_eq!(people.names(), ["Alice", "Person 2"]);
    }

    #[test]
    fn resize_keeps_existing_names() {
        let mut people = People::new(2);
        people.rename(1, "Bob");
        people.resize(4);
        assert_eq!(people.names(), ["Person 1", "Bob", "Person 3", "Person 4"]);
        people.resize(1);
        assert_eq!(people.names(), ["Person 1"]);
    }

    #[test]
    fn rename_past_the_end_is_ignored() {
        let mut people = People::new(1);
        people.rename(5, "Ghost");
        assert_eq!(people.names(), ["Person 1"]);
    }
}
