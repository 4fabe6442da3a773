//! The user's chosen symptoms.

/// Insertion-ordered set of symptom names.
///
/// Iteration order is the order symptoms were added, which is also the order they are shown as
/// tokens and sent to the prediction service. Membership is exact-string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.items.iter().any(|s| s == symptom)
    }

    /// Adds `symptom` at the end. Returns `false` if it was already present.
    pub fn insert(&mut self, symptom: &str) -> bool {
        if self.contains(symptom) {
            return false;
        }
        self.items.push(symptom.to_string());
        true
    }

    /// Removes `symptom`, keeping the order of the rest. Returns `false` if it was absent.
    pub fn remove(&mut self, symptom: &str) -> bool {
        match self.items.iter().position(|s| s == symptom) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_follows_insertion_order() {
        let mut s = Selection::new();
        s.insert("Fever");
        s.insert("Cough");
        s.insert("Anxiety");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["Fever", "Cough", "Anxiety"]);
    }

    #[test]
    fn insert_twice_keeps_one_copy() {
        let mut s = Selection::new();
        assert!(s.insert("Fever"));
        assert!(!s.insert("Fever"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut s = Selection::new();
        s.insert("Fever");
        assert!(!s.remove("Cough"));
        assert_eq!(s.to_vec(), vec!["Fever".to_string()]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut s = Selection::new();
        s.insert("A");
        s.insert("B");
        s.insert("C");
        assert!(s.remove("B"));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["A", "C"]);
    }
}
