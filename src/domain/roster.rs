use crate::domain::model::{Employee, Removal};
use serde::{Deserialize, Serialize};

/// Ordered employee collection owned by a session.
///
/// Order is insertion order until one of the sort methods is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, position: impl Into<String>, tenure: f64) {
        self.employees.push(Employee::new(name, position, tenure));
    }

    /// Removes the first employee whose name matches exactly.
    ///
    /// Returns `None` and leaves the roster untouched when nobody matches.
    pub fn remove(&mut self, name: &str) -> Option<Removal> {
        let index = self.employees.iter().position(|e| e.name == name)?;
        let employee = self.employees.remove(index);
        Some(Removal { index, employee })
    }

    /// Stable, case-insensitive sort by name.
    pub fn sort_by_name(&mut self) {
        self.employees.sort_by_cached_key(|e| e.name.to_lowercase());
    }

    /// Stable, case-insensitive sort by position.
    pub fn sort_by_position(&mut self) {
        self.employees.sort_by_cached_key(|e| e.position.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> Roster {
        let mut roster = Roster::new();
        roster.add("Charlie", "QA", 1.0);
        roster.add("alice", "Dev", 2.0);
        roster.add("Bob", "dev", 4.0);
        roster
    }

    #[test]
    fn test_add_keeps_duplicates() {
        let mut roster = Roster::new();
        for _ in 0..5 {
            roster.add("Same", "Dev", 1.0);
        }
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn test_add_accepts_unvalidated_values() {
        let mut roster = Roster::new();
        roster.add("", "", -3.0);
        assert_eq!(roster.as_slice(), &[Employee::new("", "", -3.0)]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut roster = Roster::new();
        roster.add("A", "Dev", 1.0);
        roster.add("B", "Dev", 2.0);
        roster.add("A", "QA", 3.0);
        roster.add("C", "QA", 4.0);

        let removal = roster.remove("A").unwrap();

        assert_eq!(removal.index, 0);
        assert_eq!(removal.employee, Employee::new("A", "Dev", 1.0));
        assert_eq!(names(&roster), vec!["B", "A", "C"]);
        assert_eq!(roster.as_slice()[1].position, "QA");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut roster = sample();
        let before = roster.clone();

        assert!(roster.remove("Nobody").is_none());
        assert_eq!(roster, before);
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut roster = sample();
        assert!(roster.remove("ALICE").is_none());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut roster = sample();
        roster.sort_by_name();
        assert_eq!(names(&roster), vec!["alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_sort_by_name_idempotent() {
        let mut once = sample();
        once.sort_by_name();
        let mut twice = once.clone();
        twice.sort_by_name();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_name_stable() {
        let mut roster = Roster::new();
        roster.add("anna", "first", 1.0);
        roster.add("Zed", "middle", 1.0);
        roster.add("ANNA", "second", 1.0);
        roster.add("Anna", "third", 1.0);

        roster.sort_by_name();

        let positions: Vec<&str> = roster.iter().map(|e| e.position.as_str()).collect();
        assert_eq!(positions, vec!["first", "second", "third", "middle"]);
    }

    #[test]
    fn test_sort_by_position_stable() {
        let mut roster = sample();
        roster.sort_by_position();
        // "Dev" and "dev" compare equal and keep insertion order
        assert_eq!(names(&roster), vec!["alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_sort_by_name_unicode() {
        let mut roster = Roster::new();
        roster.add("Борисов", "Dev", 1.0);
        roster.add("андреев", "Dev", 1.0);
        roster.sort_by_name();
        assert_eq!(names(&roster), vec!["андреев", "Борисов"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut roster = Roster::new();
        roster.add("A", "Dev", 2.0);
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"[{"fullname":"A","position":"Dev","experience":2.0}]"#);
    }
}
