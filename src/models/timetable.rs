//! Class records produced by the simulated timetable analysis.

use serde::{Deserialize, Serialize};

/// One class slot extracted from a timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassItem {
    pub id: String,
    pub day: String,
    pub time: String,
    pub subject: String,
    pub room: String,
    pub is_elective: bool,
}

impl ClassItem {
    fn new(id: &str, day: &str, time: &str, subject: &str, room: &str, is_elective: bool) -> Self {
        Self {
            id: id.to_string(),
            day: day.to_string(),
            time: time.to_string(),
            subject: subject.to_string(),
            room: room.to_string(),
            is_elective,
        }
    }
}

/// The fixed record set the simulated analysis always produces.
pub fn sample_timetable() -> Vec<ClassItem> {
    vec![
        ClassItem::new(
            "1",
            "Monday",
            "9:00 AM - 10:30 AM",
            "CSE101: Introduction to Computer Science",
            "Room 302",
            false,
        ),
        ClassItem::new("2", "Monday", "11:00 AM - 12:30 PM", "MATH204: Calculus II", "Room 201", false),
        ClassItem::new(
            "3",
            "Tuesday",
            "9:00 AM - 10:30 AM",
            "PHY202: Physics for Engineers",
            "Lab 101",
            false,
        ),
        ClassItem::new(
            "4",
            "Tuesday",
            "2:00 PM - 3:30 PM",
            "ENG207: Technical Writing",
            "Room 405",
            true,
        ),
        ClassItem::new(
            "5",
            "Wednesday",
            "9:00 AM - 10:30 AM",
            "CSE101: Introduction to Computer Science",
            "Room 302",
            false,
        ),
        ClassItem::new(
            "6",
            "Wednesday",
            "11:00 AM - 12:30 PM",
            "MATH204: Calculus II",
            "Room 201",
            false,
        ),
        ClassItem::new(
            "7",
            "Thursday",
            "9:00 AM - 10:30 AM",
            "PHY202: Physics for Engineers",
            "Lab 101",
            false,
        ),
        ClassItem::new(
            "8",
            "Friday",
            "2:00 PM - 3:30 PM",
            "ART101: Introduction to Design",
            "Studio 3",
            true,
        ),
    ]
}

/// Ordered selection map keyed by class id.
///
/// Iteration order matches the order the classes were inserted in, so the
/// review list renders in a stable order.
#[derive(Debug, Clone, Default)]
pub struct ClassSelection {
    entries: Vec<(String, bool)>,
}

impl ClassSelection {
    /// Build a selection with every class marked selected.
    pub fn select_all(classes: &[ClassItem]) -> Self {
        Self {
            entries: classes.iter().map(|c| (c.id.clone(), true)).collect(),
        }
    }

    /// Flip the flag for `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == id) {
            entry.1 = !entry.1;
        }
    }

    /// Whether `id` is currently selected. Unknown ids are unselected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, selected)| *selected)
            .unwrap_or(false)
    }

    /// Ids of selected classes, in insertion order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_timetable_shape() {
        let classes = sample_timetable();
        assert_eq!(classes.len(), 8);
        assert_eq!(classes.iter().filter(|c| c.is_elective).count(), 2);
        assert_eq!(classes[0].subject, "CSE101: Introduction to Computer Science");
    }

    #[test]
    fn test_select_all_marks_everything() {
        let classes = sample_timetable();
        let selection = ClassSelection::select_all(&classes);

        assert_eq!(selection.len(), classes.len());
        for class in &classes {
            assert!(selection.is_selected(&class.id));
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let classes = sample_timetable();
        let mut selection = ClassSelection::select_all(&classes);

        selection.toggle("3");
        assert!(!selection.is_selected("3"));
        selection.toggle("3");
        assert!(selection.is_selected("3"));
    }

    #[test]
    fn test_toggle_affects_one_entry() {
        let classes = sample_timetable();
        let mut selection = ClassSelection::select_all(&classes);

        selection.toggle("4");
        let selected = selection.selected_ids();
        assert_eq!(selected.len(), classes.len() - 1);
        assert!(!selected.contains(&"4".to_string()));
    }

    #[test]
    fn test_selected_ids_preserve_order() {
        let classes = sample_timetable();
        let mut selection = ClassSelection::select_all(&classes);
        selection.toggle("2");
        selection.toggle("7");

        assert_eq!(selection.selected_ids(), vec!["1", "3", "4", "5", "6", "8"]);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut selection = ClassSelection::select_all(&sample_timetable());
        selection.toggle("nope");
        assert!(!selection.is_selected("nope"));
        assert_eq!(selection.selected_ids().len(), 8);
    }
}
