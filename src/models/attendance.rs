//! Mocked attendance statistics for the dashboard.

use serde::{Deserialize, Serialize};

/// Attendance below this percentage is flagged as a warning.
pub const WARNING_THRESHOLD: u8 = 75;

/// Per-subject attendance figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectAttendance {
    pub name: String,
    /// Attendance percent, 0-100.
    pub attendance: u8,
}

impl SubjectAttendance {
    fn new(name: &str, attendance: u8) -> Self {
        Self {
            name: name.to_string(),
            attendance,
        }
    }

    /// Whether this subject is below the warning threshold.
    pub fn is_warning(&self) -> bool {
        self.attendance < WARNING_THRESHOLD
    }
}

/// Dashboard attendance summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub overall_attendance: u8,
    pub target_attendance: u8,
    pub classes_missed: u32,
    pub classes_to_attend: u32,
    pub subjects: Vec<SubjectAttendance>,
}

impl AttendanceSummary {
    /// Overall attendance as a progress fraction.
    pub fn overall_fraction(&self) -> f32 {
        f32::from(self.overall_attendance) / 100.0
    }
}

/// The fixed summary shown on the dashboard.
pub fn sample_summary() -> AttendanceSummary {
    AttendanceSummary {
        overall_attendance: 78,
        target_attendance: 85,
        classes_missed: 5,
        classes_to_attend: 12,
        subjects: vec![
            SubjectAttendance::new("CSE101", 65),
            SubjectAttendance::new("MATH204", 80),
            SubjectAttendance::new("PHY202", 85),
            SubjectAttendance::new("ENG207", 92),
            SubjectAttendance::new("ART101", 70),
        ],
    }
}

/// Subjects offered during onboarding (attendance sliders, focus selector).
pub fn subject_catalog() -> Vec<(String, String)> {
    [
        ("CSE101", "CSE101: Introduction to Computer Science"),
        ("MATH204", "MATH204: Calculus II"),
        ("PHY202", "PHY202: Physics for Engineers"),
        ("ENG207", "ENG207: Technical Writing"),
        ("ART101", "ART101: Introduction to Design"),
    ]
    .iter()
    .map(|(id, name)| (id.to_string(), name.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_threshold() {
        let summary = sample_summary();
        let warnings: Vec<&str> = summary
            .subjects
            .iter()
            .filter(|s| s.is_warning())
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(warnings, vec!["CSE101", "ART101"]);
    }

    #[test]
    fn test_overall_fraction() {
        let summary = sample_summary();
        assert!((summary.overall_fraction() - 0.78).abs() < f32::EPSILON);
    }
}
