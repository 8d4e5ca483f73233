//! Data models for timetable classes, tasks, events, and attendance stats.

pub mod attendance;
pub mod event;
pub mod timetable;
pub mod todo;

pub use attendance::{AttendanceSummary, SubjectAttendance};
pub use event::{CalendarEvent, DaySchedule, EventType};
pub use timetable::{ClassItem, ClassSelection};
pub use todo::{TodoFilter, TodoItem, TodoList};
