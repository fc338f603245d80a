//! Vitals TUI — a terminal health metrics screen.
//!
//! One screen backed by four independent store queries (step count, dietary
//! protein, workouts, sleep analysis). Queries run concurrently on a
//! background worker; the render loop drains typed responses, so every
//! state write lands on the UI thread.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
pub mod worker;
