// Data models for the weekly schedule

pub mod grid;
