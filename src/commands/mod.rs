pub mod calendars;
pub mod refresh;
pub mod seed;
pub mod select;
pub mod show;
