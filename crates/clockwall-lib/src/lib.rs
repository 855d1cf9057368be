//! Model of a wall of analog clocks, each showing one time zone, all derived from a
//! single main time. The types here know nothing about the GUI toolkit: the front end
//! paints [`angle_clock::ClockGeometry`] and forwards pointer events.

pub mod angle_clock;
pub mod clock_wall;
pub mod clock_widget;
pub mod config;
pub mod error;
pub mod main_instant;
pub mod main_window;
pub mod time_picker;
pub mod wall_time;
pub mod zones;

pub use error::ClockError;
