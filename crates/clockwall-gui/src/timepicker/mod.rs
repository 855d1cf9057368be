// The "select a time" window: an editable clock face, an AM/PM switch and the
// Submit/Cancel buttons. The state lives in `clockwall_lib::time_picker::TimePicker`.

mod popup;

pub use popup::show_time_picker;
