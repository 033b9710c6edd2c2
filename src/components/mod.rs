pub mod app;
pub mod time_display;
pub mod timer_widget;
