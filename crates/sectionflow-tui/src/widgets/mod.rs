mod progress;
mod section;
mod status_bar;

pub use progress::ProgressWidget;
pub use section::SectionWidget;
pub use status_bar::StatusBarWidget;
