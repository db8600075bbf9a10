// egui-based UI

pub mod app;
pub mod preview;
pub mod toast;

pub use app::PlannerApp;
