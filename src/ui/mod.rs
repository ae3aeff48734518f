pub mod app;
pub mod button;
pub mod fonts;
pub mod geometry;
pub mod scene;

pub use app::ToneButtonApp;
