/// Presentation layer: egui panels and the two chart views.
pub mod panels;
pub mod plot;
