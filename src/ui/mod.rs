pub mod style;
pub mod widgets;
