pub mod controller;
pub mod flow;
pub mod prompts;
pub mod view;

pub use controller::{Direction, Outcome, Phase, WizardController};
pub use flow::run_wizard;
