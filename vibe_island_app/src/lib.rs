// vibe_island_app: controller and terminal front end for Vibe Island.
//
// Wires the pure mood engine to the scene and audio models. The controller
// owns the one live `MoodState`; presenters see it by reference after every
// change. The `vibe` binary (`main.rs`) stands in for the UI: each CLI
// action is one input event.
//
// Module overview:
// - `presenter.rs`:  ScenePresenter / AudioPresenter traits and their impls
//                    for `Scene` and `AudioEngine`.
// - `controller.rs`: MoodController, input routing and the frame loop.
// - `report.rs`:     Human and JSON renderings of a state change.

pub mod controller;
pub mod presenter;
pub mod report;

pub use controller::{MoodController, StandardController};
pub use presenter::{AudioPresenter, ScenePresenter};
pub use report::Report;
