// The two presentation seams the controller drives.
//
// `ScenePresenter` and `AudioPresenter` are the only way the controller
// reaches the scene and audio models, so tests can swap in recording fakes
// and a windowed front end could wrap a real renderer or audio backend.
// Both receive the state by reference and never feed anything back into
// derivation.
//
// See also: `controller.rs` for the call order, `vibe_island_scene::Scene`
// and `vibe_island_audio::AudioEngine` for the shipped implementations.

use vibe_island_audio::AudioEngine;
use vibe_island_mood::MoodState;
use vibe_island_scene::Scene;

pub trait ScenePresenter {
    /// Rebuild every mood-dependent layer. Must be idempotent for a given
    /// state.
    fn build_world(&mut self, state: &MoodState);

    /// Per-frame tick. Reads the level and weather only.
    fn update(&mut self, dt: f32, state: &MoodState);

    /// One-line description of what is on screen.
    fn summary(&self) -> String;
}

pub trait AudioPresenter {
    /// Start the audio graph. Calling again is a no-op.
    fn init_audio(&mut self);

    /// Retarget for a new state. Ignored before `init_audio`.
    fn update_audio(&mut self, state: &MoodState);

    /// Flip mute; returns the new flag.
    fn toggle_mute(&mut self) -> bool;

    fn advance(&mut self, dt: f32);

    fn summary(&self) -> String;
}

impl ScenePresenter for Scene {
    fn build_world(&mut self, state: &MoodState) {
        Scene::build_world(self, state);
    }

    fn update(&mut self, dt: f32, state: &MoodState) {
        Scene::update(self, dt, state);
    }

    fn summary(&self) -> String {
        self.stats().to_string()
    }
}

impl AudioPresenter for AudioEngine {
    fn init_audio(&mut self) {
        AudioEngine::init_audio(self);
    }

    fn update_audio(&mut self, state: &MoodState) {
        AudioEngine::update_audio(self, state);
    }

    fn toggle_mute(&mut self) -> bool {
        AudioEngine::toggle_mute(self)
    }

    fn advance(&mut self, dt: f32) {
        AudioEngine::advance(self, dt);
    }

    fn summary(&self) -> String {
        self.snapshot().to_string()
    }
}
