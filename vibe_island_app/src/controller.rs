// The mood controller: owner of the single live `MoodState`.
//
// Every input goes through `handle()`:
// 1. start audio if this is the first input (sound needs a user gesture),
// 2. derive the new state from the input and the current state,
// 3. replace the current state wholesale,
// 4. rebuild the scene, then retarget the audio.
//
// Presentation time only moves in `frame(dt)`, which ticks the scene and
// lets the audio parameters slew. Nothing here is shared or locked; the
// controller is driven from one loop.
//
// See also: `presenter.rs` for the traits, `main.rs` for the terminal loop.

use crate::presenter::{AudioPresenter, ScenePresenter};
use vibe_island_audio::{AudioConfig, AudioEngine};
use vibe_island_mood::{MoodEngine, MoodInput, MoodState};
use vibe_island_scene::{Scene, SceneConfig};

pub struct MoodController<S: ScenePresenter, A: AudioPresenter> {
    engine: MoodEngine,
    state: MoodState,
    scene: S,
    audio: A,
    /// Inputs handled so far.
    inputs: u64,
}

/// The controller wired to the shipped scene and audio models.
pub type StandardController = MoodController<Scene, AudioEngine>;

impl StandardController {
    pub fn standard(engine: MoodEngine, seed: u64) -> Self {
        Self::new(
            engine,
            Scene::new(seed, SceneConfig::default()),
            AudioEngine::new(AudioConfig::default()),
        )
    }
}

impl<S: ScenePresenter, A: AudioPresenter> MoodController<S, A> {
    /// Start in the engine's initial state with the scene built for it.
    /// Audio stays off until the first input.
    pub fn new(engine: MoodEngine, mut scene: S, audio: A) -> Self {
        let state = engine.initial_state();
        scene.build_world(&state);
        Self {
            engine,
            state,
            scene,
            audio,
            inputs: 0,
        }
    }

    pub fn state(&self) -> &MoodState {
        &self.state
    }

    pub fn engine(&self) -> &MoodEngine {
        &self.engine
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn inputs_handled(&self) -> u64 {
        self.inputs
    }

    /// Apply one input and push the new state to both presenters.
    pub fn handle(&mut self, input: &MoodInput) -> &MoodState {
        self.audio.init_audio();
        let next = self.engine.apply(input, &self.state);
        tracing::debug!(
            from = self.state.life_level,
            to = next.life_level,
            weather = next.weather.name(),
            tag = %next.tag,
            "state change"
        );
        self.state = next;
        self.inputs += 1;
        self.scene.build_world(&self.state);
        self.audio.update_audio(&self.state);
        &self.state
    }

    pub fn slider(&mut self, value: f64) -> &MoodState {
        self.handle(&MoodInput::slider(value))
    }

    pub fn preset(&mut self, label: &str) -> &MoodState {
        self.handle(&MoodInput::preset(label))
    }

    pub fn text(&mut self, text: &str) -> &MoodState {
        self.handle(&MoodInput::text(text))
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.audio.toggle_mute()
    }

    /// Advance presentation time by `dt` seconds.
    pub fn frame(&mut self, dt: f32) {
        self.scene.update(dt, &self.state);
        self.audio.advance(dt);
    }

    pub fn run_frames(&mut self, frames: u32, dt: f32) {
        for _ in 0..frames {
            self.frame(dt);
        }
    }
}
