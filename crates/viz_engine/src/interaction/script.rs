//! Recorded interaction scripts
//!
//! A script is an ordered list of raw input events, serialized as RON.
//! Scripts make interaction sequences reproducible: record once, replay
//! through the router in tests or demos and compare dispatch outcomes.

use serde::{Deserialize, Serialize};

use crate::events::InputEvent;
use crate::scene::Scene;
use crate::ui::UiRegistry;

use super::{Dispatch, EventRouter};

/// Errors raised while loading or saving scripts
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    /// The file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The script text was not valid RON
    #[error("script parse error: {0}")]
    Parse(String),

    /// The script could not be serialized
    #[error("script serialize error: {0}")]
    Serialize(String),
}

/// An ordered, replayable list of input events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventScript {
    events: Vec<InputEvent>,
}

impl EventScript {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// The recorded events, in delivery order
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the script is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Parse a script from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ScriptError> {
        ron::from_str(text).map_err(|e| ScriptError::Parse(e.to_string()))
    }

    /// Serialize the script to RON text
    pub fn to_ron_string(&self) -> Result<String, ScriptError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ScriptError::Serialize(e.to_string()))
    }

    /// Load a script from a RON file
    pub fn load(path: &str) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Save the script to a RON file
    pub fn save(&self, path: &str) -> Result<(), ScriptError> {
        std::fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    /// Deliver every event through the router, in order
    ///
    /// Returns one dispatch outcome per event.
    pub fn replay<C>(
        &self,
        router: &mut EventRouter<C>,
        ui: &mut UiRegistry,
        scene: &mut Scene,
        session: &mut C,
    ) -> Vec<Dispatch> {
        log::debug!("Replaying {} recorded events", self.events.len());
        self.events
            .iter()
            .map(|event| router.handle_event(event, ui, scene, session))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::interaction::{CameraController, ScenePicker};

    fn sample_script() -> EventScript {
        let mut script = EventScript::new();
        script.push(InputEvent::pointer(EventKind::LeftButtonPress, 400.0, 300.0));
        script.push(InputEvent::pointer(EventKind::MouseMove, 420.0, 300.0));
        script.push(InputEvent::pointer(EventKind::LeftButtonRelease, 420.0, 300.0));
        script.push(InputEvent::character("q"));
        script
    }

    #[test]
    fn test_ron_round_trip_preserves_events() {
        let script = sample_script();
        let text = script.to_ron_string().unwrap();
        let back = EventScript::from_ron_str(&text).unwrap();
        assert_eq!(back.events(), script.events());
    }

    #[test]
    fn test_replay_dispatch_counts_are_stable() {
        let script = sample_script();

        let run = |script: &EventScript| {
            let mut scene = Scene::default();
            let mut ui = UiRegistry::new();
            let mut session = ();
            let mut router =
                EventRouter::new(Box::new(ScenePicker::new()), CameraController::new());
            script.replay(&mut router, &mut ui, &mut scene, &mut session)
        };

        let first = run(&script);
        let replayed = run(&EventScript::from_ron_str(&script.to_ron_string().unwrap()).unwrap());
        assert_eq!(first, replayed);
        assert_eq!(first.len(), script.len());
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            EventScript::from_ron_str("not a script"),
            Err(ScriptError::Parse(_))
        ));
    }
}
