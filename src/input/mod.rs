use macroquad::prelude::*;
use crate::application::{SeedSource, Simulation};

/// Keys the simulation reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Shutdown,
    Reset,
}

/// Transition reported for a key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub action: KeyAction,
}

/// Effect an event has on the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Shutdown,
    Reset,
}

/// Only presses trigger anything; releases and repeats are ignored.
pub fn command_for(event: InputEvent) -> Option<Command> {
    match (event.key, event.action) {
        (Key::Shutdown, KeyAction::Press) => Some(Command::Shutdown),
        (Key::Reset, KeyAction::Press) => Some(Command::Reset),
        _ => None,
    }
}

/// Apply one event to the simulation, drawing a seed when it resets
pub fn apply_event<S: SeedSource>(sim: &mut Simulation, event: InputEvent, seeds: &mut S) {
    match command_for(event) {
        Some(Command::Shutdown) => sim.request_shutdown(),
        Some(Command::Reset) => sim.reset(seeds.next_seed()),
        None => {}
    }
}

const KEY_BINDINGS: [(KeyCode, Key); 2] = [
    (KeyCode::Escape, Key::Shutdown),
    (KeyCode::Space, Key::Reset),
];

/// Collect this frame's key transitions from macroquad
pub fn poll_events() -> Vec<InputEvent> {
    KEY_BINDINGS
        .iter()
        .flat_map(|&(code, key)| {
            [
                (is_key_pressed(code), KeyAction::Press),
                (is_key_released(code), KeyAction::Release),
            ]
            .into_iter()
            .filter(|(happened, _)| *happened)
            .map(move |(_, action)| InputEvent { key, action })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FixedSeed;
    use crate::domain::{Algorithm, Dimensions, Grid};

    fn event(key: Key, action: KeyAction) -> InputEvent {
        InputEvent { key, action }
    }

    #[test]
    fn test_only_press_maps_to_command() {
        assert_eq!(command_for(event(Key::Shutdown, KeyAction::Press)), Some(Command::Shutdown));
        assert_eq!(command_for(event(Key::Reset, KeyAction::Press)), Some(Command::Reset));
        for key in [Key::Shutdown, Key::Reset] {
            assert_eq!(command_for(event(key, KeyAction::Release)), None);
            assert_eq!(command_for(event(key, KeyAction::Repeat)), None);
        }
    }

    #[test]
    fn test_reset_press_replaces_grid() {
        let d = Dimensions::new(12, 12).unwrap();
        let mut sim = Simulation::from_grid(Grid::new(d), Algorithm::Serial);
        apply_event(&mut sim, event(Key::Reset, KeyAction::Press), &mut FixedSeed(8));
        assert_eq!(sim.grid(), &Grid::randomize(d, 8));
        assert!(!sim.should_exit());
    }

    #[test]
    fn test_release_and_repeat_do_nothing() {
        let d = Dimensions::new(6, 6).unwrap();
        let mut sim = Simulation::from_grid(Grid::new(d), Algorithm::Serial);
        let mut seeds = || -> u64 { panic!("no seed should be drawn") };
        for action in [KeyAction::Release, KeyAction::Repeat] {
            apply_event(&mut sim, event(Key::Reset, action), &mut seeds);
            apply_event(&mut sim, event(Key::Shutdown, action), &mut seeds);
        }
        assert_eq!(sim.grid(), &Grid::new(d));
        assert!(!sim.should_exit());
    }

    #[test]
    fn test_shutdown_press_sets_flag() {
        let d = Dimensions::new(6, 6).unwrap();
        let mut sim = Simulation::from_grid(Grid::new(d), Algorithm::Serial);
        apply_event(&mut sim, event(Key::Shutdown, KeyAction::Press), &mut FixedSeed(0));
        assert!(sim.should_exit());
    }
}
