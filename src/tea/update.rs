//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::phrase;
use crate::wlog_debug;

use super::command::Command;
use super::message::Message;
use super::model::Model;

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.dirty = true; // Keyboard input always triggers render
            handle_key(model, key, &mut cmds);
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }

        Message::Tick(time) => {
            model.last_time = Some(time);
            model.dirty = true; // Help line shows the digital time

            let target = phrase::words(time);
            // Unchanged phrase: nothing to retype. The planner would also
            // no-op, but skipping here avoids cancelling a finishing typist.
            if model.target_phrase.as_deref() != Some(target.as_str()) {
                wlog_debug!("Tick {}: phrase \"{}\"", time, target);
                model.target_phrase = Some(target.clone());
                cmds.push(Command::Animate { target });
            }
        }

        Message::DisplayChanged => {
            model.dirty = true;
        }
    }

    cmds
}

fn handle_key(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => cmds.push(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            cmds.push(Command::Quit)
        }
        KeyCode::Char('?') => model.show_help = !model.show_help,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Time;
    use crate::config::Config;
    use crossterm::event::KeyEvent;

    fn tick(h: u32, m: u32) -> Message {
        Message::Tick(Time::new(h, m).unwrap())
    }

    #[test]
    fn test_tick_emits_animate_once_per_phrase() {
        let mut model = Model::new(Config::default());

        let cmds = update(&mut model, tick(5, 40));
        assert_eq!(
            cmds,
            vec![Command::Animate {
                target: "twintig voor zes".to_string()
            }]
        );

        // Same phrase on the next tick: no new animation
        let cmds = update(&mut model, tick(5, 40));
        assert!(cmds.is_empty());
        assert!(model.dirty);
    }

    #[test]
    fn test_tick_reanimates_when_phrase_changes() {
        let mut model = Model::new(Config::default());
        let _ = update(&mut model, tick(5, 40));
        let cmds = update(&mut model, tick(5, 45));
        assert_eq!(
            cmds,
            vec![Command::Animate {
                target: "kwart voor zes".to_string()
            }]
        );
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            KeyEvent::from(KeyCode::Char('q')),
            KeyEvent::from(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut model = Model::new(Config::default());
            assert_eq!(update(&mut model, Message::Key(key)), vec![Command::Quit]);
        }
    }

    #[test]
    fn test_help_toggle() {
        let mut model = Model::new(Config::default());
        assert!(update(&mut model, Message::Key(KeyEvent::from(KeyCode::Char('?')))).is_empty());
        assert!(model.show_help);
        let _ = update(&mut model, Message::Key(KeyEvent::from(KeyCode::Char('?'))));
        assert!(!model.show_help);
    }

    #[test]
    fn test_display_changed_marks_dirty() {
        let mut model = Model::new(Config::default());
        model.dirty = false;
        assert!(update(&mut model, Message::DisplayChanged).is_empty());
        assert!(model.dirty);
    }
}
