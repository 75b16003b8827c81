use raylib::prelude::{KeyboardKey, RaylibHandle};
use vlk3d_engine::Command;

/// Held keys move and turn every frame; fire and quit trigger once per press
pub fn poll(rl: &RaylibHandle) -> Vec<Command> {
    let mut commands = Vec::new();
    let down = |keys: [KeyboardKey; 2]| keys.iter().any(|key| rl.is_key_down(*key));

    if down([KeyboardKey::KEY_UP, KeyboardKey::KEY_W]) {
        commands.push(Command::MoveForward);
    }
    if down([KeyboardKey::KEY_DOWN, KeyboardKey::KEY_S]) {
        commands.push(Command::MoveBackward);
    }
    if down([KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A]) {
        commands.push(Command::TurnLeft);
    }
    if down([KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D]) {
        commands.push(Command::TurnRight);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        commands.push(Command::Fire);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) || rl.window_should_close() {
        commands.push(Command::Quit);
    }

    commands
}
