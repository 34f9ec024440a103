use crossterm::event::KeyCode;

use crate::snake::Heading;

/// Arrow keys steer; any other key is a no-op.
pub fn heading_for_key(code: KeyCode) -> Option<Heading> {
    match code {
        KeyCode::Up => Some(Heading::Up),
        KeyCode::Down => Some(Heading::Down),
        KeyCode::Left => Some(Heading::Left),
        KeyCode::Right => Some(Heading::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_headings() {
        assert_eq!(heading_for_key(KeyCode::Up), Some(Heading::Up));
        assert_eq!(heading_for_key(KeyCode::Down), Some(Heading::Down));
        assert_eq!(heading_for_key(KeyCode::Left), Some(Heading::Left));
        assert_eq!(heading_for_key(KeyCode::Right), Some(Heading::Right));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(heading_for_key(KeyCode::Char('x')), None);
        assert_eq!(heading_for_key(KeyCode::Char('w')), None);
        assert_eq!(heading_for_key(KeyCode::Esc), None);
        assert_eq!(heading_for_key(KeyCode::Enter), None);
    }
}
