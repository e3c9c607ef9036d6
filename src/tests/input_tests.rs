#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::components::Command;
    use crate::input::map_key;

    #[test]
    fn test_arrow_keys_map_to_commands() {
        assert_eq!(map_key(KeyCode::Left), Some(Command::ShiftLeft));
        assert_eq!(map_key(KeyCode::Right), Some(Command::ShiftRight));
        assert_eq!(map_key(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(map_key(KeyCode::Up), Some(Command::Rotate));
    }

    #[test]
    fn test_wasd_aliases_match_the_arrows() {
        assert_eq!(map_key(KeyCode::Char('a')), map_key(KeyCode::Left));
        assert_eq!(map_key(KeyCode::Char('d')), map_key(KeyCode::Right));
        assert_eq!(map_key(KeyCode::Char('s')), map_key(KeyCode::Down));
        assert_eq!(map_key(KeyCode::Char('w')), map_key(KeyCode::Up));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
        assert_eq!(map_key(KeyCode::Esc), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
