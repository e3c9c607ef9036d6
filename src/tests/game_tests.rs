#[cfg(test)]
mod tests {
    use crate::game::*;

    #[test]
    fn test_board_dimensions() {
        assert_eq!(BOARD_ROWS, 12);
        assert_eq!(BOARD_COLS, 10);
    }

    #[test]
    fn test_gravity_interval_matches_original_loop() {
        // The descent loop fires every 400ms
        assert!((GRAVITY_INTERVAL - 0.4).abs() < f32::EPSILON);
    }
}
