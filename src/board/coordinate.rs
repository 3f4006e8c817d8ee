//! Grid coordinates and the algebraic notation codec.
//!
//! The grid is laid out from White's perspective reading top to bottom:
//! row 0 is Black's back rank (rank 8), row 7 is White's back rank (rank 1),
//! and col 0 is file 'a'. The codec is a total bijection between in-range
//! coordinates and algebraic square names; out-of-range input is a
//! programming error and fails fast.

#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8);
        Self { row, col }
    }

    /// Returns `Some` only for in-range offsets, so callers can walk rays
    /// and offset tables without pre-checking the board edge.
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Coordinate> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Coordinate::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        let mut notation = String::with_capacity(2);
        notation.push(file);
        notation.push(rank);
        notation
    }

    pub fn from_algebraic(algebraic_coord: &str) -> Coordinate {
        let mut chars = algebraic_coord.chars();
        let file_char = chars.next().expect("algebraic coordinate is empty");
        let rank_char = chars.next().expect("algebraic coordinate is too short");
        assert!(
            chars.next().is_none(),
            "algebraic coordinate is too long: {}",
            algebraic_coord
        );

        let file = file_char.to_ascii_lowercase() as i8 - 'a' as i8;
        let rank = rank_char as i8 - '1' as i8;
        assert!(
            (0..8).contains(&file) && (0..8).contains(&rank),
            "invalid algebraic coordinate: {}",
            algebraic_coord
        );

        Coordinate::new(7 - rank as u8, file as u8)
    }
}

pub const A1: Coordinate = Coordinate::new(7, 0);
pub const B1: Coordinate = Coordinate::new(7, 1);
pub const C1: Coordinate = Coordinate::new(7, 2);
pub const D1: Coordinate = Coordinate::new(7, 3);
pub const E1: Coordinate = Coordinate::new(7, 4);
pub const F1: Coordinate = Coordinate::new(7, 5);
pub const G1: Coordinate = Coordinate::new(7, 6);
pub const H1: Coordinate = Coordinate::new(7, 7);
pub const A2: Coordinate = Coordinate::new(6, 0);
pub const B2: Coordinate = Coordinate::new(6, 1);
pub const C2: Coordinate = Coordinate::new(6, 2);
pub const D2: Coordinate = Coordinate::new(6, 3);
pub const E2: Coordinate = Coordinate::new(6, 4);
pub const F2: Coordinate = Coordinate::new(6, 5);
pub const G2: Coordinate = Coordinate::new(6, 6);
pub const H2: Coordinate = Coordinate::new(6, 7);
pub const A3: Coordinate = Coordinate::new(5, 0);
pub const B3: Coordinate = Coordinate::new(5, 1);
pub const C3: Coordinate = Coordinate::new(5, 2);
pub const D3: Coordinate = Coordinate::new(5, 3);
pub const E3: Coordinate = Coordinate::new(5, 4);
pub const F3: Coordinate = Coordinate::new(5, 5);
pub const G3: Coordinate = Coordinate::new(5, 6);
pub const H3: Coordinate = Coordinate::new(5, 7);
pub const A4: Coordinate = Coordinate::new(4, 0);
pub const B4: Coordinate = Coordinate::new(4, 1);
pub const C4: Coordinate = Coordinate::new(4, 2);
pub const D4: Coordinate = Coordinate::new(4, 3);
pub const E4: Coordinate = Coordinate::new(4, 4);
pub const F4: Coordinate = Coordinate::new(4, 5);
pub const G4: Coordinate = Coordinate::new(4, 6);
pub const H4: Coordinate = Coordinate::new(4, 7);
pub const A5: Coordinate = Coordinate::new(3, 0);
pub const B5: Coordinate = Coordinate::new(3, 1);
pub const C5: Coordinate = Coordinate::new(3, 2);
pub const D5: Coordinate = Coordinate::new(3, 3);
pub const E5: Coordinate = Coordinate::new(3, 4);
pub const F5: Coordinate = Coordinate::new(3, 5);
pub const G5: Coordinate = Coordinate::new(3, 6);
pub const H5: Coordinate = Coordinate::new(3, 7);
pub const A6: Coordinate = Coordinate::new(2, 0);
pub const B6: Coordinate = Coordinate::new(2, 1);
pub const C6: Coordinate = Coordinate::new(2, 2);
pub const D6: Coordinate = Coordinate::new(2, 3);
pub const E6: Coordinate = Coordinate::new(2, 4);
pub const F6: Coordinate = Coordinate::new(2, 5);
pub const G6: Coordinate = Coordinate::new(2, 6);
pub const H6: Coordinate = Coordinate::new(2, 7);
pub const A7: Coordinate = Coordinate::new(1, 0);
pub const B7: Coordinate = Coordinate::new(1, 1);
pub const C7: Coordinate = Coordinate::new(1, 2);
pub const D7: Coordinate = Coordinate::new(1, 3);
pub const E7: Coordinate = Coordinate::new(1, 4);
pub const F7: Coordinate = Coordinate::new(1, 5);
pub const G7: Coordinate = Coordinate::new(1, 6);
pub const H7: Coordinate = Coordinate::new(1, 7);
pub const A8: Coordinate = Coordinate::new(0, 0);
pub const B8: Coordinate = Coordinate::new(0, 1);
pub const C8: Coordinate = Coordinate::new(0, 2);
pub const D8: Coordinate = Coordinate::new(0, 3);
pub const E8: Coordinate = Coordinate::new(0, 4);
pub const F8: Coordinate = Coordinate::new(0, 5);
pub const G8: Coordinate = Coordinate::new(0, 6);
pub const H8: Coordinate = Coordinate::new(0, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a8", A8.to_algebraic());
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("h8", H8.to_algebraic());
        assert_eq!("e2", E2.to_algebraic());
        assert_eq!("e4", E4.to_algebraic());
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(A1, Coordinate::from_algebraic("a1"));
        assert_eq!(A1, Coordinate::from_algebraic("A1"));
        assert_eq!(E5, Coordinate::from_algebraic("e5"));
        assert_eq!(H8, Coordinate::from_algebraic("h8"));
    }

    #[test]
    fn test_codec_round_trip_over_all_squares() {
        for row in 0..8 {
            for col in 0..8 {
                let coord = Coordinate::new(row, col);
                assert_eq!(coord, Coordinate::from_algebraic(&coord.to_algebraic()));
            }
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Some(E4), E2.offset(-2, 0));
        assert_eq!(Some(D3), E2.offset(-3, -1));
        assert_eq!(None, A1.offset(1, 0));
        assert_eq!(None, H8.offset(0, 1));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_coordinate_panics() {
        Coordinate::new(8, 0);
    }

    #[test]
    #[should_panic]
    fn test_invalid_algebraic_panics() {
        Coordinate::from_algebraic("i9");
    }
}
