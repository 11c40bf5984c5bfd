use serde::Deserialize;
use slidetab::{attacks, mask, occupancy, square, Bitboard, Slider, SliderTable, Square};

#[derive(Debug, Deserialize)]
struct Record {
    square: String,
    rook: u32,
    bishop: u32,
}

#[test]
fn test_relevant_bits_csv() {
    let mut reader = csv::Reader::from_path("tests/relevant_bits.csv").expect("reader");

    let mut seen = 0;
    for result in reader.deserialize() {
        let record: Record = result.expect("record");
        let sq: Square = record.square.parse().expect("valid square");

        assert_eq!(
            mask::relevant_mask(sq, Slider::Rook).count(),
            record.rook,
            "rook {sq}"
        );
        assert_eq!(
            mask::relevant_mask(sq, Slider::Bishop).count(),
            record.bishop,
            "bishop {sq}"
        );
        seen += 1;
    }
    assert_eq!(seen, 64);
}

#[test]
fn test_corner_rook_empty_board() {
    let mask = mask::relevant_mask(square::A1, Slider::Rook);
    assert_eq!(mask.count(), 12);

    let table = SliderTable::build(Slider::Rook).expect("rook table");
    let expected = (Bitboard::rank(0) | Bitboard::file(0)).without(square::A1);
    assert_eq!(table.row(square::A1)[0], expected);
    assert_eq!(table.attacks(square::A1, Bitboard(0)), expected);
}

#[test]
fn test_central_bishop_with_blocker() {
    let table = SliderTable::build(Slider::Bishop).expect("bishop table");

    // Blocker on f6, two squares from d4 along the a1-h8 diagonal.
    let occupied = Bitboard::from(square::F6);
    let index = occupancy::index_from_occupancy(occupied, table.mask(square::D4));
    let attacks = table.row(square::D4)[index];

    assert!(attacks.contains(square::E5));
    assert!(attacks.contains(square::F6));
    assert!(!attacks.contains(square::G7));
    assert!(!attacks.contains(square::H8));

    let open = attacks::bishop_attacks(square::D4, Bitboard(0));
    for sq in [square::C5, square::B6, square::A7] {
        assert!(attacks.contains(sq));
    }
    for sq in [square::C3, square::B2, square::A1] {
        assert!(attacks.contains(sq));
    }
    for sq in [square::E3, square::F2, square::G1] {
        assert!(attacks.contains(sq));
    }
    assert_eq!(attacks, open.without(square::G7).without(square::H8));
}

/// Every attacked square lies on a ray with no closer blocker, and no square
/// behind the first blocker is attacked.
#[test]
fn test_attacks_stop_at_first_blocker() {
    for slider in Slider::ALL {
        let table = SliderTable::build(slider).expect("table");
        for sq in Square::all() {
            let mask = table.mask(sq);
            // Sample the row so the test stays quick for rooks.
            for index in (0..table.width(sq)).step_by(7) {
                let occupied = occupancy::occupancy_from_index(index, mask);
                let attack = table.row(sq)[index];

                let mut expected = Bitboard(0);
                for &(df, dr) in slider.directions() {
                    let mut s = sq;
                    let mut blocked = false;
                    while let Some(next) = s.offset(df, dr) {
                        assert_eq!(attack.contains(next), !blocked, "{slider} {sq} {next}");
                        if !blocked {
                            expected.add(next);
                        }
                        blocked |= occupied.contains(next);
                        s = next;
                    }
                }
                assert_eq!(attack, expected);
            }
        }
    }
}

#[test]
fn test_maximum_widths() {
    assert_eq!(mask::max_relevant_bits(Slider::Rook), 12);
    assert_eq!(mask::max_relevant_bits(Slider::Bishop), 9);

    let rook = SliderTable::build(Slider::Rook).expect("rook table");
    let bishop = SliderTable::build(Slider::Bishop).expect("bishop table");
    assert_eq!(rook.max_width(), 4096);
    assert_eq!(bishop.max_width(), 512);
}
