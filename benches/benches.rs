use iai::black_box;
use slidetab::{emit, occupancy, parse, square, Bitboard, Format, Slider, SliderTable, Tables};

fn bench_build_bishop_table() -> usize {
    let table = SliderTable::build(black_box(Slider::Bishop)).expect("bishop table");
    assert_eq!(table.len(), 5_248);
    table.len()
}

fn bench_build_rook_table() -> usize {
    let table = SliderTable::build(black_box(Slider::Rook)).expect("rook table");
    assert_eq!(table.len(), 102_400);
    table.len()
}

fn bench_index_from_occupancy() -> usize {
    let mask = Bitboard(0x0008_0808_7608_0800); // d4 rook mask
    occupancy::index_from_occupancy(black_box(Bitboard(0x3f7f_2880_2826_f5b9)), black_box(mask))
}

fn bench_emit_rust() -> usize {
    let tables = Tables::build().expect("tables");
    emit::to_bytes(black_box(&tables), Format::Rust).len()
}

fn bench_read_tables() -> Tables {
    let text = String::from_utf8(emit::to_bytes(
        &Tables::build().expect("tables"),
        Format::Cpp,
    ))
    .expect("utf-8");
    parse::read_tables(black_box(&text)).expect("parse")
}

fn bench_queen_lookup() -> Bitboard {
    let tables = Tables::build().expect("tables");
    tables.queen_attacks(black_box(square::D4), black_box(Bitboard(0x3f7f_2880_2826_f5b9)))
}

iai::main!(
    bench_build_bishop_table,
    bench_build_rook_table,
    bench_index_from_occupancy,
    bench_emit_rust,
    bench_read_tables,
    bench_queen_lookup,
);
