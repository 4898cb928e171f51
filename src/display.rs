// Ficheiro: src/display.rs
// Descrição: Formatadores de texto (só de leitura) para um tabuleiro.

use crate::board::Board;
use crate::types::*;
use std::fmt;

/// Vista compacta: `B`/`W` para homens, `KB`/`KW` para damas.
pub struct CompactView<'a>(pub &'a Board);

/// Vista com o número de cada peça: `B3`, `W10`, `KB7`, ...
pub struct PieceNumberView<'a>(pub &'a Board);

// Preenche uma grelha 8x8 com o rótulo de cada peça.
fn grid<F>(board: &Board, label: F) -> [[Option<String>; 8]; 8]
where
    F: Fn(Piece) -> String,
{
    let mut cells: [[Option<String>; 8]; 8] = Default::default();
    for (piece, coord) in board.iter() {
        cells[coord.row() as usize][coord.col() as usize] = Some(label(piece));
    }
    cells
}

fn side_letter(side: Side) -> char {
    match side {
        Side::Black => 'B',
        Side::White => 'W',
    }
}

fn write_grid(
    f: &mut fmt::Formatter<'_>,
    cells: &[[Option<String>; 8]; 8],
    width: usize,
    footer_indent: usize,
) -> fmt::Result {
    for (i, row) in cells.iter().enumerate() {
        write!(f, "{} ", i)?;
        for cell in row {
            write!(f, "|{:<width$}", cell.as_deref().unwrap_or(""), width = width)?;
        }
        writeln!(f, "|")?;
    }

    // Rodapé com o número das colunas
    let columns: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
    write!(f, "{}{}", " ".repeat(footer_indent), columns.join(&" ".repeat(width)))
}

impl fmt::Display for CompactView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = grid(self.0, |piece| match piece.rank {
            Rank::Man => side_letter(piece.side).to_string(),
            Rank::King => format!("K{}", side_letter(piece.side)),
        });
        write_grid(f, &cells, 2, 3)
    }
}

impl fmt::Display for PieceNumberView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = grid(self.0, |piece| match piece.rank {
            Rank::Man => format!("{}{}", side_letter(piece.side), piece.index),
            Rank::King => format!("K{}{}", side_letter(piece.side), piece.index),
        });
        write_grid(f, &cells, 4, 4)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        CompactView(self).fmt(f)
    }
}
