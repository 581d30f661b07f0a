use gol_lib::{BoardDisplay, Cell};

use crate::settings::RenderSettings;

/// Draws the board as text, one line per row, followed by the generation of the board.
pub(crate) fn render(board_display: &BoardDisplay, render_settings: &RenderSettings) -> String {
    let mut text = String::with_capacity(
        (board_display.get_cols() + 1) * board_display.get_rows() + GENERATION_LABEL.len() + 20,
    );

    for row in board_display.rows() {
        text.extend(row.iter().map(|cell| match cell {
            Cell::Alive => render_settings.alive,
            Cell::Dead => render_settings.dead,
        }));
        text.push('\n');
    }

    text.push_str(GENERATION_LABEL);
    text.push_str(&board_display.get_generation().to_string());
    text.push('\n');
    text
}

const GENERATION_LABEL: &str = "Generation: ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_board() {
        let board: Vec<Box<[Cell]>> = vec![
            Box::new([Cell::Dead, Cell::Alive, Cell::Dead]),
            Box::new([Cell::Alive, Cell::Alive, Cell::Dead]),
        ];
        let board_display = BoardDisplay::new(12, board);

        assert_eq!(
            render(&board_display, &RenderSettings::default()),
            ".#.\n##.\nGeneration: 12\n"
        );
    }

    #[test]
    /// The characters used for cells can be configured.
    fn render_custom_characters() {
        let board: Vec<Box<[Cell]>> = vec![Box::new([Cell::Alive, Cell::Dead])];
        let board_display = BoardDisplay::new(0, board);
        let render_settings = RenderSettings {
            alive: 'O',
            dead: ' ',
        };

        assert_eq!(
            render(&board_display, &render_settings),
            "O \nGeneration: 0\n"
        );
    }
}
