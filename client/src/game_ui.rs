use common::games::tictactoe::{BOARD_SIDE, CELL_COUNT, Mark, Position, TicTacToeGameState, WinningLine};
use eframe::egui;

pub struct TicTacToeBoardUi {
    last_hover: Option<usize>,
}

impl TicTacToeBoardUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIDE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let pos = Position::from_index(index);
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + pos.x as f32 * cell_size,
                board_rect.top() + pos.y as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, point: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(point) {
            return None;
        }
        let x = (((point.x - board_rect.left()) / cell_size) as usize).min(BOARD_SIDE - 1);
        let y = (((point.y - board_rect.top()) / cell_size) as usize).min(BOARD_SIDE - 1);
        Some(Position::new(x, y).to_index())
    }

    /// Winning cells take precedence over the last-move tint.
    fn cell_fill(state: &TicTacToeGameState, index: usize) -> Option<egui::Color32> {
        if state.winning_line().is_some_and(|line| line.contains(index)) {
            Some(egui::Color32::from_rgb(255, 230, 140))
        } else if state.last_move() == Some(index) {
            Some(egui::Color32::from_rgb(215, 225, 240))
        } else {
            None
        }
    }

    /// Draws the board and returns the empty cell the user clicked, if any.
    /// With `accepts_input` unset, hovering and clicking are ignored.
    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        accepts_input: bool,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_size = cell_size * BOARD_SIDE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for index in 0..CELL_COUNT {
            if let Some(fill) = Self::cell_fill(state, index) {
                painter.rect_filled(Self::cell_rect(rect, cell_size, index), 0.0, fill);
            }
        }

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (index, mark) in state.board().cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, index);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = &state.winning_line() {
            self.draw_winning_line(painter, rect, cell_size, line);
        }

        self.last_hover = None;
        if !accepts_input || state.is_over() {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos() {
            let hovered = Self::cell_at(rect, cell_size, hover_pos)
                .filter(|&index| state.board().get(index) == Some(Mark::Empty));
            if let Some(index) = hovered {
                painter.rect_filled(
                    Self::cell_rect(rect, cell_size, index),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
            }
            self.last_hover = hovered;
        }

        if response.clicked() {
            return self.last_hover;
        }

        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }

    fn draw_winning_line(
        &self,
        painter: &egui::Painter,
        board_rect: egui::Rect,
        cell_size: f32,
        line: &WinningLine,
    ) {
        let start = Self::cell_rect(board_rect, cell_size, line.start().to_index()).center();
        let end = Self::cell_rect(board_rect, cell_size, line.end().to_index()).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(30, 160, 60, 200)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_points_row_major() {
        let rect = board_rect();

        assert_eq!(TicTacToeBoardUi::cell_at(rect, 100.0, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(TicTacToeBoardUi::cell_at(rect, 100.0, egui::pos2(250.0, 150.0)), Some(5));
        assert_eq!(TicTacToeBoardUi::cell_at(rect, 100.0, egui::pos2(310.0, 320.0)), Some(8));
        assert_eq!(TicTacToeBoardUi::cell_at(rect, 100.0, egui::pos2(5.0, 25.0)), None);
    }

    #[test]
    fn test_cell_rect_matches_cell_at() {
        let rect = board_rect();
        for index in 0..9 {
            let center = TicTacToeBoardUi::cell_rect(rect, 100.0, index).center();
            assert_eq!(TicTacToeBoardUi::cell_at(rect, 100.0, center), Some(index));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(TicTacToeBoardUi::calculate_cell_size(90.0, 900.0), 60.0);
        assert_eq!(TicTacToeBoardUi::calculate_cell_size(3000.0, 3000.0), 140.0);
        assert_eq!(TicTacToeBoardUi::calculate_cell_size(300.0, 400.0), 100.0);
    }

    fn play(state: &mut TicTacToeGameState, cells: &[usize]) {
        for &index in cells {
            let mark = state.current_mark();
            state.place_mark(mark, index).unwrap();
        }
    }

    #[test]
    fn test_last_move_is_tinted() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 4]);

        assert!(TicTacToeBoardUi::cell_fill(&state, 4).is_some());
        assert_eq!(TicTacToeBoardUi::cell_fill(&state, 0), None);
        assert_eq!(TicTacToeBoardUi::cell_fill(&TicTacToeGameState::new(), 4), None);
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let win_fill = TicTacToeBoardUi::cell_fill(&state, 2);

        assert!(win_fill.is_some());
        assert_eq!(TicTacToeBoardUi::cell_fill(&state, 0), win_fill);
        assert_eq!(TicTacToeBoardUi::cell_fill(&state, 1), win_fill);
        assert_eq!(TicTacToeBoardUi::cell_fill(&state, 3), None);
        assert_eq!(TicTacToeBoardUi::cell_fill(&state, 4), None);
    }
}
