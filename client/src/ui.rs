use std::time::Instant;

use common::games::tictactoe::{GameMode, SessionStats, TicTacToeSession};
use common::log;
use common::storage::KeyValueStorage;
use eframe::egui;

use crate::game_ui::TicTacToeBoardUi;

pub struct XoApp<S: KeyValueStorage> {
    session: TicTacToeSession<S>,
    board_ui: TicTacToeBoardUi,
    selected_mode: GameMode,
}

impl<S: KeyValueStorage> XoApp<S> {
    const INFO_PANEL_WIDTH: f32 = 220.0;

    pub fn new(session: TicTacToeSession<S>) -> Self {
        let selected_mode = session.mode();
        Self {
            session,
            board_ui: TicTacToeBoardUi::new(),
            selected_mode,
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_label("Mode")
            .selected_text(self.selected_mode.label())
            .show_ui(ui, |ui| {
                for mode in GameMode::ALL {
                    ui.selectable_value(&mut self.selected_mode, mode, mode.label());
                }
            });

        if self.selected_mode != self.session.mode() {
            self.session.set_mode(self.selected_mode);
        }

        ui.add_space(8.0);

        if ui.button("🔄 Restart (R)").clicked() || ui.input(|i| i.key_pressed(egui::Key::R)) {
            self.session.restart();
        }
    }

    fn render_stats(ui: &mut egui::Ui, stats: &SessionStats) {
        ui.heading("Stats");
        ui.separator();

        egui::Grid::new("stats_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label("Rounds played");
                ui.label(stats.total_rounds.to_string());
                ui.end_row();

                ui.label("X wins");
                ui.label(stats.wins_x.to_string());
                ui.end_row();

                ui.label("O wins");
                ui.label(stats.wins_o.to_string());
                ui.end_row();

                ui.label("Draws");
                ui.label(stats.draws.to_string());
                ui.end_row();
            });
    }
}

impl<S: KeyValueStorage> eframe::App for XoApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.poll(Instant::now());

        egui::SidePanel::right("info_panel")
            .resizable(false)
            .exact_width(Self::INFO_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.heading("XO Pro");
                ui.separator();
                self.render_controls(ui);
                ui.add_space(16.0);
                Self::render_stats(ui, self.session.stats());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.session.status_text());
                ui.add_space(12.0);

                let accepts_input = !self.session.is_bot_thinking();
                let clicked = self
                    .board_ui
                    .render_board(ui, self.session.game_state(), accepts_input);

                if let Some(index) = clicked
                    && let Err(e) = self.session.handle_cell_click(index, Instant::now())
                {
                    log!("Click on cell {} ignored: {}", index, e);
                }
            });
        });

        if let Some(wakeup) = self.session.next_wakeup() {
            ctx.request_repaint_after(wakeup.saturating_duration_since(Instant::now()));
        }
    }
}
