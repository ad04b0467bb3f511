use crate::config::AppConfig;
use crate::game_service::{BoardView, CellView, Direction, GameService};

use tic_tac_toe_core::{Player, RoundStatus, CELL_COUNT};

const X_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);
const EMPTY_COLOR: egui::Color32 = egui::Color32::from_rgb(180, 180, 180);
const FOCUS_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 191, 255);

const ARROW_KEYS: [(egui::Key, Direction); 4] = [
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
];

fn player_color(player: Player) -> egui::Color32 {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

/// Space left of a row of `row_width` so it sits centred in `available`.
fn row_indent(available: f32, row_width: f32) -> f32 {
    ((available - row_width) / 2.0).max(0.0)
}

pub struct GameApp {
    game_service: GameService,
    config: AppConfig,
    // Widget id and screen rect of each cell button from the previous frame.
    cells: Vec<(egui::Id, egui::Rect)>,
    hovered: Option<usize>,
}

impl GameApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game_service: GameService::new(),
            config: config.clone(),
            cells: Vec::with_capacity(CELL_COUNT),
            hovered: None,
        }
    }

    fn owns_cell(&self, id: egui::Id) -> bool {
        self.cells.iter().any(|(cell_id, _)| *cell_id == id)
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl GameApp {
    fn show(&mut self, ctx: &egui::Context) {
        self.handle_keys(ctx);

        self.hovered = ctx
            .pointer_hover_pos()
            .and_then(|pos| self.cells.iter().position(|(_, rect)| rect.contains(pos)));

        let view = self.game_service.view();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.display_game_status(ui, &view);

                ui.add_space(10.0);

                let grid_width = self.config.grid_width(ui.spacing().item_spacing.x);
                let indent = row_indent(ui.available_width(), grid_width);

                self.render_board(ui, &view, indent);

                ui.add_space(10.0);

                self.display_scores(ui, &view);

                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.add_space(indent);
                    if ui
                        .add(egui::Button::new(egui::RichText::new("🔄 Restart").size(20.0)))
                        .clicked()
                    {
                        self.game_service.restart();
                    }
                    if ui
                        .add(egui::Button::new(
                            egui::RichText::new("Reset all")
                                .size(20.0)
                                .color(egui::Color32::from_rgb(240, 148, 0)),
                        ))
                        .clicked()
                    {
                        self.game_service.reset_all();
                    }
                });
            });
        });
    }

    /// Arrow keys always drive the grid. Enter and Space play the focused
    /// cell unless egui focus sits on another widget, which then gets them.
    /// Handled keys are consumed so egui does not act on them a second time.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let egui_focus = ctx.memory(|m| m.focused());
        let grid_has_focus = egui_focus.map_or(true, |id| self.owns_cell(id));

        let (moves, activate) = ctx.input_mut(|i| {
            let moves: Vec<Direction> = ARROW_KEYS
                .into_iter()
                .filter(|(key, _)| i.consume_key(egui::Modifiers::NONE, *key))
                .map(|(_, direction)| direction)
                .collect();
            let activate = grid_has_focus
                && (i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                    | i.consume_key(egui::Modifiers::NONE, egui::Key::Space));
            (moves, activate)
        });

        if !moves.is_empty() {
            // The arrow-driven focus ring replaces egui's on the grid.
            if let Some(id) = egui_focus.filter(|id| self.owns_cell(*id)) {
                ctx.memory_mut(|m| m.surrender_focus(id));
            }
            for direction in moves {
                self.game_service.move_focus(direction);
            }
        }
        if activate {
            self.game_service.play_focused();
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui, view: &BoardView, indent: f32) {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        let mut clicked = None;
        let mut focused = None;

        for row in 0..3 {
            ui.horizontal(|ui| {
                ui.add_space(indent);
                for col in 0..3 {
                    let index = row * 3 + col;
                    let cell = view.cells[index];

                    let response = ui.add_enabled(
                        cell.playable,
                        self.cell_button(index, &cell, view.current_player),
                    );

                    if response.has_focus() {
                        focused = Some(index);
                    }
                    if response.clicked() && cell.playable {
                        clicked = Some(index);
                    }
                    cells.push((response.id, response.rect));
                }
            });
        }

        self.cells = cells;
        // Tab focus and the grid's focus ring stay on the same cell.
        if let Some(index) = focused {
            self.game_service.set_focus(index);
        }
        if let Some(index) = clicked {
            self.game_service.play(index);
        }
    }

    fn cell_button(&self, index: usize, cell: &CellView, current: Player) -> egui::Button<'static> {
        let text = match cell.mark {
            Some(player) => egui::RichText::new(player.to_string())
                .size(50.0)
                .color(player_color(player)),
            // Faint preview of the mark the current player would place.
            None if cell.playable && self.hovered == Some(index) => {
                egui::RichText::new(current.to_string())
                    .size(50.0)
                    .color(player_color(current).gamma_multiply(0.35))
            }
            None => egui::RichText::new(" ").size(50.0).color(EMPTY_COLOR),
        };

        let size = self.config.cell_size;
        let mut button = egui::Button::new(text).min_size(egui::vec2(size, size));

        if cell.highlighted {
            if let Some(player) = cell.mark {
                button = button
                    .fill(player_color(player).gamma_multiply(0.25))
                    .stroke(egui::Stroke::new(3.0, player_color(player)));
            }
        } else if cell.focused {
            button = button.stroke(egui::Stroke::new(2.0, FOCUS_COLOR));
        }

        button
    }

    fn display_game_status(&self, ui: &mut egui::Ui, view: &BoardView) {
        let color = match view.status {
            RoundStatus::InProgress => player_color(view.current_player),
            RoundStatus::Won(winner) => player_color(winner),
            RoundStatus::Drawn => egui::Color32::from_rgb(240, 148, 0),
        };

        ui.label(egui::RichText::new(&view.banner).size(30.0).color(color));
    }

    fn display_scores(&self, ui: &mut egui::Ui, view: &BoardView) {
        let score_text = format!(
            "X {}  ·  O {}  ·  Draws {}",
            view.scores.wins(Player::X),
            view.scores.wins(Player::O),
            view.scores.draws
        );

        ui.label(
            egui::RichText::new(score_text)
                .size(24.0)
                .color(FOCUS_COLOR),
        );
    }
}
