use crate::game_service::{GameService, Toast};

use eframe::egui;
use std::time::Duration;
use tic_tac_toe_core::{NameCache, Notice, Player, SessionView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Click {
    Start,
    Cell(usize),
    Surrender,
}

pub struct GameApp<C: NameCache> {
    service: GameService<C>,
    input_player1: String,
    input_player2: String,
}

impl<C: NameCache> GameApp<C> {
    pub fn new(service: GameService<C>) -> Self {
        let cached = service.cached_names().clone();
        Self {
            service,
            input_player1: cached.player1,
            input_player2: cached.player2,
        }
    }
}

impl<C: NameCache> eframe::App for GameApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let view = self.service.view();
        let mut click = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.group(|ui| {
                    ui.set_width(400.0);
                    ui.set_height(600.0);

                    click = click.or(self.render_name_entry(ui, &view));

                    ui.add_space(10.0);

                    display_game_status(ui, &view);

                    ui.add_space(10.0);

                    click = click.or(render_board(ui, &view));

                    ui.add_space(10.0);

                    click = click.or(render_surrender(ui, &view));

                    ui.add_space(10.0);

                    for toast in self.service.toasts(now) {
                        render_toast(ui, toast);
                    }
                });
            });
        });

        // The frame above was drawn from the pre-click view; redraw right away.
        if let Some(click) = click {
            self.apply(click, now);
            ctx.request_repaint();
        } else if !self.service.toasts(now).is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl<C: NameCache> GameApp<C> {
    fn apply(&mut self, click: Click, now: f64) -> Option<Notice> {
        let notice = match click {
            Click::Start => self
                .service
                .start(&self.input_player1, &self.input_player2, now),
            Click::Cell(index) => self.service.click_cell(index, now),
            Click::Surrender => self.service.click_surrender(now),
        };

        if matches!(
            notice,
            Some(Notice::Win { .. }) | Some(Notice::Draw) | Some(Notice::Surrendered { .. })
        ) {
            self.input_player1.clear();
            self.input_player2.clear();
        }

        notice
    }

    fn render_name_entry(&mut self, ui: &mut egui::Ui, view: &SessionView) -> Option<Click> {
        ui.label("Player 1 (O):");
        ui.add_space(3.0);
        ui.add_enabled(
            view.inputs_enabled,
            egui::TextEdit::singleline(&mut self.input_player1).hint_text("Name"),
        );

        ui.add_space(5.0);

        ui.label("Player 2 (X):");
        ui.add_space(3.0);
        ui.add_enabled(
            view.inputs_enabled,
            egui::TextEdit::singleline(&mut self.input_player2).hint_text("Name"),
        );

        ui.add_space(10.0);

        ui.add(egui::Button::new("Start").min_size(egui::vec2(100.0, 30.0)))
            .clicked()
            .then_some(Click::Start)
    }
}

fn display_game_status(ui: &mut egui::Ui, view: &SessionView) {
    ui.label(
        egui::RichText::new(&view.player_o_label)
            .size(20.0)
            .color(egui::Color32::from_rgb(34, 139, 34)),
    );
    ui.label(
        egui::RichText::new(&view.player_x_label)
            .size(20.0)
            .color(egui::Color32::from_rgb(255, 99, 71)),
    );

    ui.add_space(5.0);

    let turn_message = match &view.turn_name {
        Some(name) => format!("🕐 {}'s turn", name),
        None => String::new(),
    };
    ui.label(
        egui::RichText::new(turn_message)
            .size(24.0)
            .color(egui::Color32::from_rgb(0, 191, 255)),
    );
}

fn render_board(ui: &mut egui::Ui, view: &SessionView) -> Option<Click> {
    let button_size = 100.0;
    let mut clicked = None;

    ui.vertical_centered(|ui| {
        for row in 0..3 {
            ui.horizontal(|ui| {
                ui.add_space(40.0);
                for col in 0..3 {
                    let index = row * 3 + col;
                    let text = match view.board[index] {
                        Some(Player::X) => egui::RichText::new("X")
                            .size(50.0)
                            .color(egui::Color32::from_rgb(255, 99, 71)),
                        Some(Player::O) => egui::RichText::new("O")
                            .size(50.0)
                            .color(egui::Color32::from_rgb(34, 139, 34)),
                        None => egui::RichText::new(" ")
                            .size(50.0)
                            .color(egui::Color32::from_rgb(180, 180, 180)),
                    };

                    if ui
                        .add(egui::Button::new(text).min_size(egui::vec2(button_size, button_size)))
                        .clicked()
                    {
                        clicked = Some(Click::Cell(index));
                    }
                }
            });
        }
    });

    clicked
}

fn render_surrender(ui: &mut egui::Ui, view: &SessionView) -> Option<Click> {
    let clicked = ui
        .add(
            egui::Button::new(
                egui::RichText::new("🏳 Surrender")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(240, 148, 0)),
            )
            .min_size(egui::vec2(140.0, 36.0)),
        )
        .clicked();

    if let Some(progress) = &view.surrender_indicator {
        ui.colored_label(egui::Color32::from_rgb(240, 148, 0), progress);
    }

    clicked.then_some(Click::Surrender)
}

fn render_toast(ui: &mut egui::Ui, toast: &Toast) {
    let color = if toast.notice.is_error() {
        egui::Color32::RED
    } else {
        egui::Color32::from_rgb(0, 191, 255)
    };
    ui.colored_label(color, toast.notice.to_string());
}
