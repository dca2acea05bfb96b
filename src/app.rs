//! The egui frontend: a thin shell over the generator and pricing modules.

use std::path::Path;

use eframe::egui;
use rand::thread_rng;

use crate::analysis;
use crate::chart;
use crate::display;
use crate::error::GenerationError;
use crate::filter;
use crate::generator::{self, GenerationBatch, Mode};
use crate::loader;
use crate::model::{DrawRecord, BASE_PRICE_6, MAX_GAME_SIZE, MIN_GAME_SIZE, NUMBER_MAX};
use crate::pricing;

enum Status {
    Info(String),
    Error(String),
}

pub struct GeneratorApp {
    csv_path: String,
    txt_path: String,
    chart_path: String,
    draws: Vec<DrawRecord>,
    mode: Mode,
    quantity: usize,
    numbers_per_game: usize,
    pool_size: usize,
    preview: String,
    batch: Option<GenerationBatch>,
    status: Option<Status>,
}

impl GeneratorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            csv_path: "results.csv".to_owned(),
            txt_path: "games.txt".to_owned(),
            chart_path: "frequency.png".to_owned(),
            draws: Vec::new(),
            mode: Mode::AllTimeFrequency,
            quantity: 1,
            numbers_per_game: 6,
            pool_size: 30,
            preview: String::new(),
            batch: None,
            status: None,
        };
        app.refresh_preview();
        app
    }

    fn history(&self) -> Option<&[DrawRecord]> {
        if self.draws.is_empty() {
            None
        } else {
            Some(&self.draws)
        }
    }

    fn load_draws(&mut self) {
        match loader::load_draws(Path::new(&self.csv_path)) {
            Ok(draws) if draws.is_empty() => {
                self.status = Some(Status::Error(format!(
                    "{} had no usable draws",
                    self.csv_path
                )));
            }
            Ok(draws) => {
                self.status = Some(Status::Info(format!("Loaded {} draws", draws.len())));
                self.draws = draws;
                self.refresh_preview();
            }
            Err(err) => {
                self.status = Some(Status::Error(format!("Load failed: {:#}", err)));
            }
        }
    }

    /// Ranked table for the selected mode, with the number of draws behind it.
    fn ranked_for_mode(&self) -> Option<(usize, Vec<(u8, u32)>)> {
        if self.mode == Mode::Uniform || self.draws.is_empty() {
            return None;
        }
        let filtered;
        let draws: &[DrawRecord] = if self.mode == Mode::YearEndFrequency {
            filtered = filter::year_end_draws(&self.draws);
            &filtered
        } else {
            &self.draws
        };
        if draws.is_empty() {
            return None;
        }
        let ranked = analysis::rank(&analysis::count_frequencies(draws));
        Some((draws.len(), ranked))
    }

    fn refresh_preview(&mut self) {
        self.preview = if self.mode == Mode::Uniform {
            display::build_preview(self.mode, 0, &[], self.pool_size, self.numbers_per_game)
        } else if self.draws.is_empty() {
            "Load the results file to see frequencies.\n".to_owned()
        } else {
            match self.ranked_for_mode() {
                Some((used, ranked)) => display::build_preview(
                    self.mode,
                    used,
                    &ranked,
                    self.pool_size,
                    self.numbers_per_game,
                ),
                None => "No December 31st draws in the loaded history.\n".to_owned(),
            }
        };
    }

    fn generate(&mut self) {
        let mut rng = thread_rng();
        let result = generator::generate(
            self.mode,
            self.history(),
            self.pool_size,
            self.numbers_per_game,
            self.quantity,
            &mut rng,
        );
        match result {
            Ok(batch) => {
                self.status = Some(Status::Info(format!(
                    "Generated {} games",
                    batch.games.len()
                )));
                self.batch = Some(batch);
            }
            Err(err) => {
                self.status = Some(Status::Error(describe_error(&err)));
            }
        }
    }

    fn save_report(&mut self) {
        let Some(batch) = &self.batch else {
            self.status = Some(Status::Error("Generate games before saving".to_owned()));
            return;
        };
        match std::fs::write(&self.txt_path, display::build_report(batch)) {
            Ok(()) => {
                self.status = Some(Status::Info(format!("Report saved to {}", self.txt_path)));
            }
            Err(err) => {
                self.status = Some(Status::Error(format!("Save failed: {}", err)));
            }
        }
    }

    fn save_chart(&mut self) {
        match self.ranked_for_mode() {
            Some((_, ranked)) => {
                match chart::save_frequency_chart(Path::new(&self.chart_path), &ranked) {
                    Ok(()) => {
                        self.status =
                            Some(Status::Info(format!("Chart saved to {}", self.chart_path)));
                    }
                    Err(err) => {
                        self.status = Some(Status::Error(format!("Chart failed: {:#}", err)));
                    }
                }
            }
            None => {
                self.status = Some(Status::Error(
                    "Charts need a loaded history and a frequency mode".to_owned(),
                ));
            }
        }
    }
}

fn describe_error(err: &GenerationError) -> String {
    match err {
        GenerationError::Precondition { .. } => format!("Check the settings: {}", err),
        GenerationError::InsufficientData(_) => format!("Data problem: {}", err),
        GenerationError::SamplingExhausted { .. } => format!("Try a larger pool: {}", err),
    }
}

impl eframe::App for GeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Mega-Sena Game Generator");

            ui.horizontal(|ui| {
                ui.label("Results file (.csv):");
                ui.add(egui::TextEdit::singleline(&mut self.csv_path).desired_width(320.0));
                if ui.button("Load").clicked() {
                    self.load_draws();
                }
            });

            if let (Some(first), Some(last)) = (self.draws.first(), self.draws.last()) {
                ui.label(format!(
                    "{} draws loaded, {} to {}",
                    self.draws.len(),
                    first.date,
                    last.date
                ));
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Games:");
                ui.add(egui::DragValue::new(&mut self.quantity).range(1..=5000));
                ui.label("Numbers per game:");
                if ui
                    .add(
                        egui::DragValue::new(&mut self.numbers_per_game)
                            .range(MIN_GAME_SIZE..=MAX_GAME_SIZE),
                    )
                    .changed()
                {
                    self.refresh_preview();
                }
                ui.label("Pool (top N numbers):");
                if ui
                    .add(
                        egui::DragValue::new(&mut self.pool_size)
                            .range(MIN_GAME_SIZE..=NUMBER_MAX as usize),
                    )
                    .changed()
                {
                    self.refresh_preview();
                }
            });

            let previous_mode = self.mode;
            egui::ComboBox::from_label("Generation mode")
                .selected_text(self.mode.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.mode,
                        Mode::AllTimeFrequency,
                        Mode::AllTimeFrequency.label(),
                    );
                    ui.selectable_value(
                        &mut self.mode,
                        Mode::YearEndFrequency,
                        Mode::YearEndFrequency.label(),
                    );
                    ui.selectable_value(&mut self.mode, Mode::Uniform, Mode::Uniform.label());
                });
            if self.mode != previous_mode {
                self.refresh_preview();
            }

            if let (Ok(unit), Ok(total)) = (
                pricing::game_price(self.numbers_per_game, BASE_PRICE_6),
                pricing::total_price(self.numbers_per_game, BASE_PRICE_6, self.quantity),
            ) {
                ui.label(format!(
                    "Price per game: {} | Total: {}",
                    display::format_brl(unit),
                    display::format_brl(total)
                ));
            }

            ui.horizontal(|ui| {
                if ui.button("Generate games").clicked() {
                    self.generate();
                }
                if ui.button("Copy").clicked() {
                    match &self.batch {
                        Some(batch) => {
                            ui.ctx().copy_text(display::build_report(batch));
                            self.status = Some(Status::Info("Copied to clipboard".to_owned()));
                        }
                        None => {
                            self.status =
                                Some(Status::Error("Generate games before copying".to_owned()));
                        }
                    }
                }
                ui.label("TXT:");
                ui.add(egui::TextEdit::singleline(&mut self.txt_path).desired_width(110.0));
                if ui.button("Save TXT").clicked() {
                    self.save_report();
                }
                ui.label("Chart:");
                ui.add(egui::TextEdit::singleline(&mut self.chart_path).desired_width(110.0));
                if ui.button("Save chart").clicked() {
                    self.save_chart();
                }
            });

            match &self.status {
                Some(Status::Error(msg)) => {
                    ui.colored_label(egui::Color32::RED, msg);
                }
                Some(Status::Info(msg)) => {
                    ui.label(msg);
                }
                None => {}
            }

            ui.separator();

            ui.columns(2, |columns| {
                columns[0].heading("Generated games");
                egui::ScrollArea::vertical()
                    .id_salt("games")
                    .show(&mut columns[0], |ui| match &self.batch {
                        Some(batch) => {
                            ui.monospace(display::build_report(batch));
                        }
                        None => {
                            ui.label(
                                "1) Load the results file (frequency modes)\n\
                                 2) Adjust the settings\n\
                                 3) Generate",
                            );
                        }
                    });

                columns[1].heading("Frequency preview");
                egui::ScrollArea::vertical()
                    .id_salt("preview")
                    .show(&mut columns[1], |ui| {
                        ui.monospace(self.preview.as_str());
                    });
            });
        });
    }
}
