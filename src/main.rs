use megasena_generator::app::GeneratorApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Mega-Sena Game Generator",
        options,
        Box::new(|cc| Ok(Box::new(GeneratorApp::new(cc)))),
    )
}
