// Semainier
// Main entry point

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Semainier");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Emploi du temps",
        options,
        Box::new(|cc| Ok(Box::new(semainier::ui::PlannerApp::new(cc)))),
    )
}
