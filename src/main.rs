#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), solana_quest::AppError> {
    use solana_quest::config::AppConfig;

    pretty_env_logger::init();

    let config = AppConfig::from_env()?;
    let data = solana_quest::data::read_mock_data()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Solana Learning Quest")
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "solana_learning_quest",
        options,
        Box::new(move |cc| Ok(Box::new(solana_quest::build_app(cc, config, data)))),
    )
    .map_err(|err| {
        log::error!("La app terminó con error: {err}");
        err.into()
    })
}

// En web el arranque está en la librería (`#[wasm_bindgen(start)]`).
#[cfg(target_arch = "wasm32")]
fn main() {}
