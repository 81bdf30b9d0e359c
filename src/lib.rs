pub mod agent;
pub mod app;
pub mod avatar;
pub mod certificates;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod http;
pub mod i18n;
pub mod leaderboard;
pub mod llm;
pub mod model;
pub mod quiz;
pub mod task;
pub mod toast;
pub mod tutor;
pub mod ui;
pub mod wallet;

pub use app::LearningQuestApp;
pub use error::AppError;

use std::sync::Arc;

use config::AppConfig;
use i18n::{LOCALE_KEY, Locale};
use llm::HttpTextGenerator;
use wallet::{KeypairWallet, RpcClient, WalletSession};

/// Monta la app con la configuración, los datos ya leídos y el idioma guardado.
pub fn build_app(
    cc: &eframe::CreationContext<'_>,
    config: AppConfig,
    data: data::MockData,
) -> LearningQuestApp {
    ui::fonts::configure_fonts(&cc.egui_ctx);

    let locale = cc
        .storage
        .and_then(|s| eframe::get_value::<Locale>(s, LOCALE_KEY))
        .unwrap_or_default();

    let keypair_path = config.keypair_path.as_ref().map(std::path::PathBuf::from);
    let adapter = KeypairWallet::new(keypair_path, RpcClient::new(config.rpc_url.clone()));
    let generator = Arc::new(HttpTextGenerator::new(config.llm.clone()));
    log::info!(
        "Iniciando con RPC {} y modelo {} ({})",
        config.rpc_url,
        generator.model(),
        locale.code()
    );

    LearningQuestApp::new(
        config,
        data,
        WalletSession::new(Box::new(adapter)),
        generator,
        locale,
    )
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::config::AppConfig;

    #[wasm_bindgen(start)]
    pub fn start() {
        let _ = eframe::WebLogger::init(log::LevelFilter::Info);

        wasm_bindgen_futures::spawn_local(async {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::error!("Sin document: no se puede arrancar");
                return;
            };
            let Some(canvas) = document
                .get_element_by_id("the_canvas_id")
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                log::error!("No se encontró el canvas 'the_canvas_id'");
                return;
            };
            let config = match AppConfig::from_env() {
                Ok(config) => config,
                Err(err) => {
                    log::error!("Configuración inválida: {err}");
                    return;
                }
            };
            let data = match crate::data::read_mock_data() {
                Ok(data) => data,
                Err(err) => {
                    log::error!("Datos embebidos inválidos: {err}");
                    return;
                }
            };

            let result = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(move |cc| Ok(Box::new(crate::build_app(cc, config, data)))),
                )
                .await;
            if let Err(err) = result {
                log::error!("Fallo al arrancar la app web: {err:?}");
            }
        });
    }
}
