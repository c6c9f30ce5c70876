use leptos::prelude::*;

use spooky_matrix_ui::app::App;
use spooky_matrix_ui::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"Console logger was already installed".into());
    }
    log::set_max_level(log::LevelFilter::Info);

    let config = AppConfig::load();
    log::set_max_level(config.log_level);
    log::info!("Starting {} (log level {})", config.title, config.log_level);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
