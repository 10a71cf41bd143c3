//! Main application entry point (native).

fn main() {
    env_logger::init();
    log::info!("Starting KeyCanvas");

    if let Err(e) = keycanvas_app::App::new().run() {
        log::error!("KeyCanvas exited with an error: {e}");
        std::process::exit(1);
    }
}
