//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Hueday");

    if std::env::args().any(|arg| arg == "--shortcuts") {
        hueday_app::ShortcutRegistry::print_all();
        return;
    }

    pollster::block_on(hueday_app::App::run());
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
