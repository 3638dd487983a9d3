#[cfg(not(target_arch = "wasm32"))]
fn init_environment() {
    // Desktop dev: pick up a local .env; the bundled config covers the rest.
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_environment() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    init_tracing();
    init_environment();
    dioxus::launch(lumina::ui::App);
}
