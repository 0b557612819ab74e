//! Entry point for the WASM application

pub fn main() {
    videocut_frontend::run();
}
