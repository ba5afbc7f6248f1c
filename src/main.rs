// Core modules are driven by `frontend` in the browser; natively they only
// back the unit tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod analytics;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod carousel;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod images;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod preference;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scroll;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod session;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod visibility;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
