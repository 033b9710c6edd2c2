mod components;
mod config;
mod model;
mod state;
mod subscriptions;
mod util;

fn main() {
    yew::Renderer::<components::app::App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
