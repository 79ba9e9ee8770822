/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use branding_ui::components::logo::Logo;
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    html! {
        <header class="app-header">
            <Logo />
        </header>
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("failed to init logger: {e}").into());
    }
    console_error_panic_hook::set_once();

    log::info!("mounting branding-ui");
    yew::Renderer::<App>::new().render();
}
