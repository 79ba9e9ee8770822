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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use yew::prelude::*;

use crate::assets::{Asset, LOGO_ALT_TEXT};

pub const LOGO_CONTAINER_STYLE: &str =
    "align-items: center; display: flex; flex-direction: row; margin-left: 10px;";
pub const LOGO_IMAGE_STYLE: &str = "object-fit: contain; height: auto; width: 150px;";

/// F5 brand mark for the header. Takes no props.
#[function_component(Logo)]
pub fn logo() -> Html {
    // Resolved once per mount; the runtime config does not change while mounted.
    let src = use_memo((), |_| Asset::F5Logo.url());

    html! {
        <div class="logo" style={LOGO_CONTAINER_STYLE}>
            <img
                class="logo-image"
                style={LOGO_IMAGE_STYLE}
                src={(*src).clone()}
                alt={LOGO_ALT_TEXT}
            />
        </div>
    }
}
