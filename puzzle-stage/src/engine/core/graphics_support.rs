use bevy::prelude::*;

/// Shown in place of the stage when the host cannot render.
pub const UNSUPPORTED_MESSAGE: &str =
    "Your browser or graphics card does not seem to support WebGL 2. Find out how to get it at get.webgl.org.";

/// Element id of the fallback message on the web.
pub const FALLBACK_ELEMENT_ID: &str = "webgl-error-message";

/// Where the viewer runs: answers whether 3D rendering is available and
/// shows a fallback message when it is not.
pub trait GraphicsHost {
    fn supports_graphics(&self) -> bool;
    fn attach_fallback(&mut self, message: &str);
}

pub enum Launch {
    Started(App),
    Unsupported,
}

/// Build the app only if the host can render it. Otherwise attach exactly one
/// fallback element and build nothing.
pub fn launch(host: &mut impl GraphicsHost, build: impl FnOnce() -> App) -> Launch {
    if host.supports_graphics() {
        Launch::Started(build())
    } else {
        warn!("Graphics not supported, showing fallback");
        host.attach_fallback(UNSUPPORTED_MESSAGE);
        Launch::Unsupported
    }
}

/// Browser page hosting the canvas.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct WebHost;

#[cfg(target_arch = "wasm32")]
impl GraphicsHost for WebHost {
    fn supports_graphics(&self) -> bool {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return false;
        };
        document
            .create_element("canvas")
            .ok()
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .and_then(|canvas| canvas.get_context("webgl2").ok().flatten())
            .is_some()
    }

    fn attach_fallback(&mut self, message: &str) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            web_sys::console::error_1(&message.into());
            return;
        };
        let Some(body) = document.body() else {
            web_sys::console::error_1(&message.into());
            return;
        };

        match document.create_element("div") {
            Ok(element) => {
                element.set_id(FALLBACK_ELEMENT_ID);
                element.set_text_content(Some(message));
                if let Err(err) = body.append_child(&element) {
                    web_sys::console::error_2(&"Could not attach fallback message".into(), &err);
                }
            }
            Err(err) => {
                web_sys::console::error_2(&"Could not create fallback message".into(), &err);
            }
        }
    }
}

/// Desktop process. Adapter selection happens inside the renderer, so the
/// check here always passes and failures surface as renderer errors.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct NativeHost;

#[cfg(not(target_arch = "wasm32"))]
impl GraphicsHost for NativeHost {
    fn supports_graphics(&self) -> bool {
        true
    }

    fn attach_fallback(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
