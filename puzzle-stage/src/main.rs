mod engine;

use engine::core::app_setup::create_app;
use engine::core::graphics_support::{Launch, launch};
use engine::core::viewer_config::ViewerConfig;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use engine::core::graphics_support::WebHost;

        let config = ViewerConfig::from_location();
        if let Launch::Started(mut app) = launch(&mut WebHost, || create_app(config)) {
            wasm_bindgen_futures::spawn_local(async move {
                app.run();
            });
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use engine::core::graphics_support::NativeHost;

        let config = ViewerConfig::from_args(std::env::args()).unwrap_or_else(|err| err.exit());

        if let Launch::Started(mut app) = launch(&mut NativeHost, || create_app(config)) {
            app.run();
        }
    }
}
