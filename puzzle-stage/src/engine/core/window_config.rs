use bevy::prelude::*;
use bevy::window::PresentMode;

use crate::engine::stage::StageConfig;

pub fn create_window_config(
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))] stage: &StageConfig,
) -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(stage.container.clone()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Puzzle Stage".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
