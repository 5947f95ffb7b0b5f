use bevy::app::PluginGroupBuilder;
use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::ExitCondition;
use bevy::winit::WinitPlugin;

use crate::engine::bricks::BricksPlugin;
use crate::engine::core::app_state::AppState;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::data_loader::PuzzleDataLoadingPlugin;
use crate::engine::stage::StagePlugin;
use crate::engine::stage::frame_loop::{FrameLimit, frame_loop_runner};

pub fn create_app(config: ViewerConfig) -> App {
    let mut app = App::new();
    let headless = config.frame_limit.is_some();

    app.add_plugins(create_default_plugins(&config, headless))
        .init_state::<AppState>()
        .add_plugins(StagePlugin {
            config: config.stage.clone(),
        })
        .add_plugins(PuzzleDataLoadingPlugin {
            path: config.data_path.clone(),
        })
        .add_plugins(BricksPlugin {
            style: config.bricks,
        });

    // Without a window the winit loop never starts, so drive frames directly
    if let Some(frames) = config.frame_limit {
        info!("Running headless for {frames} frames");
        app.insert_resource(FrameLimit(frames))
            .set_runner(frame_loop_runner);
    }

    app
}

fn create_default_plugins(config: &ViewerConfig, headless: bool) -> PluginGroupBuilder {
    let window_config = if headless {
        WindowPlugin {
            primary_window: None,
            exit_condition: ExitCondition::DontExit,
            ..default()
        }
    } else {
        WindowPlugin {
            primary_window: Some(create_window_config(&config.stage)),
            ..default()
        }
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let plugins = DefaultPlugins.set(window_config).set(asset_config);
    if headless {
        plugins.disable::<WinitPlugin>()
    } else {
        plugins
    }
}
