use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::puzzle_data::PuzzleData;
use crate::engine::core::app_state::AppState;

#[derive(Resource, Debug, Default)]
pub struct PuzzleDataLoader {
    /// Path relative to the asset root.
    pub path: String,
    handle: Option<Handle<PuzzleData>>,
    failed: bool,
}

impl PuzzleDataLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..default()
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

pub struct PuzzleDataLoadingPlugin {
    pub path: String,
}

impl Plugin for PuzzleDataLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<PuzzleData>::new(&["json"]))
            .insert_resource(PuzzleDataLoader::new(self.path.clone()))
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                load_puzzle_data_system.run_if(in_state(AppState::Loading)),
            );
    }
}

pub fn start_loading(mut loader: ResMut<PuzzleDataLoader>, asset_server: Res<AssetServer>) {
    info!("Loading puzzle data from: {}", loader.path);
    loader.handle = Some(asset_server.load(loader.path.clone()));
}

/// Insert the dataset as a resource once loaded and switch to `Running`.
/// A failed load is logged once and leaves the app in `Loading`.
pub fn load_puzzle_data_system(
    mut commands: Commands,
    mut loader: ResMut<PuzzleDataLoader>,
    mut next_state: ResMut<NextState<AppState>>,
    asset_server: Res<AssetServer>,
    datasets: Res<Assets<PuzzleData>>,
) {
    if loader.has_failed() {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    if let Some(data) = datasets.get(&handle) {
        if let Err(err) = data.validate() {
            warn!("Puzzle data is inconsistent: {err}");
        }
        info!(
            "✓ Puzzle data loaded: {} boxes, {} edges, scale {}",
            data.boxes.len(),
            data.edges.len(),
            data.scale
        );
        commands.insert_resource(data.clone());
        next_state.set(AppState::Running);
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&handle) {
        error!("Failed to load puzzle data from {}: {err}", loader.path);
        loader.failed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::headless_app;

    fn loading_app() -> App {
        let mut app = headless_app();
        app.init_asset::<PuzzleData>()
            .insert_resource(PuzzleDataLoader::new("data/test_data.json"))
            .add_systems(
                Update,
                load_puzzle_data_system.run_if(in_state(AppState::Loading)),
            );
        app
    }

    fn sample() -> PuzzleData {
        PuzzleData {
            boxes: vec![[1.0, 2.0, 3.0]],
            edges: Vec::new(),
            scale: 1.0,
        }
    }

    #[test]
    fn waits_without_a_request() {
        let mut app = loading_app();
        app.update();
        app.update();
        assert!(!app.world().contains_resource::<PuzzleData>());
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Loading
        );
    }

    #[test]
    fn loaded_dataset_becomes_resource_and_starts_running() {
        let mut app = loading_app();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<PuzzleData>>()
            .add(sample());
        app.world_mut().resource_mut::<PuzzleDataLoader>().handle = Some(handle);

        app.update();
        app.update();

        assert_eq!(*app.world().resource::<PuzzleData>(), sample());
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Running
        );
        assert!(!app.world().resource::<PuzzleDataLoader>().has_failed());
    }
}
