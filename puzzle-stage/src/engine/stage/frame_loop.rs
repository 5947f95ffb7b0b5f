use bevy::app::{AppExit, PluginsState};
use bevy::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag for the stage's frame loop.
///
/// Clones share the flag, so a token handed to another owner (a host page
/// callback, a test) can end the loop. Cancelling emits an [`AppExit`] at
/// the end of the current frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Stop after this many frames. Used for headless runs.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimit(pub u32);

pub fn cancel_at_frame_limit(
    limit: Res<FrameLimit>,
    token: Res<CancellationToken>,
    mut frames: Local<u32>,
) {
    *frames += 1;
    if *frames >= limit.0 {
        token.cancel();
    }
}

pub fn exit_on_cancel(
    token: Res<CancellationToken>,
    mut exit: EventWriter<AppExit>,
    mut sent: Local<bool>,
) {
    if token.is_cancelled() && !*sent {
        info!("Stage cancelled, leaving frame loop");
        exit.write(AppExit::Success);
        *sent = true;
    }
}

/// Runner that updates the app in a plain loop until an [`AppExit`] is seen.
/// Stands in for the windowed event loop when no window is wanted.
pub fn frame_loop_runner(mut app: App) -> AppExit {
    if app.plugins_state() != PluginsState::Cleaned {
        while app.plugins_state() == PluginsState::Adding {
            #[cfg(not(target_arch = "wasm32"))]
            bevy::tasks::tick_global_task_pools_on_main_thread();
        }
        app.finish();
        app.cleanup();
    }

    loop {
        app.update();
        if let Some(exit) = app.should_exit() {
            return exit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::stage::{StageAppExt, StageConfig, StagePlugin};
    use crate::engine::test_support::headless_app;

    #[derive(Resource, Default, Clone)]
    struct FrameCounter(Arc<std::sync::atomic::AtomicU32>);

    fn counted_stage() -> (App, FrameCounter) {
        let counter = FrameCounter::default();
        let mut app = headless_app();
        app.add_plugins(StagePlugin {
            config: StageConfig::default(),
        })
        .insert_resource(counter.clone())
        .add_frame_update(|counter: Res<FrameCounter>| {
            counter.0.fetch_add(1, Ordering::SeqCst);
        });
        (app, counter)
    }

    #[test]
    fn token_clones_share_state() {
        let token = CancellationToken::default();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn frame_limit_stops_loop_after_exact_frame_count() {
        let (mut app, counter) = counted_stage();
        app.insert_resource(FrameLimit(3))
            .set_runner(frame_loop_runner);

        let exit = app.run();

        assert_eq!(exit, AppExit::Success);
        assert_eq!(counter.0.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn external_cancel_ends_loop_on_the_same_frame() {
        let mut app = headless_app();
        app.add_plugins(StagePlugin {
            config: StageConfig::default(),
        });
        let token = app.world().resource::<CancellationToken>().clone();
        let frames = Arc::new(std::sync::atomic::AtomicU32::new(0));
        let seen = frames.clone();
        app.add_frame_update(move || {
            if seen.fetch_add(1, Ordering::SeqCst) + 1 == 2 {
                token.cancel();
            }
        })
        .set_runner(frame_loop_runner);

        let exit = app.run();

        assert_eq!(exit, AppExit::Success);
        assert_eq!(frames.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn exit_is_written_once() {
        let (mut app, _) = counted_stage();
        app.update();
        app.world().resource::<CancellationToken>().cancel();
        app.update();
        app.update();

        let exits = app.world().resource::<Events<AppExit>>();
        assert_eq!(exits.len(), 1);
    }
}
