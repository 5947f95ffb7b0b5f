use clap::Parser;
use constants::path::DEFAULT_DATA_PATH;

use crate::engine::bricks::BrickStyle;
use crate::engine::stage::StageConfig;

/// Everything the viewer needs to know before the app is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Dataset path relative to the asset root.
    pub data_path: String,
    /// Run headless for this many frames instead of opening a window.
    pub frame_limit: Option<u32>,
    pub stage: StageConfig,
    pub bricks: BrickStyle,
}

#[derive(Parser, Debug)]
#[command(name = "puzzle-stage")]
#[command(about = "3D viewer for junction-box puzzle datasets")]
struct ViewerArgs {
    /// Dataset path relative to the asset root
    #[arg(default_value = DEFAULT_DATA_PATH)]
    data_path: String,

    /// Stop after this many frames
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    frames: Option<u32>,

    /// Draw the junction boxes without their connecting edges
    #[arg(long)]
    no_edges: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            frame_limit: None,
            stage: StageConfig::default(),
            bricks: BrickStyle::default(),
        }
    }
}

impl From<ViewerArgs> for ViewerConfig {
    fn from(args: ViewerArgs) -> Self {
        let bricks = if args.no_edges {
            BrickStyle::markers_only()
        } else {
            BrickStyle::default()
        };
        Self {
            data_path: args.data_path,
            frame_limit: args.frames,
            stage: StageConfig::default(),
            bricks,
        }
    }
}

impl ViewerConfig {
    /// Parse the command line, program name included.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        ViewerArgs::try_parse_from(args).map(Self::from)
    }

    /// Options from the page URL, e.g. `?data=data/puzzle08_data.json`.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        use constants::path::DATA_QUERY_PARAM;

        let mut config = Self::default();
        let search = web_sys::window().and_then(|window| window.location().search().ok());
        let data_path = search
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get(DATA_QUERY_PARAM))
            .filter(|path| !path.is_empty());

        if let Some(path) = data_path {
            config.data_path = path;
        }
        config
    }
}
