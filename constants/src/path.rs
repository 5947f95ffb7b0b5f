/// Dataset location relative to the asset root.
pub const DEFAULT_DATA_PATH: &str = "data/puzzle08_data.json";

/// Canvas the renderer binds to on wasm builds.
pub const CANVAS_SELECTOR: &str = "#bevy";

/// Query parameter that overrides the dataset path on wasm builds.
pub const DATA_QUERY_PARAM: &str = "data";

/// Suffix appended to the input stem by the pre-processor.
pub const DATA_FILE_SUFFIX: &str = "_data.json";
