/// CSUN campus map image.
///
/// All building bounds and click positions are expressed in the native
/// pixel space of this image. Origin is the top-left corner; X grows
/// east, Y grows south. The quiz has no world-unit scale — pixels are
/// the only coordinate system.
pub const MAP_WIDTH_PX: f64 = 1024.0;
pub const MAP_HEIGHT_PX: f64 = 800.0;

/// Asset path the frontend serves the map image from.
pub const MAP_IMAGE_PATH: &str = "/assets/campus-map.png";
