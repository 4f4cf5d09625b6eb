use quiz_shared::map;
use quiz_shared::models::Point;

/// Pure function: convert container-relative coordinates to native map-image
/// pixels, undoing the zoom/pan CSS transform. Usable in unit tests (no
/// web_sys dependency).
///
/// Only `container_w` is needed because the image renders with
/// `width:100%; height:auto`, so both axes share the same scale factor
/// (`MAP_WIDTH_PX / container_w`).
pub fn container_to_map_px(
    container_x: f64,
    container_y: f64,
    container_w: f64,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<Point> {
    if container_w <= 0.0 || zoom <= 0.0 {
        return None;
    }

    // Undo CSS transform: translate(pan_x, pan_y) scale(zoom)
    let rendered_x = (container_x - pan_x) / zoom;
    let rendered_y = (container_y - pan_y) / zoom;

    let scale = map::MAP_WIDTH_PX / container_w;
    let img_x = (rendered_x * scale).clamp(0.0, map::MAP_WIDTH_PX);
    let img_y = (rendered_y * scale).clamp(0.0, map::MAP_HEIGHT_PX);

    Some(Point::new(img_x, img_y))
}

/// Get container-relative click coordinates using web_sys, then convert from
/// rendered pixel space to map-image pixel space, undoing zoom/pan transform.
pub fn click_to_map_px(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<Point> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();

    let container_x = client_x - rect.left();
    let container_y = client_y - rect.top();

    container_to_map_px(container_x, container_y, rect.width(), zoom, pan_x, pan_y)
}
