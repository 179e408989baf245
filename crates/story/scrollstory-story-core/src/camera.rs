//! Chapter camera resolution.

use scrollstory_api_core::CameraCommand;

use crate::chapters::Chapter;

/// Camera command a chapter requests on enter, if it carries a location.
/// An absent `mapAnimation` means flyTo.
pub fn chapter_camera_command(chapter: &Chapter) -> Option<CameraCommand> {
    chapter.location.map(|view| {
        CameraCommand::for_viewpoint(view, chapter.map_animation.unwrap_or_default())
    })
}
