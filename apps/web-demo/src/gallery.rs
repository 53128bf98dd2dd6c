//! Demo photo set.

use thumbslider_core::{Photo, SliderConfig};

pub const PHOTO_COUNT: usize = 60;
pub const PHOTO_BASE_URL: &str = "https://picsum.photos/id";

/// Thumbnails for ids `0..count`. The slider range runs past the last photo
/// so the "no photo" tooltip can be seen too.
pub fn demo_photos(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|id| Photo::new(format!("{PHOTO_BASE_URL}/{id}/120/80")))
        .collect()
}

pub fn demo_config() -> SliderConfig {
    SliderConfig::default()
        .with_photos(demo_photos(PHOTO_COUNT))
        .with_range(0, 100)
        .with_value(10)
        .with_preload_photos(true)
}
