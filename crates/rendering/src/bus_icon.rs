//! Bus icon acquisition.
//!
//! Downloads the bus art once at startup, knocks out its near-white
//! background, and registers it as a texture. Any failure along the
//! way is logged and replaced by a procedurally painted placeholder,
//! so the app always comes up with a bus on screen.

use std::time::Duration;

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Where the bus art comes from.
const ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/1061/1061186.png";

/// Target icon height in pixels; width follows the aspect ratio.
const ICON_HEIGHT: u32 = 50;

/// Channel value above which a pixel counts as background.
const BACKGROUND_THRESHOLD: u8 = 200;

/// One icon pixel spans 1/100 world unit, so the downloaded icon is
/// about one map unit long.
const PIXELS_PER_UNIT: f32 = 100.0;

/// How long the startup fetch may take before falling back.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum IconError {
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),
    #[error("not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Marker for the animated bus sprite.
#[derive(Component)]
pub struct BusSprite;

/// Startup: obtain the icon (downloaded or painted) and spawn the bus
/// sprite; [`crate::bus::update_bus_sprite`] places it on the route.
pub fn setup_bus_icon(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let icon = match fetch_icon() {
        Ok(icon) => icon,
        Err(err) => {
            error!("bus icon unavailable ({err}), using placeholder");
            placeholder_icon()
        }
    };
    let size = Vec2::new(icon.width() as f32, icon.height() as f32) / PIXELS_PER_UNIT;
    commands.spawn((
        BusSprite,
        Sprite {
            image: images.add(into_texture(icon)),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));
}

/// Download and prepare the icon: resize to [`ICON_HEIGHT`] keeping
/// the aspect ratio, then drop the background.
fn fetch_icon() -> Result<RgbaImage, IconError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let bytes = client.get(ICON_URL).send()?.error_for_status()?.bytes()?;
    let decoded = image::load_from_memory(&bytes)?;
    let width = (decoded.width() * ICON_HEIGHT / decoded.height()).max(1);
    let mut rgba = image::imageops::resize(
        &decoded.to_rgba8(),
        width,
        ICON_HEIGHT,
        FilterType::Lanczos3,
    );
    mask_background(&mut rgba);
    Ok(rgba)
}

/// Make near-white pixels fully transparent so the icon floats over
/// the map instead of carrying a white card around.
fn mask_background(icon: &mut RgbaImage) {
    for pixel in icon.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > BACKGROUND_THRESHOLD && g > BACKGROUND_THRESHOLD && b > BACKGROUND_THRESHOLD {
            pixel.0 = [0, 0, 0, 0];
        }
    }
}

/// Paint the fallback bus: blue body, white window band, two black
/// wheels, on a transparent 100x50 canvas.
fn placeholder_icon() -> RgbaImage {
    let mut icon = RgbaImage::new(100, 50);
    fill_rect(&mut icon, 10, 15, 90, 35, [26, 0, 204, 255]);
    fill_rect(&mut icon, 15, 20, 85, 30, [230, 230, 230, 255]);
    paint_disc(&mut icon, 25.0, 38.0, 5.0, [0, 0, 0, 255]);
    paint_disc(&mut icon, 75.0, 38.0, 5.0, [0, 0, 0, 255]);
    icon
}

fn fill_rect(icon: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 4]) {
    for y in y0..y1 {
        for x in x0..x1 {
            icon.put_pixel(x, y, Rgba(color));
        }
    }
}

/// Paint a filled circle into the icon, clamped to its bounds.
fn paint_disc(icon: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
    let r2 = radius * radius + 0.5;
    for y in 0..icon.height() {
        for x in 0..icon.width() {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= r2 {
                icon.put_pixel(x, y, Rgba(color));
            }
        }
    }
}

/// Wrap the RGBA buffer in a Bevy texture asset.
fn into_texture(icon: RgbaImage) -> Image {
    let (width, height) = icon.dimensions();
    let mut texture = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        icon.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    texture.sampler = bevy::image::ImageSampler::linear();
    texture
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masking_clears_near_white_only() {
        let mut icon = RgbaImage::new(2, 1);
        icon.put_pixel(0, 0, Rgba([250, 250, 250, 255]));
        icon.put_pixel(1, 0, Rgba([26, 0, 204, 255]));
        mask_background(&mut icon);
        assert_eq!(icon.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(icon.get_pixel(1, 0).0, [26, 0, 204, 255]);
    }

    #[test]
    fn masking_needs_all_three_channels_bright() {
        let mut icon = RgbaImage::new(1, 1);
        icon.put_pixel(0, 0, Rgba([250, 250, 100, 255]));
        mask_background(&mut icon);
        assert_eq!(icon.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn placeholder_has_body_windows_and_wheels() {
        let icon = placeholder_icon();
        assert_eq!(icon.dimensions(), (100, 50));
        // Body pixel, window pixel, wheel pixel, transparent corner.
        assert_eq!(icon.get_pixel(12, 17).0, [26, 0, 204, 255]);
        assert_eq!(icon.get_pixel(50, 25).0, [230, 230, 230, 255]);
        assert_eq!(icon.get_pixel(25, 38).0, [0, 0, 0, 255]);
        assert_eq!(icon.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn texture_keeps_dimensions_and_format() {
        let texture = into_texture(placeholder_icon());
        assert_eq!(texture.texture_descriptor.size.width, 100);
        assert_eq!(texture.texture_descriptor.size.height, 50);
        assert_eq!(
            texture.texture_descriptor.format,
            TextureFormat::Rgba8UnormSrgb
        );
    }
}
