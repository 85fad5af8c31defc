#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct IconSettings {
    /// Opaque canvas color behind the logo, RGBA
    pub background: [u8; 4],
}
impl Default for IconSettings {
    fn default() -> Self {
        // #0F172A
        Self {
            background: [15, 23, 42, 255],
        }
    }
}

/// Flattens the logo onto an opaque background of the same size and drops
/// the alpha channel (the iOS icon format rejects it).
pub fn compose_icon(
    logo: &image::ImageBuffer<image::Rgba<u8>, Vec<u8>>,
    settings: &IconSettings,
) -> image::ImageBuffer<image::Rgb<u8>, Vec<u8>> {
    let mut canvas = image::ImageBuffer::from_pixel(
        logo.width(),
        logo.height(),
        image::Rgba(settings.background),
    );
    image::imageops::overlay(&mut canvas, logo, 0, 0);
    image::DynamicImage::ImageRgba8(canvas).to_rgb8()
}

#[test]
fn transparent_logo_pixels_show_the_background() {
    let logo = image::ImageBuffer::from_fn(2, 1, |x, _| {
        if x == 0 {
            image::Rgba([200u8, 20, 20, 255])
        } else {
            image::Rgba([0u8, 0, 0, 0])
        }
    });
    let icon = compose_icon(&logo, &IconSettings::default());
    assert_eq!((icon.width(), icon.height()), (2, 1));
    assert_eq!(icon.get_pixel(0, 0), &image::Rgb([200, 20, 20]));
    assert_eq!(icon.get_pixel(1, 0), &image::Rgb([15, 23, 42]));
}

#[test]
fn background_color_is_configurable() {
    let logo = image::ImageBuffer::from_pixel(1, 1, image::Rgba([0u8, 0, 0, 0]));
    let icon = compose_icon(
        &logo,
        &IconSettings {
            background: [255, 255, 255, 255],
        },
    );
    assert_eq!(icon.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
}
