/// Written for every pixel classified as background.
const KEYED: image::Rgba<u8> = image::Rgba([255, 255, 255, 0]);

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct BackgroundKeySettings {
    /// A pixel counts as background if every RGB channel differs from the
    /// reference by strictly less than this (the pixel's alpha is ignored)
    pub tolerance: u8,
}
impl Default for BackgroundKeySettings {
    fn default() -> Self {
        Self { tolerance: 15 }
    }
}

pub trait BackgroundKey {
    fn key_background(
        &self,
        reference: image::Rgb<u8>,
        settings: &BackgroundKeySettings,
    ) -> image::ImageBuffer<image::Rgba<u8>, Vec<u8>>;
}
impl BackgroundKey for image::ImageBuffer<image::Rgba<u8>, Vec<u8>> {
    fn key_background(
        &self,
        reference: image::Rgb<u8>,
        settings: &BackgroundKeySettings,
    ) -> image::ImageBuffer<image::Rgba<u8>, Vec<u8>> {
        imageproc::map::map_pixels(self, |_, _, p| {
            let background = p
                .0
                .iter()
                .zip(reference.0)
                .all(|(&c, r)| c.abs_diff(r) < settings.tolerance);
            if background {
                KEYED
            } else {
                p
            }
        })
    }
}

/// Samples the top-left pixel as the background reference, dropping its
/// alpha. Returns `None` for an empty image.
pub fn sample_reference(
    image: &image::ImageBuffer<image::Rgba<u8>, Vec<u8>>,
) -> Option<image::Rgb<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }
    let image::Rgba([r, g, b, _]) = *image.get_pixel(0, 0);
    Some(image::Rgb([r, g, b]))
}

#[test]
fn classifies_pixels_against_reference() {
    let pixels = [
        image::Rgba([12u8, 12, 12, 255]),
        image::Rgba([30u8, 30, 30, 255]),
    ];
    let image = image::ImageBuffer::from_fn(2, 1, |x, _| pixels[x as usize]);

    let keyed = image.key_background(
        image::Rgb([10, 10, 10]),
        &BackgroundKeySettings { tolerance: 15 },
    );
    assert_eq!(keyed.get_pixel(0, 0), &image::Rgba([255, 255, 255, 0]));
    assert_eq!(keyed.get_pixel(1, 0), &image::Rgba([30, 30, 30, 255]));
}

#[test]
fn tolerance_bound_is_strict() {
    let pixels = [
        image::Rgba([115u8, 100, 100, 200]),
        image::Rgba([114u8, 100, 100, 200]),
    ];
    let image = image::ImageBuffer::from_fn(2, 1, |x, _| pixels[x as usize]);

    let keyed = image.key_background(
        image::Rgb([100, 100, 100]),
        &BackgroundKeySettings { tolerance: 15 },
    );
    // channel difference 15 is not < 15
    assert_eq!(keyed.get_pixel(0, 0), &image::Rgba([115, 100, 100, 200]));
    assert_eq!(keyed.get_pixel(1, 0), &image::Rgba([255, 255, 255, 0]));
}

#[test]
fn zero_tolerance_keys_nothing() {
    let image = image::ImageBuffer::from_pixel(1, 1, image::Rgba([50u8, 50, 50, 255]));
    let keyed = image.key_background(
        image::Rgb([50, 50, 50]),
        &BackgroundKeySettings { tolerance: 0 },
    );
    assert_eq!(keyed.get_pixel(0, 0), &image::Rgba([50, 50, 50, 255]));
}

#[test]
fn foreground_alpha_passes_through() {
    let image = image::ImageBuffer::from_pixel(1, 1, image::Rgba([200u8, 50, 50, 128]));
    let keyed = image.key_background(image::Rgb([10, 10, 10]), &BackgroundKeySettings::default());
    assert_eq!(keyed.get_pixel(0, 0), &image::Rgba([200, 50, 50, 128]));
}

#[test]
fn dimensions_are_preserved() {
    let image = image::ImageBuffer::from_fn(7, 3, |x, y| {
        image::Rgba([x as u8, y as u8, 40, 255])
    });
    let keyed = image.key_background(image::Rgb([0, 0, 40]), &BackgroundKeySettings::default());
    assert_eq!((keyed.width(), keyed.height()), (7, 3));
}

#[test]
fn empty_image_is_accepted() {
    let image = image::ImageBuffer::from_pixel(0, 0, image::Rgba([0u8, 0, 0, 0]));
    let keyed = image.key_background(image::Rgb([0, 0, 0]), &BackgroundKeySettings::default());
    assert_eq!((keyed.width(), keyed.height()), (0, 0));
    assert_eq!(sample_reference(&image), None);
}

#[test]
fn keying_twice_is_stable() {
    let pixels = [
        image::Rgba([12u8, 12, 12, 255]),
        image::Rgba([30u8, 30, 30, 255]),
        image::Rgba([250u8, 250, 250, 255]),
    ];
    let image = image::ImageBuffer::from_fn(3, 1, |x, _| pixels[x as usize]);
    let reference = image::Rgb([10, 10, 10]);
    let settings = BackgroundKeySettings { tolerance: 15 };

    let once = image.key_background(reference, &settings);
    let twice = once.key_background(reference, &settings);
    assert_eq!(once, twice);
}
