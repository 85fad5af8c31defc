#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SplashSettings {
    pub canvas_size: u32,
    /// Logo edge length as a fraction of the canvas edge
    pub logo_fraction: f32,
    /// How far above the vertical center the logo sits
    pub logo_lift: i64,
    /// Gap between the logo's bottom edge and the caption
    pub text_gap: i64,
    pub caption: String,
    /// Caption height in pixels
    pub font_scale: f32,
}
impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            canvas_size: 1024,
            logo_fraction: 0.3,
            logo_lift: 50,
            text_gap: 20,
            caption: "Energy Pet".to_string(),
            font_scale: 50.0,
        }
    }
}

/// Renders the logo centered on a transparent square canvas, slightly above
/// the middle, with the caption drawn below it.
pub fn compose_splash(
    logo: &image::ImageBuffer<image::Rgba<u8>, Vec<u8>>,
    font: &impl ab_glyph::Font,
    text_color: image::Rgba<u8>,
    settings: &SplashSettings,
) -> image::ImageBuffer<image::Rgba<u8>, Vec<u8>> {
    let canvas_size = settings.canvas_size;
    let logo_size = (canvas_size as f32 * settings.logo_fraction) as u32;
    let small = image::imageops::resize(
        logo,
        logo_size,
        logo_size,
        image::imageops::FilterType::Lanczos3,
    );
    let logo_x = ((canvas_size - logo_size) / 2) as i64;
    let logo_y = ((canvas_size - logo_size) / 2) as i64 - settings.logo_lift;

    let mut canvas =
        image::ImageBuffer::from_pixel(canvas_size, canvas_size, image::Rgba([0u8, 0, 0, 0]));
    image::imageops::overlay(&mut canvas, &small, logo_x, logo_y);

    let scale = ab_glyph::PxScale::from(settings.font_scale);
    let (text_width, _) = imageproc::drawing::text_size(scale, font, &settings.caption);
    let text_x = (canvas_size as i64 - text_width as i64) / 2;
    let text_y = logo_y + logo_size as i64 + settings.text_gap;
    imageproc::drawing::draw_text_mut(
        &mut canvas,
        text_color,
        text_x as i32,
        text_y as i32,
        scale,
        font,
        &settings.caption,
    );
    canvas
}

#[test]
fn logo_sits_above_center_on_a_transparent_canvas() {
    let Ok(font) = crate::fonts::load_caption_font() else {
        // no system fonts available
        return;
    };
    let logo = image::ImageBuffer::from_pixel(40, 40, image::Rgba([20u8, 120, 220, 255]));
    let settings = SplashSettings {
        canvas_size: 100,
        logo_lift: 10,
        caption: String::new(),
        ..Default::default()
    };
    let splash = compose_splash(
        &logo,
        &font,
        image::Rgba([255, 255, 255, 255]),
        &settings,
    );
    assert_eq!((splash.width(), splash.height()), (100, 100));
    assert_eq!(splash.get_pixel(0, 0), &image::Rgba([0, 0, 0, 0]));
    assert_eq!(splash.get_pixel(99, 99), &image::Rgba([0, 0, 0, 0]));
    // logo is 30 wide, so it spans x 35..65, y 25..55
    assert_eq!(splash.get_pixel(50, 40), &image::Rgba([20, 120, 220, 255]));
    assert_eq!(splash.get_pixel(50, 22), &image::Rgba([0, 0, 0, 0]));
}

#[test]
fn caption_is_drawn_below_the_logo() {
    let Ok(font) = crate::fonts::load_caption_font() else {
        return;
    };
    let logo = image::ImageBuffer::from_pixel(8, 8, image::Rgba([0u8, 0, 0, 255]));
    let settings = SplashSettings {
        canvas_size: 200,
        logo_lift: 0,
        text_gap: 4,
        caption: "EE".to_string(),
        font_scale: 40.0,
        ..Default::default()
    };
    let splash = compose_splash(
        &logo,
        &font,
        image::Rgba([255, 0, 0, 255]),
        &settings,
    );
    // the logo spans y 70..130, the caption starts at y 134
    let caption_pixels = splash
        .enumerate_pixels()
        .filter(|(_, y, p)| *y >= 134 && p.0[3] != 0)
        .count();
    assert!(caption_pixels > 0);
}
