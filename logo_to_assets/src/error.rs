#[derive(Debug)]
pub enum Error {
    Image(image::ImageError),
    /// None of the candidate caption fonts could be loaded
    NoUsableFont,
    /// The image has no pixels to sample a background color from
    EmptyImage,
}
impl From<image::ImageError> for Error {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}
