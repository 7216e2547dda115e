//! Decoding, fit-to-bound downscaling and the reference polygon overlay.

use fast_image_resize::images::Image as FastImage;
use fast_image_resize::{
    FilterType, ImageBufferError, PixelType, ResizeAlg, ResizeError, ResizeOptions, Resizer,
};
use image::{ImageError, ImageReader, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Frame the reference polygons are expressed in.
pub const REFERENCE_FRAME: (u32, u32) = (1280, 720);

/// Default display bound; larger images are shrunk to fit.
pub const DEFAULT_BOUND: (u32, u32) = (1280, 720);

/// Widest stroke accepted for the overlay.
pub const MAX_THICKNESS: u32 = 64;

const BORDERS: [&[(i32, i32)]; 4] = [
    &[(595, 651), (599, 413), (651, 173), (644, 362), (595, 651)],
    &[(877, 369), (892, 191), (1010, 445), (965, 611), (933, 610), (877, 369)],
    &[(816, 154), (844, 248), (853, 118), (817, 58), (816, 154)],
    &[(681, 57), (673, 98), (665, 214), (678, 140), (681, 57)],
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("invalid pixel buffer: {0}")]
    Buffer(#[from] ImageBufferError),
    #[error("resize failed: {0}")]
    Resize(#[from] ResizeError),
}

/// Closed outline in [`REFERENCE_FRAME`] coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePolygon {
    pub points: Vec<(i32, i32)>,
}

impl ReferencePolygon {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }

    /// The outlines drawn over every image.
    pub fn defaults() -> Vec<ReferencePolygon> {
        BORDERS
            .iter()
            .map(|pts| ReferencePolygon::new(pts.to_vec()))
            .collect()
    }

    pub fn scaled(&self, sx: f64, sy: f64) -> Vec<(i32, i32)> {
        self.points
            .iter()
            .map(|&(x, y)| {
                (
                    (x as f64 * sx).round() as i32,
                    (y as f64 * sy).round() as i32,
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub color: [u8; 3],
    pub thickness: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 2,
        }
    }
}

/// Size that fits `(width, height)` inside `bound` with one uniform factor,
/// or `None` when it already fits.
pub fn fit_within(width: u32, height: u32, bound: (u32, u32)) -> Option<(u32, u32)> {
    let (max_w, max_h) = bound;
    if width <= max_w && height <= max_h {
        return None;
    }
    let scale = f64::min(max_w as f64 / width as f64, max_h as f64 / height as f64);
    let new_w = ((width as f64 * scale).floor() as u32).clamp(1, max_w.max(1));
    let new_h = ((height as f64 * scale).floor() as u32).clamp(1, max_h.max(1));
    Some((new_w, new_h))
}

/// Stateless renderer: every call decodes, fits and annotates from scratch.
#[derive(Debug, Clone)]
pub struct Renderer {
    bound: (u32, u32),
    polygons: Vec<ReferencePolygon>,
    style: OverlayStyle,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_BOUND, OverlayStyle::default())
    }
}

impl Renderer {
    pub fn new(bound: (u32, u32), style: OverlayStyle) -> Self {
        Self {
            bound,
            polygons: ReferencePolygon::defaults(),
            style,
        }
    }

    pub fn with_polygons(mut self, polygons: Vec<ReferencePolygon>) -> Self {
        self.polygons = polygons;
        self
    }

    pub fn bound(&self) -> (u32, u32) {
        self.bound
    }

    /// Decode `path` and produce the annotated RGB frame to display.
    ///
    /// The format is sniffed from the file content; the extension is only a
    /// fallback.
    pub fn render(&self, path: &Path) -> Result<RgbImage, RenderError> {
        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|source| RenderError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let (w, h) = decoded.dimensions();

        let mut frame = match fit_within(w, h, self.bound) {
            Some((nw, nh)) => {
                tracing::debug!("downscaling {} from {w}x{h} to {nw}x{nh}", path.display());
                shrink(decoded, nw, nh)?
            }
            None => decoded,
        };
        self.annotate(&mut frame);
        Ok(frame)
    }

    /// Draw the outlines scaled to the frame's current size.
    pub fn annotate(&self, frame: &mut RgbImage) {
        let (w, h) = frame.dimensions();
        let sx = w as f64 / REFERENCE_FRAME.0 as f64;
        let sy = h as f64 / REFERENCE_FRAME.1 as f64;
        let color = Rgb(self.style.color);

        for polygon in &self.polygons {
            let pts = polygon.scaled(sx, sy);
            if pts.len() < 2 {
                continue;
            }
            for i in 0..pts.len() {
                let a = pts[i];
                let b = pts[(i + 1) % pts.len()];
                stroke(frame, a, b, self.style.thickness, color);
            }
        }
    }
}

fn stroke(frame: &mut RgbImage, a: (i32, i32), b: (i32, i32), thickness: u32, color: Rgb<u8>) {
    let t = thickness.clamp(1, MAX_THICKNESS) as i32;
    let lo = -(t - 1) / 2;
    for dx in lo..lo + t {
        for dy in lo..lo + t {
            draw_line_segment_mut(
                frame,
                ((a.0 + dx) as f32, (a.1 + dy) as f32),
                ((b.0 + dx) as f32, (b.1 + dy) as f32),
                color,
            );
        }
    }
}

/// Area-averaging shrink.
fn shrink(src: RgbImage, width: u32, height: u32) -> Result<RgbImage, RenderError> {
    let (w, h) = src.dimensions();
    let src = FastImage::from_vec_u8(w, h, src.into_raw(), PixelType::U8x3)?;
    let mut dst = FastImage::new(width, height, PixelType::U8x3);
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    Resizer::new().resize(&src, &mut dst, &options)?;
    RgbImage::from_raw(width, height, dst.into_vec())
        .ok_or(RenderError::Buffer(ImageBufferError::InvalidBufferSize))
}
