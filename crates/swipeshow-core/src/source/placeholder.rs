use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use image::{DynamicImage, Rgb, RgbImage};

use super::{ItemSource, SourceLoad};

/// Placeholder artwork size in pixels
const ART_WIDTH: u32 = 320;
const ART_HEIGHT: u32 = 240;

/// Static source of sequential placeholder names
#[derive(Debug, Clone)]
pub struct PlaceholderSource {
    prefix: String,
    count: usize,
}

impl PlaceholderSource {
    pub fn new(prefix: impl Into<String>, count: usize) -> Self {
        Self {
            prefix: prefix.into(),
            count,
        }
    }

    /// "{prefix} 1" ..= "{prefix} {count}"
    pub fn names(&self) -> Vec<String> {
        (1..=self.count)
            .map(|n| format!("{} {}", self.prefix, n))
            .collect()
    }
}

#[async_trait]
impl ItemSource for PlaceholderSource {
    type Item = String;

    fn describe(&self) -> String {
        format!("{} placeholder images", self.count)
    }

    async fn load(&self) -> SourceLoad<String> {
        SourceLoad::granted(self.names())
    }

    async fn fetch_display(&self, item: &String) -> Option<DynamicImage> {
        Some(placeholder_art(item))
    }

    fn label(&self, item: &String) -> String {
        item.clone()
    }
}

/// Diagonal two-tone gradient whose hue is derived from the label
pub fn placeholder_art(label: &str) -> DynamicImage {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    let hue = (hasher.finish() % 360) as f64;

    let base = hsv_to_rgb(hue, 0.55, 0.85);
    let shade = hsv_to_rgb((hue + 40.0) % 360.0, 0.65, 0.35);

    let span = (ART_WIDTH + ART_HEIGHT) as f64;
    let img = RgbImage::from_fn(ART_WIDTH, ART_HEIGHT, |x, y| {
        let t = (x + y) as f64 / span;
        Rgb([
            mix(base[0], shade[0], t),
            mix(base[1], shade[1], t),
            mix(base[2], shade[2], t),
        ])
    });
    DynamicImage::ImageRgb8(img)
}

fn mix(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Authorization;
    use image::GenericImageView;

    #[tokio::test]
    async fn test_load_generates_sequential_labels() {
        let source = PlaceholderSource::new("Pic", 3);
        let load = source.load().await;
        assert_eq!(load.authorization, Authorization::Granted);
        assert_eq!(load.items, vec!["Pic 1", "Pic 2", "Pic 3"]);
    }

    #[tokio::test]
    async fn test_zero_count_is_empty() {
        let source = PlaceholderSource::new("Pic", 0);
        assert!(source.load().await.items.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_display_always_yields_art() {
        let source = PlaceholderSource::new("Pic", 1);
        let img = source.fetch_display(&"Pic 1".to_string()).await.unwrap();
        assert_eq!(img.dimensions(), (ART_WIDTH, ART_HEIGHT));
    }

    #[test]
    fn test_art_is_stable_per_label() {
        let a = placeholder_art("Pic 1").to_rgb8();
        let b = placeholder_art("Pic 1").to_rgb8();
        assert_eq!(a.get_pixel(10, 10), b.get_pixel(10, 10));
    }
}
