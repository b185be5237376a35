//! Background loading of the collection and of display pixels

use std::sync::Arc;

use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};
use swipeshow_core::ItemSource;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::FetchRequest;
use crate::event::{FetchResult, LoadResult};

/// Longest edge kept after fetch; halfblock cells never need more
pub const MAX_DISPLAY_EDGE: u32 = 480;

/// Spawn an async task that loads the whole collection
pub fn spawn_load<S: ItemSource>(source: Arc<S>, tx: mpsc::UnboundedSender<LoadResult<S::Item>>) {
    tokio::spawn(async move {
        let load = source.load().await;
        debug!(
            "Loaded {} items from {} ({:?})",
            load.items.len(),
            source.describe(),
            load.authorization
        );
        let _ = tx.send(LoadResult { load });
    });
}

/// Spawn an async task that fetches and downsizes the active item's pixels
pub fn spawn_fetch<S: ItemSource>(
    source: Arc<S>,
    request: FetchRequest<S::Item>,
    tx: mpsc::UnboundedSender<FetchResult>,
) {
    tokio::spawn(async move {
        let FetchRequest { item, generation } = request;
        let image = match source.fetch_display(&item).await {
            Some(img) => match tokio::task::spawn_blocking(move || shrink_for_terminal(img)).await {
                Ok(rgba) => Some(rgba),
                Err(e) => {
                    warn!("Resize task failed: {}", e);
                    None
                }
            },
            None => None,
        };
        let _ = tx.send(FetchResult { generation, image });
    });
}

/// Downscale to at most [`MAX_DISPLAY_EDGE`] on the long side
pub fn shrink_for_terminal(img: DynamicImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width.max(height) <= MAX_DISPLAY_EDGE {
        return img.to_rgba8();
    }
    img.resize(MAX_DISPLAY_EDGE, MAX_DISPLAY_EDGE, FilterType::Triangle)
        .to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipeshow_core::PlaceholderSource;

    #[test]
    fn test_shrink_keeps_small_images() {
        let img = DynamicImage::new_rgba8(100, 50);
        let rgba = shrink_for_terminal(img);
        assert_eq!(rgba.dimensions(), (100, 50));
    }

    #[test]
    fn test_shrink_bounds_long_edge() {
        let img = DynamicImage::new_rgba8(1920, 960);
        let rgba = shrink_for_terminal(img);
        assert_eq!(rgba.dimensions(), (480, 240));
    }

    #[tokio::test]
    async fn test_spawn_load_delivers_collection() {
        let source = Arc::new(PlaceholderSource::new("Pic", 4));
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_load(source, tx);

        let result = rx.recv().await.unwrap();
        assert_eq!(result.load.items.len(), 4);
        assert_eq!(result.load.items[0], "Pic 1");
    }

    #[tokio::test]
    async fn test_spawn_fetch_tags_generation() {
        let source = Arc::new(PlaceholderSource::new("Pic", 1));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let request = FetchRequest {
            item: "Pic 1".to_string(),
            generation: 7,
        };
        spawn_fetch(source, request, tx);

        let result = rx.recv().await.unwrap();
        assert_eq!(result.generation, 7);
        assert!(result.image.is_some());
    }
}
