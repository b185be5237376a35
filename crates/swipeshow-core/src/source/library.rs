use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use image::DynamicImage;
use tracing::{debug, info, warn};

use super::{Authorization, ItemSource, Photo, SourceLoad};

/// File extensions treated as library photos
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Check whether a path looks like a decodable photo
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Photo library backed by a directory of image files
#[derive(Debug, Clone)]
pub struct LibrarySource {
    root: PathBuf,
    recursive: bool,
}

/// Result of walking the library directory
#[derive(Debug, Default)]
struct Scan {
    entries: Vec<(PathBuf, SystemTime)>,
    unreadable: usize,
}

impl LibrarySource {
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            root: root.into(),
            recursive,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ask for access to the library directory
    pub async fn request_authorization(&self) -> Authorization {
        match tokio::fs::read_dir(&self.root).await {
            Ok(_) => Authorization::Granted,
            Err(e) => {
                warn!("Photo library {} not accessible: {}", self.root.display(), e);
                Authorization::Denied
            }
        }
    }

    /// Authorize, then enumerate photos newest first
    pub async fn request_and_load(&self) -> SourceLoad<Photo> {
        if !self.request_authorization().await.allows_access() {
            return SourceLoad::denied();
        }

        let root = self.root.clone();
        let recursive = self.recursive;
        let scan = match tokio::task::spawn_blocking(move || scan_library(&root, recursive)).await {
            Ok(scan) => scan,
            Err(e) => {
                warn!("Library scan task failed: {}", e);
                return SourceLoad::denied();
            }
        };

        let authorization = if scan.unreadable > 0 {
            warn!("{} library entries could not be inspected", scan.unreadable);
            Authorization::Limited
        } else {
            Authorization::Granted
        };

        let mut entries = scan.entries;
        sort_newest_first(&mut entries);
        let items: Vec<Photo> = entries
            .into_iter()
            .map(|(path, created)| Photo::new(path, DateTime::<Local>::from(created)))
            .collect();

        info!(
            "Loaded {} photos from {} ({:?})",
            items.len(),
            self.root.display(),
            authorization
        );

        SourceLoad {
            authorization,
            items,
        }
    }
}

#[async_trait]
impl ItemSource for LibrarySource {
    type Item = Photo;

    fn describe(&self) -> String {
        format!("photo library {}", self.root.display())
    }

    async fn load(&self) -> SourceLoad<Photo> {
        self.request_and_load().await
    }

    async fn fetch_display(&self, item: &Photo) -> Option<DynamicImage> {
        let bytes = match tokio::fs::read(&item.path).await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                warn!("Photo {} is empty", item.path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read photo {}: {}", item.path.display(), e);
                return None;
            }
        };

        // Decoding is CPU-bound
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await;
        match decoded {
            Ok(Ok(img)) => {
                debug!("Decoded {} ({}x{})", item.path.display(), img.width(), img.height());
                Some(img)
            }
            Ok(Err(e)) => {
                warn!("Failed to decode photo {}: {}", item.path.display(), e);
                None
            }
            Err(e) => {
                warn!("Decode task failed for {}: {}", item.path.display(), e);
                None
            }
        }
    }

    fn label(&self, item: &Photo) -> String {
        format!("{}  {}", item.file_name(), item.created.format("%Y-%m-%d %H:%M"))
    }

    fn location(&self, item: &Photo) -> Option<PathBuf> {
        Some(item.path.clone())
    }
}

/// Newest first; equal timestamps fall back to path order
fn sort_newest_first(entries: &mut [(PathBuf, SystemTime)]) {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}

/// Creation time, falling back to modification time
fn timestamp(metadata: &std::fs::Metadata) -> Option<SystemTime> {
    metadata.created().or_else(|_| metadata.modified()).ok()
}

fn scan_library(root: &Path, recursive: bool) -> Scan {
    let mut scan = Scan::default();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let read_dir = match std::fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                debug!("Skipping {}: {}", dir.display(), e);
                scan.unreadable += 1;
                continue;
            }
        };

        for entry in read_dir {
            let Ok(entry) = entry else {
                scan.unreadable += 1;
                continue;
            };
            let path = entry.path();
            let Ok(metadata) = entry.metadata() else {
                scan.unreadable += 1;
                continue;
            };

            if metadata.is_dir() {
                if recursive {
                    pending.push(path);
                }
                continue;
            }

            if !metadata.is_file() || !is_supported_image(&path) {
                continue;
            }

            match timestamp(&metadata) {
                Some(created) => scan.entries.push((path, created)),
                None => scan.unreadable += 1,
            }
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn write_png(path: &Path) {
        let img = image::RgbImage::from_pixel(4, 3, image::Rgb([200, 40, 40]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("dir/b.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn test_sort_newest_first() {
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mut entries = vec![
            (PathBuf::from("old.jpg"), base),
            (PathBuf::from("new.jpg"), base + Duration::from_secs(60)),
            (PathBuf::from("b_same.jpg"), base + Duration::from_secs(30)),
            (PathBuf::from("a_same.jpg"), base + Duration::from_secs(30)),
        ];
        sort_newest_first(&mut entries);
        let names: Vec<_> = entries.iter().map(|(p, _)| p.to_str().unwrap()).collect();
        assert_eq!(names, vec!["new.jpg", "a_same.jpg", "b_same.jpg", "old.jpg"]);
    }

    #[tokio::test]
    async fn test_denied_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = LibrarySource::new(dir.path().join("missing"), false);

        assert_eq!(source.request_authorization().await, Authorization::Denied);
        let load = source.load().await;
        assert_eq!(load.authorization, Authorization::Denied);
        assert!(load.items.is_empty());
    }

    #[tokio::test]
    async fn test_load_filters_images() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("one.png"));
        write_png(&dir.path().join("two.png"));
        std::fs::write(dir.path().join("readme.txt"), "hi").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        write_png(&dir.path().join("nested").join("three.png"));

        let flat = LibrarySource::new(dir.path(), false).load().await;
        assert_eq!(flat.authorization, Authorization::Granted);
        let mut names: Vec<_> = flat.items.iter().map(|p| p.file_name()).collect();
        names.sort();
        assert_eq!(names, vec!["one.png", "two.png"]);

        let deep = LibrarySource::new(dir.path(), true).load().await;
        assert_eq!(deep.items.len(), 3);
    }

    #[tokio::test]
    async fn test_reload_generates_fresh_ids() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("one.png"));
        let source = LibrarySource::new(dir.path(), false);

        let first = source.load().await.items;
        let second = source.load().await.items;
        assert_eq!(first[0].path, second[0].path);
        assert_ne!(first[0].id, second[0].id);
    }

    #[tokio::test]
    async fn test_fetch_display_decodes_or_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.jpg");
        write_png(&good);
        std::fs::write(&bad, b"definitely not a jpeg").unwrap();

        let source = LibrarySource::new(dir.path(), false);
        let photos = source.load().await.items;
        let find = |name: &str| photos.iter().find(|p| p.file_name() == name).unwrap().clone();

        let img = source.fetch_display(&find("good.png")).await.unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
        assert!(source.fetch_display(&find("bad.jpg")).await.is_none());

        // A photo deleted after enumeration is a blank slot, not an error
        let gone = find("good.png");
        std::fs::remove_file(&gone.path).unwrap();
        assert!(source.fetch_display(&gone).await.is_none());
    }

    #[tokio::test]
    async fn test_location_and_label() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("shot.png"));
        let source = LibrarySource::new(dir.path(), false);
        let photo = source.load().await.items.remove(0);

        assert_eq!(source.location(&photo), Some(dir.path().join("shot.png")));
        assert!(source.label(&photo).starts_with("shot.png"));
    }
}
