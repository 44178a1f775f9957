//! Icon resources
//!
//! Icons are decoded once at load time into RGBA pixel buffers and handed out
//! as opaque handles. Widgets that swap icons (buttons) rebind handles only;
//! no decode happens after construction.

use std::collections::HashMap;
use std::path::Path;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Opaque handle to a decoded icon held by an [`IconStore`].
    pub struct IconHandle;
}

/// Errors raised while loading or looking up icon resources
#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    /// The file could not be read
    #[error("IO error reading icon: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but could not be decoded as an image
    #[error("failed to decode icon: {0}")]
    Decode(String),

    /// No icon with the given name has been loaded
    #[error("unknown icon: {0}")]
    UnknownIcon(String),
}

/// Decoded icon data ready for backend upload
#[derive(Debug, Clone)]
pub struct IconImage {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl IconImage {
    /// Load an icon from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path_ref = path.as_ref();

        log::debug!("Loading icon from: {:?}", path_ref);

        let img = image::open(path_ref).map_err(|e| ResourceError::Decode(e.to_string()))?;

        // Normalize to RGBA8, the only format backends are asked to handle
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded icon {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Load an icon from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ResourceError> {
        let img =
            image::load_from_memory(bytes).map_err(|e| ResourceError::Decode(e.to_string()))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded icon {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color icon (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
        }
    }
}

/// Store of decoded icons, addressable by handle or by name
#[derive(Default)]
pub struct IconStore {
    icons: SlotMap<IconHandle, IconImage>,
    by_name: HashMap<String, IconHandle>,
}

impl IconStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an icon file and register it under `name`
    ///
    /// Loading the same name again replaces the previous entry and returns a
    /// fresh handle; stale handles simply stop resolving.
    pub fn load<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<IconHandle, ResourceError> {
        let icon = IconImage::from_file(path)?;
        Ok(self.insert(name, icon))
    }

    /// Register an already-decoded icon under `name`
    pub fn insert(&mut self, name: &str, icon: IconImage) -> IconHandle {
        let handle = self.icons.insert(icon);
        if let Some(old) = self.by_name.insert(name.to_string(), handle) {
            self.icons.remove(old);
            log::debug!("Replaced icon {:?}", name);
        }
        handle
    }

    /// Get decoded icon data for a handle
    pub fn get(&self, handle: IconHandle) -> Option<&IconImage> {
        self.icons.get(handle)
    }

    /// Resolve a name to its handle
    pub fn handle(&self, name: &str) -> Result<IconHandle, ResourceError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ResourceError::UnknownIcon(name.to_string()))
    }

    /// Number of icons currently held
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the store holds no icons
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_dimensions() {
        let icon = IconImage::solid_color(4, 3, [255, 0, 0, 255]);
        assert_eq!(icon.width, 4);
        assert_eq!(icon.height, 3);
        assert_eq!(icon.data.len(), 4 * 3 * 4);
        assert_eq!(&icon.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let mut store = IconStore::new();
        let handle = store.insert("save", IconImage::solid_color(2, 2, [0, 255, 0, 255]));

        assert_eq!(store.handle("save").unwrap(), handle);
        assert_eq!(store.get(handle).unwrap().width, 2);
    }

    #[test]
    fn test_unknown_icon_is_error() {
        let store = IconStore::new();
        assert!(matches!(
            store.handle("missing"),
            Err(ResourceError::UnknownIcon(_))
        ));
    }

    #[test]
    fn test_reinsert_replaces() {
        let mut store = IconStore::new();
        let old = store.insert("play", IconImage::solid_color(2, 2, [0, 0, 0, 255]));
        let new = store.insert("play", IconImage::solid_color(8, 8, [0, 0, 0, 255]));

        assert_ne!(old, new);
        assert!(store.get(old).is_none());
        assert_eq!(store.get(new).unwrap().width, 8);
        assert_eq!(store.len(), 1);
    }
}
