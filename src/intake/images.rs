use crate::error::ValidationError;
use crate::model::UploadFile;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

pub const IMAGE_SLOTS: usize = 4;

#[derive(Debug, Default)]
struct Registry {
    next: u64,
    live: HashSet<String>,
}

/// Issues local preview URLs and tracks which are still live.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, file: &UploadFile) -> PreviewUrl {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.next += 1;
        let url = format!("blob:seller-console/{}/{}", registry.next, file.name);
        registry.live.insert(url.clone());
        trace!(%url, "Preview issued");
        PreviewUrl {
            url,
            registry: self.clone(),
        }
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .contains(url)
    }

    pub fn live_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .live
            .len()
    }

    fn revoke(&self, url: &str) {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if registry.live.remove(url) {
            trace!(%url, "Preview revoked");
        }
    }
}

/// A preview URL, revoked when dropped.
#[derive(Debug)]
pub struct PreviewUrl {
    url: String,
    registry: PreviewRegistry,
}

impl PreviewUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}

#[derive(Debug)]
pub struct ImageSlot {
    pub file: UploadFile,
    pub preview: PreviewUrl,
}

/// The four picture slots of the intake form.
///
/// Replacing or clearing a slot drops its old preview, which revokes it.
#[derive(Debug, Default)]
pub struct ImageSlots {
    slots: [Option<ImageSlot>; IMAGE_SLOTS],
    registry: PreviewRegistry,
}

impl ImageSlots {
    pub fn new(registry: PreviewRegistry) -> Self {
        Self {
            slots: Default::default(),
            registry,
        }
    }

    /// Puts `file` in slot `index`, or empties the slot with `None`.
    pub fn set(&mut self, index: usize, file: Option<UploadFile>) -> Result<(), ValidationError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ValidationError::NoSuchImageSlot(index))?;
        *slot = file.map(|file| ImageSlot {
            preview: self.registry.issue(&file),
            file,
        });
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ImageSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn preview(&self, index: usize) -> Option<&str> {
        self.get(index).map(|slot| slot.preview.as_str())
    }

    pub fn attached(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Attached files in slot order, gaps skipped.
    pub fn files(&self) -> Vec<UploadFile> {
        self.slots.iter().flatten().map(|s| s.file.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> UploadFile {
        UploadFile::new(name, "image/png", vec![0u8; 4])
    }

    #[test]
    fn replacing_a_slot_revokes_the_old_preview() {
        let registry = PreviewRegistry::new();
        let mut slots = ImageSlots::new(registry.clone());
        slots.set(1, Some(png("a.png"))).unwrap();
        let first = slots.preview(1).unwrap().to_string();

        slots.set(1, Some(png("b.png"))).unwrap();
        assert!(!registry.is_live(&first));
        assert_eq!(registry.live_count(), 1);

        slots.set(1, None).unwrap();
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn files_skip_empty_slots() {
        let mut slots = ImageSlots::new(PreviewRegistry::new());
        slots.set(3, Some(png("d.png"))).unwrap();
        slots.set(0, Some(png("a.png"))).unwrap();
        let names: Vec<_> = slots.files().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["a.png", "d.png"]);
        assert_eq!(slots.attached(), 2);
    }

    #[test]
    fn out_of_range_slot_is_an_error() {
        let mut slots = ImageSlots::new(PreviewRegistry::new());
        assert_eq!(
            slots.set(IMAGE_SLOTS, Some(png("x.png"))),
            Err(ValidationError::NoSuchImageSlot(IMAGE_SLOTS))
        );
    }

    #[test]
    fn dropping_the_slots_revokes_everything() {
        let registry = PreviewRegistry::new();
        {
            let mut slots = ImageSlots::new(registry.clone());
            slots.set(0, Some(png("a.png"))).unwrap();
            slots.set(2, Some(png("c.png"))).unwrap();
            assert_eq!(registry.live_count(), 2);
        }
        assert_eq!(registry.live_count(), 0);
    }
}
