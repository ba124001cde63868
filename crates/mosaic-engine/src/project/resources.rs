//! Resource walking
//!
//! A resource walker visits every resource reference found while traversing
//! a configuration tree. Each category callback returns the possibly
//! rewritten resource name.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

use super::property::ResourceKind;

/// Visitor over resource references, one callback per resource category.
///
/// Every callback defaults to keeping the resource name unchanged.
pub trait ResourceWalker {
    /// Visit an image resource
    fn expose_image(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Visit an audio resource
    fn expose_audio(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Visit a font resource
    fn expose_font(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Visit a video resource
    fn expose_video(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Visit a JSON resource
    fn expose_json(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Visit a bitmap font resource
    fn expose_bitmap_font(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Dispatch to the callback for `kind`
    fn expose(&mut self, kind: ResourceKind, name: &str) -> String {
        match kind {
            ResourceKind::Image => self.expose_image(name),
            ResourceKind::Audio => self.expose_audio(name),
            ResourceKind::Font => self.expose_font(name),
            ResourceKind::Video => self.expose_video(name),
            ResourceKind::Json => self.expose_json(name),
            ResourceKind::BitmapFont => self.expose_bitmap_font(name),
        }
    }
}

/// Collects the resources in use, per kind, in first-visit order.
#[derive(Debug, Clone, Default)]
pub struct ResourceCollector {
    resources: BTreeMap<ResourceKind, Vec<String>>,
    visits: usize,
}

impl ResourceCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct resources of one kind
    pub fn resources(&self, kind: ResourceKind) -> &[String] {
        self.resources.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over kinds that have at least one resource
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &[String])> {
        self.resources.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Total number of callbacks received, duplicates included
    pub fn visits(&self) -> usize {
        self.visits
    }

    fn record(&mut self, kind: ResourceKind, name: &str) -> String {
        self.visits += 1;
        let names = self.resources.entry(kind).or_default();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        name.to_string()
    }
}

impl ResourceWalker for ResourceCollector {
    fn expose_image(&mut self, name: &str) -> String {
        self.record(ResourceKind::Image, name)
    }

    fn expose_audio(&mut self, name: &str) -> String {
        self.record(ResourceKind::Audio, name)
    }

    fn expose_font(&mut self, name: &str) -> String {
        self.record(ResourceKind::Font, name)
    }

    fn expose_video(&mut self, name: &str) -> String {
        self.record(ResourceKind::Video, name)
    }

    fn expose_json(&mut self, name: &str) -> String {
        self.record(ResourceKind::Json, name)
    }

    fn expose_bitmap_font(&mut self, name: &str) -> String {
        self.record(ResourceKind::BitmapFont, name)
    }
}

/// Renames resources of every kind through a rename table.
#[derive(Debug, Clone, Default)]
pub struct ResourceRenamer {
    renames: FxHashMap<String, String>,
    rewritten: usize,
}

impl ResourceRenamer {
    /// Create a renamer from `(old, new)` pairs
    pub fn new<I, K, V>(renames: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            renames: renames
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            rewritten: 0,
        }
    }

    /// Number of references rewritten so far
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    fn rename(&mut self, name: &str) -> String {
        match self.renames.get(name) {
            Some(new_name) => {
                self.rewritten += 1;
                new_name.clone()
            }
            None => name.to_string(),
        }
    }
}

impl ResourceWalker for ResourceRenamer {
    fn expose_image(&mut self, name: &str) -> String {
        self.rename(name)
    }

    fn expose_audio(&mut self, name: &str) -> String {
        self.rename(name)
    }

    fn expose_font(&mut self, name: &str) -> String {
        self.rename(name)
    }

    fn expose_video(&mut self, name: &str) -> String {
        self.rename(name)
    }

    fn expose_json(&mut self, name: &str) -> String {
        self.rename(name)
    }

    fn expose_bitmap_font(&mut self, name: &str) -> String {
        self.rename(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_dedups_per_kind() {
        let mut collector = ResourceCollector::new();
        collector.expose(ResourceKind::Image, "hero.png");
        collector.expose(ResourceKind::Image, "hero.png");
        collector.expose(ResourceKind::Audio, "jump.wav");
        collector.expose(ResourceKind::Image, "");

        assert_eq!(collector.resources(ResourceKind::Image), ["hero.png"]);
        assert_eq!(collector.resources(ResourceKind::Audio), ["jump.wav"]);
        assert!(collector.resources(ResourceKind::Font).is_empty());
        assert_eq!(collector.visits(), 4);
    }

    #[test]
    fn test_renamer_rewrites_known_names_only() {
        let mut renamer = ResourceRenamer::new([("old.png", "new.png")]);
        assert_eq!(renamer.expose(ResourceKind::Image, "old.png"), "new.png");
        assert_eq!(renamer.expose(ResourceKind::Video, "intro.mp4"), "intro.mp4");
        assert_eq!(renamer.rewritten(), 1);
    }

    #[test]
    fn test_default_walker_keeps_names() {
        struct Passive;
        impl ResourceWalker for Passive {}

        let mut walker = Passive;
        for kind in ResourceKind::ALL {
            assert_eq!(walker.expose(kind, "asset"), "asset");
        }
    }
}
