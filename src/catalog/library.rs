//! Catalog loading and lookup

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::kind::{KindCategory, PlaceableKind};
use crate::core::{Error, Result};

/// On-disk catalog layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    kinds: Vec<PlaceableKind>,
}

/// Static table of placeable kinds, looked up by name.
#[derive(Debug, Clone)]
pub struct Catalog {
    kinds: Vec<PlaceableKind>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty footprints and duplicate names.
    pub fn from_kinds(kinds: Vec<PlaceableKind>) -> Result<Self> {
        let mut index = HashMap::with_capacity(kinds.len());
        for (i, kind) in kinds.iter().enumerate() {
            if kind.footprint_width == 0 || kind.footprint_height == 0 {
                return Err(Error::Catalog(format!(
                    "kind '{}' has an empty footprint ({}x{})",
                    kind.name, kind.footprint_width, kind.footprint_height
                )));
            }
            if index.insert(kind.name.clone(), i).is_some() {
                return Err(Error::Catalog(format!("duplicate kind '{}'", kind.name)));
            }
        }
        Ok(Self { kinds, index })
    }

    /// Parse a catalog from JSON (`{ "kinds": [...] }`)
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_kinds(file.kinds)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("Loaded {} placeable kinds from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        let file = CatalogFile { kinds: self.kinds.clone() };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The farm props shipped with the scene builder
    pub fn builtin() -> Self {
        use KindCategory::*;

        let kinds = vec![
            // Animals
            PlaceableKind::new("Cow", Animal, 2, 1).with_scale(1.25),
            PlaceableKind::new("Pig", Animal, 2, 1).with_spawn_yaw(90.0),
            PlaceableKind::new("Sheep", Animal, 2, 1).with_spawn_yaw(-180.0),
            PlaceableKind::new("Chicken", Animal, 1, 1).with_bounds_height(1.0),
            // Buildings
            PlaceableKind::new("Barn", Building, 5, 3).with_rest_height(7.0).with_bounds_height(6.0),
            PlaceableKind::new("Fence", Building, 2, 1).with_rest_height(7.0).with_spawn_yaw(90.0),
            PlaceableKind::new("Windmill", Building, 2, 2).with_bounds_height(8.0),
            // Decorations
            PlaceableKind::new("SRock", Decoration, 1, 1).with_bounds_height(0.5),
            PlaceableKind::new("Rock", Decoration, 2, 2),
            PlaceableKind::new("Hay", Decoration, 1, 1),
            PlaceableKind::new("Path", Decoration, 1, 1).with_rest_height(5.1).with_bounds_height(0.2),
            // Crops
            PlaceableKind::new("Carrot", Crop, 3, 1).laid_flat().with_bounds_height(1.0),
            PlaceableKind::new("Potato", Crop, 3, 1).laid_flat().with_bounds_height(1.0),
            PlaceableKind::new("Tomato", Crop, 3, 1).laid_flat().with_bounds_height(1.0),
            PlaceableKind::new("Wheat", Crop, 3, 1).laid_flat().with_bounds_height(1.0),
            // Nature
            PlaceableKind::new("Tree", Nature, 1, 1).with_bounds_height(6.0),
            PlaceableKind::new("Pine", Nature, 1, 1).with_bounds_height(6.0),
        ];

        let mut index = HashMap::with_capacity(kinds.len());
        for (i, kind) in kinds.iter().enumerate() {
            index.insert(kind.name.clone(), i);
        }
        Self { kinds, index }
    }

    /// Look up a kind by name
    pub fn get(&self, name: &str) -> Option<&PlaceableKind> {
        self.index.get(name).map(|&i| &self.kinds[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Kind names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.kinds.iter().map(|k| k.name.as_str())
    }

    /// Kinds in a category, in catalog order
    pub fn in_category(&self, category: KindCategory) -> impl Iterator<Item = &PlaceableKind> + '_ {
        self.kinds.iter().filter(move |k| k.category == category)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
