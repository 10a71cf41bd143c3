//! Key records placed on the layout surface.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a key.
pub type KeyId = Uuid;

/// Visual category of a key. Controls appearance only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCategory {
    #[default]
    Letter,
    Modifier,
    Space,
    Enter,
    Special,
}

impl KeyCategory {
    /// All categories, in palette order.
    pub const ALL: [KeyCategory; 5] = [
        KeyCategory::Letter,
        KeyCategory::Modifier,
        KeyCategory::Space,
        KeyCategory::Enter,
        KeyCategory::Special,
    ];

    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Modifier => "modifier",
            Self::Space => "space",
            Self::Enter => "enter",
            Self::Special => "special",
        }
    }
}

/// One placed key widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub(crate) id: KeyId,
    /// Text shown inside the key.
    pub label: String,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Top-left corner in surface-local coordinates.
    pub position: Point,
    /// Appearance category.
    pub category: KeyCategory,
}

impl Key {
    /// Create a new letter key with a fresh identifier.
    pub fn new(label: impl Into<String>, position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            width,
            height,
            position,
            category: KeyCategory::default(),
        }
    }

    /// Set the key category.
    pub fn with_category(mut self, category: KeyCategory) -> Self {
        self.category = category;
        self
    }

    /// The key's identifier.
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// Bounding rectangle in surface-local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Check whether a surface-local point falls inside the key.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
