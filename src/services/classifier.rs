// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category to map color classification.

use serde::Serialize;

/// Display color for a segment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketColor {
    Green,
    Orange,
    Red,
    /// Unknown or missing category
    Blue,
}

impl BucketColor {
    /// All buckets in legend order.
    pub const ALL: [BucketColor; 4] = [
        BucketColor::Green,
        BucketColor::Orange,
        BucketColor::Red,
        BucketColor::Blue,
    ];

    /// Color name as understood by the map widget.
    pub fn as_str(self) -> &'static str {
        match self {
            BucketColor::Green => "green",
            BucketColor::Orange => "orange",
            BucketColor::Red => "red",
            BucketColor::Blue => "blue",
        }
    }

    /// Name of the show/hide toggle for this bucket's layers.
    pub fn label(self) -> &'static str {
        match self {
            BucketColor::Green => "Good",
            BucketColor::Orange => "Medium",
            BucketColor::Red => "Bad",
            BucketColor::Blue => "Uncategorized",
        }
    }
}

/// Map a category to its bucket color. Matching is exact.
pub fn classify(category: Option<&str>) -> BucketColor {
    match category {
        Some("good") => BucketColor::Green,
        Some("medium") => BucketColor::Orange,
        Some("bad") => BucketColor::Red,
        _ => BucketColor::Blue,
    }
}
