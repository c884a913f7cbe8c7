//! Product catalog
//!
//! Three color variants of one product. Records are positional: index `i`
//! is both the carousel index that displays the record and the image slot
//! created for it.

use serde::Serialize;

/// One color variant on sale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub name: &'static str,
    pub model: &'static str,
    pub price: &'static str,
    /// Label under the selector tile
    pub color: &'static str,
    pub image_path: &'static str,
    pub icon_path: &'static str,
    pub color_icon_path: &'static str,
}

pub const CATALOG: [ProductRecord; 3] = [
    ProductRecord {
        name: "AirPods Max",
        model: "Rose Gold",
        price: "$899",
        color: "Rose",
        image_path: "/img-3.png",
        icon_path: "/icon-3.png",
        color_icon_path: "/color-3.svg",
    },
    ProductRecord {
        name: "AirPods Max",
        model: "Sky Blue",
        price: "$748",
        color: "Blue sky",
        image_path: "/img-2.png",
        icon_path: "/icon-2.png",
        color_icon_path: "/color-2.svg",
    },
    ProductRecord {
        name: "AirPods Max",
        model: "Silver Pro",
        price: "$564",
        color: "Silver",
        image_path: "/img-1.png",
        icon_path: "/icon-1.png",
        color_icon_path: "/color-1.svg",
    },
];

/// Number of records, slots, and presets
pub const ITEM_COUNT: usize = CATALOG.len();

/// Record at `index`, wrapping out-of-range indices
pub fn product(index: usize) -> &'static ProductRecord {
    &CATALOG[index % ITEM_COUNT]
}

/// Static copy around the product panel
pub mod copy {
    pub const BADGE: &str = "Free engraving";
    pub const CARE_HEADING: &str = "AppleCare+ for headphones and earphones";
    pub const CARE_BODY: &str = "Get up to two years' warranty covering an unlimited number of \
        accidental damage repairs and additional technical assistance**. \
        Includes tax on insurance premiums at the applicable rate";
}
