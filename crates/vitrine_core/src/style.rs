//! Animatable style properties
//!
//! The geometry of a positioned element: its width, offsets from the
//! containing block and its rotation. Every field is optional so a partial
//! set can be merged over an element's current style, mirroring how a tween
//! only touches the properties it names.

use serde::Serialize;

/// Numeric style properties of an absolutely positioned element
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StyleProps {
    /// Width in CSS pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Top offset in CSS pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Left offset in CSS pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    /// Rotation in degrees (Z-axis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f32>,
}

impl StyleProps {
    /// Create a fully specified geometry
    pub const fn geometry(width: f32, top: f32, left: f32, rotate: f32) -> Self {
        Self {
            width: Some(width),
            top: Some(top),
            left: Some(left),
            rotate: Some(rotate),
        }
    }

    /// Builder: set width
    pub fn with_width(mut self, px: f32) -> Self {
        self.width = Some(px);
        self
    }

    /// Builder: set top and left offsets
    pub fn with_position(mut self, top: f32, left: f32) -> Self {
        self.top = Some(top);
        self.left = Some(left);
        self
    }

    /// Builder: set rotation
    pub fn with_rotate(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Interpolate between two property sets
    ///
    /// A property set on only one side holds that side's value.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            width: lerp_opt(self.width, other.width, t),
            top: lerp_opt(self.top, other.top, t),
            left: lerp_opt(self.left, other.left, t),
            rotate: lerp_opt(self.rotate, other.rotate, t),
        }
    }

    /// Overlay the properties set on `self` onto `base`
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            width: self.width.or(base.width),
            top: self.top.or(base.top),
            left: self.left.or(base.left),
            rotate: self.rotate.or(base.rotate),
        }
    }

    /// Restrict `self` to the properties set on `mask`
    pub fn masked_by(&self, mask: &Self) -> Self {
        Self {
            width: mask.width.and(self.width),
            top: mask.top.and(self.top),
            left: mask.left.and(self.left),
            rotate: mask.rotate.and(self.rotate),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.top.is_none() && self.left.is_none() && self.rotate.is_none()
    }

    /// Width, defaulting to 0.0 (auto) when unset
    pub fn resolved_width(&self) -> f32 {
        self.width.unwrap_or(0.0)
    }

    /// Whether every property set on either side differs by less than `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        fn close(a: Option<f32>, b: Option<f32>, epsilon: f32) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => (a - b).abs() < epsilon,
                (None, None) => true,
                _ => false,
            }
        }

        close(self.width, other.width, epsilon)
            && close(self.top, other.top, epsilon)
            && close(self.left, other.left, epsilon)
            && close(self.rotate, other.rotate, epsilon)
    }

    /// Inline CSS declarations for the properties that are set
    pub fn css_declarations(&self) -> String {
        let mut decls = Vec::with_capacity(4);
        if let Some(width) = self.width {
            decls.push(format!("width: {width}px"));
        }
        if let Some(top) = self.top {
            decls.push(format!("top: {top}px"));
        }
        if let Some(left) = self.left {
            decls.push(format!("left: {left}px"));
        }
        if let Some(rotate) = self.rotate {
            decls.push(format!("rotate: {rotate}deg"));
        }
        decls.join("; ")
    }
}

/// Helper to interpolate optional values
fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_interpolates_every_set_property() {
        let from = StyleProps::geometry(250.0, 500.0, -80.0, 120.0);
        let to = StyleProps::geometry(700.0, -20.0, 100.0, 0.0);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid, StyleProps::geometry(475.0, 240.0, 10.0, 60.0));
        assert_eq!(from.lerp(&to, 1.0), to);
    }

    #[test]
    fn one_sided_property_holds_its_value() {
        let from = StyleProps::default().with_width(100.0);
        let to = StyleProps::default().with_rotate(90.0);

        let mid = from.lerp(&to, 0.25);
        assert_eq!(mid.width, Some(100.0));
        assert_eq!(mid.rotate, Some(90.0));
        assert_eq!(mid.top, None);
    }

    #[test]
    fn merge_prefers_overlay_and_mask_keeps_named_fields() {
        let base = StyleProps::geometry(700.0, -20.0, 100.0, 0.0);
        let overlay = StyleProps::default().with_rotate(28.0);

        let merged = overlay.merged_over(&base);
        assert_eq!(merged, StyleProps::geometry(700.0, -20.0, 100.0, 28.0));

        let masked = merged.masked_by(&overlay);
        assert_eq!(masked, overlay);
    }

    #[test]
    fn css_lists_only_set_properties() {
        let props = StyleProps::default().with_width(250.0).with_rotate(120.0);
        assert_eq!(props.css_declarations(), "width: 250px; rotate: 120deg");
        assert!(StyleProps::default().is_empty());
    }

    #[test]
    fn serializes_without_unset_fields() {
        let json = serde_json::to_string(&StyleProps::default().with_position(-100.0, -80.0)).unwrap();
        assert_eq!(json, r#"{"top":-100.0,"left":-80.0}"#);
    }
}
