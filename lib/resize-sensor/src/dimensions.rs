//! Box sizes.

use std::fmt;



// ==================
// === Dimensions ===
// ==================

/// Size of a box in CSS pixels, as reported by `offsetWidth` / `offsetHeight`.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq,Hash)]
#[allow(missing_docs)]
pub struct Dimensions {
    pub width  : i32,
    pub height : i32,
}

impl Dimensions {
    /// Size of a hidden or detached element.
    pub const ZERO : Dimensions = Dimensions {width:0, height:0};

    /// Constructor.
    pub fn new(width:i32, height:i32) -> Self {
        Self {width,height}
    }

    /// Checks whether either axis differs from the `previous` size.
    pub fn is_resized_from(self, previous:Dimensions) -> bool {
        self.width != previous.width || self.height != previous.height
    }

    /// Per-axis maximum.
    pub fn max(self, other:Dimensions) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Per-axis difference clamped at zero.
    pub fn saturating_sub(self, other:Dimensions) -> Self {
        Self::new((self.width - other.width).max(0), (self.height - other.height).max(0))
    }

    /// Both axes multiplied by `factor`.
    pub fn scale(self, factor:i32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
        write!(f,"{}x{}",self.width,self.height)
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_detection() {
        let size = Dimensions::new(100,50);
        assert!(!size.is_resized_from(size));
        assert!(size.is_resized_from(Dimensions::new(100,51)));
        assert!(size.is_resized_from(Dimensions::new(99,50)));
        assert!(size.is_resized_from(Dimensions::ZERO));
    }

    #[test]
    fn arithmetic() {
        let a = Dimensions::new(100,20);
        let b = Dimensions::new(40,60);
        assert_eq!(a.max(b), Dimensions::new(100,60));
        assert_eq!(a.saturating_sub(b), Dimensions::new(60,0));
        assert_eq!(a.scale(2), Dimensions::new(200,40));
        assert_eq!(a.to_string(), "100x20");
    }
}
