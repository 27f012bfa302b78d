//! The stylesheet shared by all sensors and the class names it styles.

use crate::prelude::*;

use crate::dom::Dom;
use crate::Result;



// =================
// === Constants ===
// =================

/// Class of the overlay element.
pub const ROOT_CLASS : &str = "resize-sensor-preact";
/// Class of the trigger reacting to growth.
pub const EXPAND_CLASS : &str = "resize-sensor-preact__expand";
/// Class of the inner element of the expand trigger.
pub const EXPAND_CHILD_CLASS : &str = "resize-sensor-preact__expand-child";
/// Class of the trigger reacting to shrinking.
pub const CONTRACT_CLASS : &str = "resize-sensor-preact__contract";
/// Class of the inner element of the contract trigger.
pub const CONTRACT_CHILD_CLASS : &str = "resize-sensor-preact__contract-child";
/// Name of the no-op animation played by the overlay. Its start signals that the overlay was
/// rendered.
pub const ANIMATION_NAME : &str = "resize-sensor-preact-animation";

/// The shared stylesheet. The overlay and its triggers fill the observed element and stay
/// invisible, the contract child is twice the size of its trigger, and the overlay plays a 1ms
/// animation so that becoming visible emits `animationstart`.
pub const STYLE : &str = concat!(
    ".resize-sensor-preact,.resize-sensor-preact > div,.resize-sensor-preact ",
    ".resize-sensor-preact__contract-child{display:block;position:absolute;top:0px;left:0px;",
    "height:100%;width:100%;opacity:0;overflow:hidden;pointer-events:none;z-index:-1;}",
    ".resize-sensor-preact{background:#eee;overflow:auto;direction:ltr;}",
    ".resize-sensor-preact .resize-sensor-preact__contract-child{width:200%;height:200%;}",
    "@keyframes resize-sensor-preact-animation{from{opacity:0;}to{opacity:0;}}",
    "@-webkit-keyframes resize-sensor-preact-animation{from{opacity:0;}to{opacity:0;}}",
    "@-moz-keyframes resize-sensor-preact-animation{from{opacity:0;}to{opacity:0;}}",
    "@-o-keyframes resize-sensor-preact-animation{from{opacity:0;}to{opacity:0;}}",
    ".resize-sensor-preact{-webkit-animation-name:resize-sensor-preact-animation;",
    "-moz-animation-name:resize-sensor-preact-animation;",
    "-o-animation-name:resize-sensor-preact-animation;",
    "-ms-animation-name:resize-sensor-preact-animation;",
    "animation-name:resize-sensor-preact-animation;-webkit-animation-duration:1ms;",
    "-moz-animation-duration:1ms;-o-animation-duration:1ms;-ms-animation-duration:1ms;",
    "animation-duration:1ms;}",
);



// =================
// === Injection ===
// =================

thread_local! {
    static INITIALIZED : Cell<bool> = Cell::new(false);
}

/// Checks whether the stylesheet was already inserted by this thread.
pub fn is_injected() -> bool {
    INITIALIZED.with(Cell::get)
}

/// Insert [`STYLE`] unless it was already inserted. Returns whether this call inserted it.
pub fn ensure_injected<D:Dom>(dom:&D) -> Result<bool> {
    if is_injected() {
        return Ok(false)
    }
    dom.insert_style(STYLE)?;
    INITIALIZED.with(|initialized| initialized.set(true));
    Ok(true)
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dom::mock::MockDom;

    #[test]
    fn injected_once() {
        let dom = MockDom::new();
        assert!(!is_injected());
        assert_eq!(ensure_injected(&dom), Ok(true));
        assert_eq!(ensure_injected(&dom), Ok(false));
        assert_eq!(dom.styles(), vec![STYLE.to_string()]);
        assert!(is_injected());
    }

    #[test]
    fn failed_injection_is_retried() {
        let server = MockDom::server();
        assert!(ensure_injected(&server).is_err());
        assert!(!is_injected());
        let dom = MockDom::new();
        assert_eq!(ensure_injected(&dom), Ok(true));
    }

    #[test]
    fn stylesheet_styles_all_classes() {
        for class in &[ROOT_CLASS,CONTRACT_CHILD_CLASS,ANIMATION_NAME] {
            assert!(STYLE.contains(class));
        }
        assert!(STYLE.contains("width:200%;height:200%;"));
        assert!(STYLE.contains("animation-duration:1ms;"));
    }
}
