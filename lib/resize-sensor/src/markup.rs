//! Static markup of the overlay, for rendering outside of a browser.

use crate::style::*;

use std::fmt::Write;



/// One `<div>` of the overlay.
#[derive(Clone,Copy,Debug)]
struct Node {
    class_name : &'static str,
    children   : &'static [Node],
}

const SCAFFOLD : Node = Node {
    class_name : ROOT_CLASS,
    children   : &[
        Node {class_name:EXPAND_CLASS, children:&[
            Node {class_name:EXPAND_CHILD_CLASS, children:&[]},
        ]},
        Node {class_name:CONTRACT_CLASS, children:&[
            Node {class_name:CONTRACT_CHILD_CLASS, children:&[]},
        ]},
    ],
};

fn render(node:&Node, out:&mut String) {
    // Writing to a `String` cannot fail.
    let _ = write!(out,"<div class=\"{}\">",node.class_name);
    for child in node.children {
        render(child,out);
    }
    out.push_str("</div>");
}

/// HTML of the overlay. The markup is inert until a sensor is mounted in a browser.
pub fn render_to_string() -> String {
    let mut out = String::new();
    render(&SCAFFOLD,&mut out);
    out
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_markup() {
        let expected = concat!(
            "<div class=\"resize-sensor-preact\">",
            "<div class=\"resize-sensor-preact__expand\">",
            "<div class=\"resize-sensor-preact__expand-child\"></div>",
            "</div>",
            "<div class=\"resize-sensor-preact__contract\">",
            "<div class=\"resize-sensor-preact__contract-child\"></div>",
            "</div>",
            "</div>",
        );
        assert_eq!(render_to_string(), expected);
    }
}
