//! Lifecycle of UI components.

use crate::Result;



/// Lifecycle hooks a UI component exposes to the code embedding it.
pub trait Component {
    /// Element the component is rendered into.
    type Host;
    /// Configuration supplied by the embedding code.
    type Props;

    /// Render the component into `host` and start reacting to DOM events.
    fn mount(&self, host:&Self::Host) -> Result<()>;

    /// Apply new props without re-rendering.
    fn update(&self, props:Self::Props);

    /// Stop reacting to DOM events and remove the rendered elements.
    fn unmount(&self);

    /// Markup of the component for rendering outside of a browser.
    fn render_to_string(&self) -> String;
}
