//! View-state machine and keyboard dispatch.

use strum_macros::{AsRefStr, Display, EnumString};

/// The three mutually exclusive statistics-panel views.
///
/// Sessions start in [`ViewState::Overview`]; there is no terminal state.
/// The machine resets to `Overview` when new data is fetched.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ViewState {
    /// Summary view with navigation hints.
    #[default]
    Overview,
    /// Full trend narration.
    Detail,
    /// Boundary description of the current view.
    Boundary,
}

/// Map pan direction, from the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PanDirection {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// Map zoom direction, from the `+`/`-` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ZoomDirection {
    /// Zoom in (`=`/`+`).
    In,
    /// Zoom out (`-`/`_`).
    Out,
}

/// A user keystroke decoded into an interface action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// `i` — show the full trend narration.
    ShowDetail,
    /// `l` — show the boundary description.
    ShowBoundary,
    /// `b`/`k` — return to the overview.
    Back,
    /// `m` — hand keyboard focus to the map widget.
    FocusMap,
    /// `h` — read the shortcut keys.
    ShowHelp,
    /// Arrow keys — pan the map.
    Pan(PanDirection),
    /// `+`/`-` — zoom the map.
    Zoom(ZoomDirection),
}

impl KeyAction {
    /// Decodes a DOM-style key name. Unbound keys return `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "i" => Some(Self::ShowDetail),
            "l" => Some(Self::ShowBoundary),
            "b" | "k" => Some(Self::Back),
            "m" => Some(Self::FocusMap),
            "h" => Some(Self::ShowHelp),
            "ArrowUp" => Some(Self::Pan(PanDirection::Up)),
            "ArrowDown" => Some(Self::Pan(PanDirection::Down)),
            "ArrowLeft" => Some(Self::Pan(PanDirection::Left)),
            "ArrowRight" => Some(Self::Pan(PanDirection::Right)),
            "=" | "+" => Some(Self::Zoom(ZoomDirection::In)),
            "-" | "_" => Some(Self::Zoom(ZoomDirection::Out)),
            _ => None,
        }
    }
}

/// A side effect the embedding shell must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus to the map widget.
    FocusMap,
    /// Display the shortcut-key help text.
    ShowHelp,
    /// Pan the map.
    PanMap(PanDirection),
    /// Zoom the map.
    ZoomMap(ZoomDirection),
}

/// The result of applying a key action to a view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The view state after the action.
    pub state: ViewState,
    /// Side effect for the shell, if any.
    pub effect: Option<Effect>,
    /// Whether the view state actually changed (re-entering the current
    /// state is a no-op and needs no re-render).
    pub changed: bool,
}

impl ViewState {
    /// Applies a key action, returning the next state and any side effect.
    ///
    /// View transitions (`i`, `l`, `b`, `k`) change only the state; map
    /// interactions (`m`, arrows, zoom) and help (`h`) leave the state
    /// unchanged and surface as effects.
    #[must_use]
    pub fn apply(self, action: KeyAction) -> Transition {
        let (state, effect) = match action {
            KeyAction::ShowDetail => (Self::Detail, None),
            KeyAction::ShowBoundary => (Self::Boundary, None),
            KeyAction::Back => (Self::Overview, None),
            KeyAction::FocusMap => (self, Some(Effect::FocusMap)),
            KeyAction::ShowHelp => (self, Some(Effect::ShowHelp)),
            KeyAction::Pan(direction) => (self, Some(Effect::PanMap(direction))),
            KeyAction::Zoom(direction) => (self, Some(Effect::ZoomMap(direction))),
        };
        Transition {
            state,
            effect,
            changed: state != self,
        }
    }
}
