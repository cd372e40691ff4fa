use std::fmt;
use std::rc::Rc;

/// Page sections reachable from the navigation bar, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NavAnchor {
    About,
    Projects,
    Leadership,
    Skills,
    Resume,
    Contact,
}

impl NavAnchor {
    pub const ALL: [NavAnchor; 6] = [
        NavAnchor::About,
        NavAnchor::Projects,
        NavAnchor::Leadership,
        NavAnchor::Skills,
        NavAnchor::Resume,
        NavAnchor::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavAnchor::About => "About",
            NavAnchor::Projects => "Projects",
            NavAnchor::Leadership => "Leadership",
            NavAnchor::Skills => "Skills",
            NavAnchor::Resume => "Resume",
            NavAnchor::Contact => "Contact",
        }
    }

    /// `id` attribute of the section element this anchor scrolls to.
    pub fn target_id(&self) -> &'static str {
        match self {
            NavAnchor::About => "about",
            NavAnchor::Projects => "projects",
            NavAnchor::Leadership => "leadership",
            NavAnchor::Skills => "skills",
            NavAnchor::Resume => "resume",
            NavAnchor::Contact => "contact",
        }
    }

    pub fn from_target_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.target_id() == id)
    }

    /// Fragment link used as the `href` fallback when scripting is unavailable.
    pub fn href(&self) -> String {
        format!("#{}", self.target_id())
    }
}

impl fmt::Display for NavAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Smooth-scroll capability. Returns `false` when `id` names nothing on the
/// page, in which case the viewport must not move.
pub trait ScrollToTarget {
    fn scroll_to(&self, id: &str) -> bool;
}

impl<T: ScrollToTarget + ?Sized> ScrollToTarget for &T {
    fn scroll_to(&self, id: &str) -> bool {
        (**self).scroll_to(id)
    }
}

impl<T: ScrollToTarget + ?Sized> ScrollToTarget for Rc<T> {
    fn scroll_to(&self, id: &str) -> bool {
        (**self).scroll_to(id)
    }
}

/// Mouse state of a click on a navigation link.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Click {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Click {
    /// Primary button, no modifiers. Anything else (new tab, new window,
    /// download) is left to the browser.
    pub fn is_plain(&self) -> bool {
        self.button == 0 && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

/// Stateless dispatcher from anchors to a [`ScrollToTarget`].
#[derive(Clone)]
pub struct Navigator<T> {
    target: T,
}

impl<T: ScrollToTarget> Navigator<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn go(&self, anchor: NavAnchor) -> bool {
        self.go_to_id(anchor.target_id())
    }

    pub fn go_to_id(&self, id: &str) -> bool {
        self.target.scroll_to(id)
    }
}
